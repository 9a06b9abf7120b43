// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


use core::ops::Div;
use num_complex::Complex;

/// A trait for elementwise division by value that refuses integer division
/// by zero.
///
/// Integer kinds return `None` for a zero divisor and otherwise wrap, so
/// `MIN / -1` yields `MIN` instead of panicking. Float and complex kinds
/// always succeed and follow IEEE semantics (infinities and NaN included).
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::ops::checked_arithmetic::CheckedDivVal;
/// assert_eq!(100u8.checked_div_val(7), Some(14));
/// assert_eq!(100u8.checked_div_val(0), None);
/// assert_eq!(i8::MIN.checked_div_val(-1), Some(i8::MIN));
/// assert_eq!(1.0f64.checked_div_val(0.0), Some(f64::INFINITY));
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs division by value, returning `None` for an integer zero divisor.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_div_impl_int {
    ($t:ty) => {
        impl CheckedDivVal for $t {
            #[inline(always)]
            fn checked_div_val(self, v: $t) -> Option<$t> {
                if v == 0 {
                    None
                } else {
                    Some(<$t>::wrapping_div(self, v))
                }
            }
        }
    };
}

macro_rules! checked_div_impl_field {
    ($t:ty) => {
        impl CheckedDivVal for $t {
            #[inline(always)]
            fn checked_div_val(self, v: $t) -> Option<$t> {
                Some(self / v)
            }
        }
    };
}

checked_div_impl_int!(u8);
checked_div_impl_int!(u16);
checked_div_impl_int!(u32);
checked_div_impl_int!(u64);

checked_div_impl_int!(i8);
checked_div_impl_int!(i16);
checked_div_impl_int!(i32);
checked_div_impl_int!(i64);

checked_div_impl_field!(f32);
checked_div_impl_field!(f64);
checked_div_impl_field!(Complex<f32>);
checked_div_impl_field!(Complex<f64>);

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_div_val<T: CheckedDivVal>(a: T, b: T) -> Option<T> {
        a.checked_div_val(b)
    }

    #[test]
    fn test_integer_division_truncates_toward_zero() {
        assert_eq!(checked_div_val(7i32, 2i32), Some(3));
        assert_eq!(checked_div_val(-7i32, 2i32), Some(-3));
        assert_eq!(checked_div_val(u64::MAX, u64::MAX), Some(1));
    }

    #[test]
    fn test_integer_zero_divisor_is_none() {
        assert_eq!(checked_div_val(1u8, 0u8), None);
        assert_eq!(checked_div_val(0i64, 0i64), None);
    }

    #[test]
    fn test_signed_min_over_minus_one_wraps() {
        assert_eq!(checked_div_val(i16::MIN, -1i16), Some(i16::MIN));
        assert_eq!(checked_div_val(i64::MIN, -1i64), Some(i64::MIN));
    }

    #[test]
    fn test_float_and_complex_division() {
        assert_eq!(checked_div_val(1.0f32, 4.0f32), Some(0.25));
        assert!(checked_div_val(0.0f64, 0.0f64).is_some_and(f64::is_nan));

        let a = Complex::new(5.0f64, 5.0);
        let b = Complex::new(3.0f64, -1.0);
        assert_eq!(checked_div_val(a, b), Some(Complex::new(1.0, 2.0)));
    }
}
