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


use core::ops::{Add, Mul, Sub};
use num_complex::Complex;

macro_rules! wrapping_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! operator_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $op:tt) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                self $op v
            }
        }
    };
}

/// Wrapping addition by value (no references).
///
/// Integers wrap around at the type boundary using two's complement, the
/// same result the native `+` produces in release builds, but without the
/// debug-build overflow panic. Float and complex kinds use IEEE addition.
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::ops::wrapping_arithmetic::WrappingAddVal;
///
/// let a: u8 = 250;
/// let b: u8 = 10;
/// assert_eq!(a.wrapping_add_val(b), 4); // 260 mod 256
///
/// let x: i8 = 127;
/// assert_eq!(x.wrapping_add_val(1), -128);
///
/// let f: f32 = 1.5;
/// assert_eq!(f.wrapping_add_val(2.0), 3.5);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u8, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u16, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u32, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u64, wrapping_add);

wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i8, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i16, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i32, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i64, wrapping_add);

operator_impl_binary_val!(WrappingAddVal, wrapping_add_val, f32, +);
operator_impl_binary_val!(WrappingAddVal, wrapping_add_val, f64, +);
operator_impl_binary_val!(WrappingAddVal, wrapping_add_val, Complex<f32>, +);
operator_impl_binary_val!(WrappingAddVal, wrapping_add_val, Complex<f64>, +);

/// Wrapping subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::ops::wrapping_arithmetic::WrappingSubVal;
///
/// let a: u8 = 5;
/// let b: u8 = 10;
/// assert_eq!(a.wrapping_sub_val(b), 251);
///
/// let x: i8 = -128;
/// assert_eq!(x.wrapping_sub_val(1), 127);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u8, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u16, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u32, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u64, wrapping_sub);

wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i8, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i16, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i32, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i64, wrapping_sub);

operator_impl_binary_val!(WrappingSubVal, wrapping_sub_val, f32, -);
operator_impl_binary_val!(WrappingSubVal, wrapping_sub_val, f64, -);
operator_impl_binary_val!(WrappingSubVal, wrapping_sub_val, Complex<f32>, -);
operator_impl_binary_val!(WrappingSubVal, wrapping_sub_val, Complex<f64>, -);

/// Wrapping multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::ops::wrapping_arithmetic::WrappingMulVal;
///
/// let a: u8 = 64;
/// let b: u8 = 10;
/// assert_eq!(a.wrapping_mul_val(b), 128); // 640 mod 256
///
/// let x: i8 = 9;
/// assert_eq!(x.wrapping_mul_val(9), 81);
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u8, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u16, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u32, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u64, wrapping_mul);

wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i8, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i16, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i32, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i64, wrapping_mul);

operator_impl_binary_val!(WrappingMulVal, wrapping_mul_val, f32, *);
operator_impl_binary_val!(WrappingMulVal, wrapping_mul_val, f64, *);
operator_impl_binary_val!(WrappingMulVal, wrapping_mul_val, Complex<f32>, *);
operator_impl_binary_val!(WrappingMulVal, wrapping_mul_val, Complex<f64>, *);

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapping_add_val<T: WrappingAddVal>(a: T, b: T) -> T {
        a.wrapping_add_val(b)
    }
    fn wrapping_sub_val<T: WrappingSubVal>(a: T, b: T) -> T {
        a.wrapping_sub_val(b)
    }
    fn wrapping_mul_val<T: WrappingMulVal>(a: T, b: T) -> T {
        a.wrapping_mul_val(b)
    }

    #[test]
    fn test_wrapping_add_val() {
        assert_eq!(wrapping_add_val(255u8, 1u8), 0u8);
        assert_eq!(wrapping_add_val(127i8, 1i8), -128i8);
        assert_eq!(wrapping_add_val(u64::MAX, 2u64), 1u64);
        assert_eq!(wrapping_add_val(0.25f64, 0.5f64), 0.75f64);
    }

    #[test]
    fn test_wrapping_sub_val() {
        assert_eq!(wrapping_sub_val(0u8, 1u8), 255u8);
        assert_eq!(wrapping_sub_val(-128i8, 1i8), 127i8);
        assert_eq!(wrapping_sub_val(10i32, 3i32), 7i32);
    }

    #[test]
    fn test_wrapping_mul_val() {
        assert_eq!(wrapping_mul_val(16u8, 16u8), 0u8);
        assert_eq!(wrapping_mul_val(-128i8, -1i8), -128i8);
        assert_eq!(wrapping_mul_val(3u16, 7u16), 21u16);
    }

    #[test]
    fn test_complex_uses_field_arithmetic() {
        let a = Complex::new(1.0f64, 2.0);
        let b = Complex::new(3.0f64, -1.0);
        assert_eq!(wrapping_add_val(a, b), Complex::new(4.0, 1.0));
        assert_eq!(wrapping_sub_val(a, b), Complex::new(-2.0, 3.0));
        // (1 + 2i)(3 - i) = 3 - i + 6i - 2i^2 = 5 + 5i
        assert_eq!(wrapping_mul_val(a, b), Complex::new(5.0, 5.0));
    }
}
