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


//! # Elementwise Arithmetic
//!
//! `add`, `sub`, `mul` and `div` over equal-length slices of any `Number`.
//! Integer results wrap in two's complement; float and complex results
//! follow IEEE arithmetic. Integer division refuses zero divisors.

use crate::zip::zip_with;
use numvec_core::error::{VectorError, VectorResult, ensure_same_len};
use numvec_core::num::Number;

/// Elementwise sum of `a` and `b`.
///
/// # Examples
///
/// ```rust
/// # use numvec_ops::arith::add;
/// assert_eq!(add(&[1u8, 255], &[2, 1]).unwrap(), [3, 0]);
/// assert!(add(&[1.0f32], &[]).is_err());
/// ```
pub fn add<T: Number>(a: &[T], b: &[T]) -> VectorResult<Vec<T>> {
    zip_with(a, b, T::wrapping_add_val)
}

/// Elementwise difference `a - b`.
pub fn sub<T: Number>(a: &[T], b: &[T]) -> VectorResult<Vec<T>> {
    zip_with(a, b, T::wrapping_sub_val)
}

/// Elementwise product of `a` and `b`.
pub fn mul<T: Number>(a: &[T], b: &[T]) -> VectorResult<Vec<T>> {
    zip_with(a, b, T::wrapping_mul_val)
}

/// Elementwise quotient `a / b`.
///
/// # Errors
///
/// `VectorError::LengthMismatch` if the lengths differ, or
/// `VectorError::DivisionByZero` naming the first integer zero divisor.
///
/// # Examples
///
/// ```rust
/// # use numvec_ops::arith::div;
/// # use numvec_core::VectorError;
/// assert_eq!(div(&[9i32, -9], &[2, 2]).unwrap(), [4, -4]);
/// assert_eq!(
///     div(&[1u8, 2, 3], &[1, 0, 0]),
///     Err(VectorError::DivisionByZero { index: 1 })
/// );
/// assert!(div(&[1.0f64], &[0.0]).unwrap()[0].is_infinite());
/// ```
pub fn div<T: Number>(a: &[T], b: &[T]) -> VectorResult<Vec<T>> {
    ensure_same_len(a, b)?;
    a.iter()
        .zip(b)
        .enumerate()
        .map(|(index, (&x, &y))| {
            x.checked_div_val(y).ok_or_else(|| {
                log::debug!("rejecting div over {}: zero divisor at index {index}", T::KIND);
                VectorError::DivisionByZero { index }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::fill;
    use num_complex::Complex;

    fn identity_holds<T: Number>(x: &[T], one: T) {
        let ones = fill(x.len(), one);
        let lhs = mul(&add(x, &ones).unwrap(), &sub(x, &ones).unwrap()).unwrap();
        let rhs = sub(&mul(x, x).unwrap(), &ones).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_arithmetic_identity_i8() {
        let x: Vec<i8> = (1..=9).collect();
        let ones = fill(x.len(), 1i8);
        let y = mul(&add(&x, &ones).unwrap(), &sub(&x, &ones).unwrap()).unwrap();
        let z = sub(&mul(&x, &x).unwrap(), &ones).unwrap();
        let want = [0i8, 3, 8, 15, 24, 35, 48, 63, 80];
        assert_eq!(y, want);
        assert_eq!(z, want);
    }

    #[test]
    fn test_arithmetic_identity_every_kind() {
        identity_holds(&[1i16, 2, 100], 1);
        identity_holds(&[-7i32, 0, 46_000], 1);
        identity_holds(&[-3_000_000_000i64, 5], 1);
        identity_holds(&[1u8, 2, 15], 1);
        identity_holds(&[1u16, 255], 1);
        identity_holds(&[1u32, 65_535], 1);
        identity_holds(&[1u64, 4_000_000_000], 1);
        identity_holds(&[-2.0f32, 0.5, 1024.0], 1.0);
        identity_holds(&[-2.0f64, 3.25, 1e6], 1.0);
        identity_holds(
            &[Complex::new(1.0f32, 2.0), Complex::new(-3.0, 0.5)],
            Complex::new(1.0, 0.0),
        );
        identity_holds(
            &[Complex::new(2.0f64, -1.0), Complex::new(0.0, 4.0)],
            Complex::new(1.0, 0.0),
        );
    }

    #[test]
    fn test_integer_overflow_wraps() {
        assert_eq!(add(&[i8::MAX], &[1]).unwrap(), [i8::MIN]);
        assert_eq!(sub(&[0u32], &[1]).unwrap(), [u32::MAX]);
        assert_eq!(mul(&[0x100u16], &[0x100]).unwrap(), [0]);
    }

    #[test]
    fn test_div() {
        assert_eq!(div(&[7u8, 200], &[2, 10]).unwrap(), [3, 20]);
        assert_eq!(div(&[i64::MIN], &[-1]).unwrap(), [i64::MIN]);
        assert_eq!(div(&[1.0f32, -1.0], &[4.0, 4.0]).unwrap(), [0.25, -0.25]);
    }

    #[test]
    fn test_div_reports_first_zero_divisor() {
        assert_eq!(
            div(&[1i16, 2, 3, 4], &[1, 1, 0, 0]),
            Err(VectorError::DivisionByZero { index: 2 })
        );
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let a = [1i32, 2, 3];
        let b = [1i32, 2];
        assert!(matches!(add(&a, &b), Err(VectorError::LengthMismatch(_))));
        assert!(matches!(sub(&a, &b), Err(VectorError::LengthMismatch(_))));
        assert!(matches!(mul(&a, &b), Err(VectorError::LengthMismatch(_))));
        assert!(matches!(div(&a, &b), Err(VectorError::LengthMismatch(_))));
        // Length is checked before any divisor.
        assert!(matches!(
            div(&[1i32], &[0, 0]),
            Err(VectorError::LengthMismatch(_))
        ));
    }

    #[test]
    fn test_empty_operands() {
        assert!(add::<u8>(&[], &[]).unwrap().is_empty());
        assert!(div::<i32>(&[], &[]).unwrap().is_empty());
    }
}
