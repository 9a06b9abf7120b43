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


//! # Comparisons
//!
//! Elementwise comparisons between two equal-length slices, and comparisons
//! of every element against a broadcast scalar. Ordering comparisons need a
//! `NumberOrdered` kind; equality works for every `Number`, complex included.
//! Float comparisons follow IEEE rules, so any comparison involving NaN is
//! `false` except `ne`.

use crate::zip::zip_with;
use numvec_core::error::VectorResult;
use numvec_core::num::{Number, NumberOrdered};

macro_rules! vector_compare {
    ($(#[$doc:meta])* $name:ident, $bound:ident, $op:tt) => {
        $(#[$doc])*
        pub fn $name<T: $bound>(a: &[T], b: &[T]) -> VectorResult<Vec<bool>> {
            zip_with(a, b, |x: T, y: T| x $op y)
        }
    };
}

macro_rules! scalar_compare {
    ($(#[$doc:meta])* $name:ident, $bound:ident, $op:tt) => {
        $(#[$doc])*
        pub fn $name<T: $bound>(a: &[T], b: T) -> Vec<bool> {
            a.iter().map(|&x| x $op b).collect()
        }
    };
}

vector_compare!(
    /// Elementwise `a < b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numvec_ops::compare::lt;
    /// assert_eq!(lt(&[1, 5, 3], &[2, 5, 1]).unwrap(), [true, false, false]);
    /// ```
    lt, NumberOrdered, <
);
vector_compare!(
    /// Elementwise `a > b`.
    gt, NumberOrdered, >
);
vector_compare!(
    /// Elementwise `a <= b`.
    le, NumberOrdered, <=
);
vector_compare!(
    /// Elementwise `a >= b`.
    ge, NumberOrdered, >=
);
vector_compare!(
    /// Elementwise `a == b`.
    eq, Number, ==
);
vector_compare!(
    /// Elementwise `a != b`.
    ne, Number, !=
);

scalar_compare!(
    /// `x < b` for every element `x` of `a`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numvec_ops::compare::lt_scalar;
    /// assert_eq!(lt_scalar(&[1.0, 2.0, 3.0], 2.0), [true, false, false]);
    /// ```
    lt_scalar, NumberOrdered, <
);
scalar_compare!(
    /// `x > b` for every element `x` of `a`.
    gt_scalar, NumberOrdered, >
);
scalar_compare!(
    /// `x <= b` for every element `x` of `a`.
    le_scalar, NumberOrdered, <=
);
scalar_compare!(
    /// `x >= b` for every element `x` of `a`.
    ge_scalar, NumberOrdered, >=
);
scalar_compare!(
    /// `x == b` for every element `x` of `a`.
    eq_scalar, Number, ==
);
scalar_compare!(
    /// `x != b` for every element `x` of `a`.
    ne_scalar, Number, !=
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::{not, or};
    use num_complex::Complex;
    use numvec_core::VectorError;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_vector_comparisons() {
        let a = [1i32, 2, 3];
        let b = [3i32, 2, 1];
        assert_eq!(lt(&a, &b).unwrap(), [true, false, false]);
        assert_eq!(gt(&a, &b).unwrap(), [false, false, true]);
        assert_eq!(le(&a, &b).unwrap(), [true, true, false]);
        assert_eq!(ge(&a, &b).unwrap(), [false, true, true]);
        assert_eq!(eq(&a, &b).unwrap(), [false, true, false]);
        assert_eq!(ne(&a, &b).unwrap(), [true, false, true]);
    }

    #[test]
    fn test_scalar_comparisons() {
        let a = [1u8, 2, 3];
        assert_eq!(lt_scalar(&a, 2), [true, false, false]);
        assert_eq!(gt_scalar(&a, 2), [false, false, true]);
        assert_eq!(le_scalar(&a, 2), [true, true, false]);
        assert_eq!(ge_scalar(&a, 2), [false, true, true]);
        assert_eq!(eq_scalar(&a, 2), [false, true, false]);
        assert_eq!(ne_scalar(&a, 2), [true, false, true]);
    }

    #[test]
    fn test_scalar_never_fails_on_empty() {
        assert!(lt_scalar::<f64>(&[], 0.0).is_empty());
        assert!(eq_scalar::<i64>(&[], 0).is_empty());
    }

    #[test]
    fn test_nan_compares_false() {
        let a = [f64::NAN, 1.0];
        let b = [f64::NAN, 1.0];
        assert_eq!(eq(&a, &b).unwrap(), [false, true]);
        assert_eq!(ne(&a, &b).unwrap(), [true, false]);
        assert_eq!(lt(&a, &b).unwrap(), [false, false]);
        assert_eq!(ge_scalar(&a, 0.0), [false, true]);
    }

    #[test]
    fn test_complex_equality() {
        let a = [Complex::new(1.0f32, 1.0), Complex::new(0.0, 2.0)];
        let b = [Complex::new(1.0f32, 1.0), Complex::new(2.0, 0.0)];
        assert_eq!(eq(&a, &b).unwrap(), [true, false]);
        assert_eq!(ne_scalar(&a, Complex::new(0.0, 2.0)), [true, false]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let a = [1i16, 2];
        let b = [1i16];
        assert!(matches!(lt(&a, &b), Err(VectorError::LengthMismatch(_))));
        assert!(matches!(gt(&a, &b), Err(VectorError::LengthMismatch(_))));
        assert!(matches!(le(&a, &b), Err(VectorError::LengthMismatch(_))));
        assert!(matches!(ge(&a, &b), Err(VectorError::LengthMismatch(_))));
        assert!(matches!(eq(&a, &b), Err(VectorError::LengthMismatch(_))));
        assert!(matches!(ne(&a, &b), Err(VectorError::LengthMismatch(_))));
    }

    #[test]
    fn test_integer_comparisons_are_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let a: Vec<i32> = (0..256).map(|_| rng.random_range(-8..8)).collect();
        let b: Vec<i32> = (0..256).map(|_| rng.random_range(-8..8)).collect();

        assert_eq!(lt(&a, &b).unwrap(), not(&ge(&a, &b).unwrap()));
        assert_eq!(gt(&a, &b).unwrap(), lt(&b, &a).unwrap());
        assert_eq!(ne(&a, &b).unwrap(), not(&eq(&a, &b).unwrap()));
        assert_eq!(
            le(&a, &b).unwrap(),
            or(&lt(&a, &b).unwrap(), &eq(&a, &b).unwrap()).unwrap()
        );
    }
}
