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


//! # Fill, Select and Merge
//!
//! Builders that produce a sequence from a scalar or from a boolean mask.

use numvec_core::error::{VectorResult, ensure_same_len3};
use numvec_core::num::Number;

/// Returns `n` copies of `value`.
///
/// # Examples
///
/// ```rust
/// # use numvec_ops::select::fill;
/// assert_eq!(fill(3, 7u16), [7, 7, 7]);
/// ```
pub fn fill<T: Number>(n: usize, value: T) -> Vec<T> {
    vec![value; n]
}

/// Maps each mask entry to `if_true` or `if_false`.
///
/// The output has the mask's length. Never fails.
///
/// # Examples
///
/// ```rust
/// # use numvec_ops::select::select;
/// assert_eq!(select(&[true, false, true], 1.0f32, -1.0), [1.0, -1.0, 1.0]);
/// ```
pub fn select<T: Number>(mask: &[bool], if_true: T, if_false: T) -> Vec<T> {
    mask.iter()
        .map(|&m| if m { if_true } else { if_false })
        .collect()
}

/// Picks, per index, the element of `if_true` or `if_false` according to
/// `mask`.
///
/// # Errors
///
/// `VectorError::LengthMismatch` unless all three slices have equal length.
///
/// # Examples
///
/// ```rust
/// # use numvec_ops::select::merge;
/// let got = merge(&[true, false, false], &[1, 2, 3], &[10, 20, 30]).unwrap();
/// assert_eq!(got, [1, 20, 30]);
/// ```
pub fn merge<T: Number>(mask: &[bool], if_true: &[T], if_false: &[T]) -> VectorResult<Vec<T>> {
    ensure_same_len3(mask, if_true, if_false)?;
    Ok(mask
        .iter()
        .zip(if_true.iter().zip(if_false))
        .map(|(&m, (&t, &f))| if m { t } else { f })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::gt_scalar;
    use numvec_core::VectorError;
    use numvec_core::error::LengthMismatchError;

    #[test]
    fn test_fill() {
        assert_eq!(fill(4, -1i8), [-1, -1, -1, -1]);
        assert!(fill(0, 1.5f64).is_empty());
    }

    #[test]
    fn test_select() {
        assert_eq!(select(&[false, true], 3u64, 9), [9, 3]);
        assert!(select::<i32>(&[], 1, 0).is_empty());
    }

    #[test]
    fn test_merge_with_comparison_mask() {
        // Clamp negatives to zero by merging against a zero vector.
        let x = [-3i32, 4, -1, 7];
        let mask = gt_scalar(&x, 0);
        let got = merge(&mask, &x, &fill(x.len(), 0)).unwrap();
        assert_eq!(got, [0, 4, 0, 7]);
    }

    #[test]
    fn test_merge_length_mismatch() {
        let err = merge(&[true, false], &[1u8, 2], &[3u8]).unwrap_err();
        assert_eq!(
            err,
            VectorError::LengthMismatch(LengthMismatchError { left: 2, right: 1 })
        );
        assert!(merge(&[true], &[1u8, 2], &[3u8, 4]).is_err());
        assert!(merge(&[true, true], &[1u8], &[3u8, 4]).is_err());
    }
}
