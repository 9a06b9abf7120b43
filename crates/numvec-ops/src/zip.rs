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


use numvec_core::error::{VectorResult, ensure_same_len};

/// Applies `f` pairwise to two equal-length slices.
///
/// Fails before calling `f` if the lengths differ.
#[inline]
pub(crate) fn zip_with<A, B, R, F>(a: &[A], b: &[B], f: F) -> VectorResult<Vec<R>>
where
    A: Copy,
    B: Copy,
    F: Fn(A, B) -> R,
{
    ensure_same_len(a, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numvec_core::VectorError;

    #[test]
    fn test_zip_with_pairs_in_order() {
        let got = zip_with(&[1, 2, 3], &[10, 20, 30], |x, y| x * y).unwrap();
        assert_eq!(got, [10, 40, 90]);
    }

    #[test]
    fn test_zip_with_does_not_call_f_on_mismatch() {
        let got = zip_with(&[1, 2], &[1], |_: i32, _: i32| -> i32 {
            panic!("must not be called")
        });
        assert!(matches!(got, Err(VectorError::LengthMismatch(_))));
    }
}
