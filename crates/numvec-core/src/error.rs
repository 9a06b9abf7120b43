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


//! # Error Taxonomy
//!
//! Every failure in numvec is a precondition violation detected before any
//! output is produced. Violations are reported as a `VectorError` returned
//! from the offending call; nothing is partially computed, retried, or
//! silently clamped to make the inputs fit.
//!
//! - `LengthMismatch`: operand sequences of an elementwise, comparison, or
//!   merge operation differ in length.
//! - `WideningUnpack`: `unpack_le` was asked to produce a wider element type.
//! - `NarrowingPack`: `pack_le` was asked to produce a narrower element type.
//! - `DivisionByZero`: integer elementwise division met a zero divisor.

/// Result alias used across the numvec crates.
pub type VectorResult<T> = Result<T, VectorError>;

/// Details about operand sequences whose lengths differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthMismatchError {
    /// Length of the first operand.
    pub left: usize,
    /// Length of the first operand that disagreed with `left`.
    pub right: usize,
}

impl std::fmt::Display for LengthMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector length mismatch: {} != {}", self.left, self.right)
    }
}

impl std::error::Error for LengthMismatchError {}

/// Details about a pack or unpack request in the wrong width direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidthDirectionError {
    /// Bit width of the source element type.
    pub source_bits: u32,
    /// Bit width of the requested target element type.
    pub target_bits: u32,
}

impl std::fmt::Display for WidthDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "source width {} bits, target width {} bits",
            self.source_bits, self.target_bits
        )
    }
}

impl std::error::Error for WidthDirectionError {}

/// The error type for all numvec operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Operand sequences have different lengths.
    LengthMismatch(LengthMismatchError),
    /// Unpacking into a type wider than the source.
    WideningUnpack(WidthDirectionError),
    /// Packing into a type narrower than the source.
    NarrowingPack(WidthDirectionError),
    /// An integer divisor was zero at `index`.
    DivisionByZero {
        /// Position of the first zero divisor.
        index: usize,
    },
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch(e) => write!(f, "{e}"),
            Self::WideningUnpack(e) => {
                write!(f, "Cannot unpack into a larger type ({e})")
            }
            Self::NarrowingPack(e) => {
                write!(f, "Cannot pack into a smaller type ({e})")
            }
            Self::DivisionByZero { index } => {
                write!(f, "Integer division by zero at index {index}")
            }
        }
    }
}

impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LengthMismatch(e) => Some(e),
            Self::WideningUnpack(e) | Self::NarrowingPack(e) => Some(e),
            Self::DivisionByZero { .. } => None,
        }
    }
}

impl From<LengthMismatchError> for VectorError {
    fn from(e: LengthMismatchError) -> Self {
        Self::LengthMismatch(e)
    }
}

/// Checks that two operand sequences have the same length.
///
/// Returns the common length on success.
///
/// # Examples
///
/// ```rust
/// # use numvec_core::error::{ensure_same_len, VectorError};
/// assert_eq!(ensure_same_len(&[1, 2, 3], &[4, 5, 6]), Ok(3));
/// assert!(matches!(
///     ensure_same_len(&[1, 2], &[1]),
///     Err(VectorError::LengthMismatch(_))
/// ));
/// ```
#[inline]
pub fn ensure_same_len<A, B>(a: &[A], b: &[B]) -> VectorResult<usize> {
    if a.len() != b.len() {
        let err = LengthMismatchError {
            left: a.len(),
            right: b.len(),
        };
        log::debug!("rejecting elementwise call: {err}");
        return Err(err.into());
    }
    Ok(a.len())
}

/// Checks that three operand sequences have the same length.
///
/// Returns the common length on success. The reported mismatch names the
/// first sequence and the first operand that disagrees with it.
#[inline]
pub fn ensure_same_len3<A, B, C>(a: &[A], b: &[B], c: &[C]) -> VectorResult<usize> {
    ensure_same_len(a, b)?;
    ensure_same_len(a, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_same_len_ok() {
        assert_eq!(ensure_same_len::<i32, i32>(&[], &[]), Ok(0));
        assert_eq!(ensure_same_len(&[1u8, 2], &[true, false]), Ok(2));
    }

    #[test]
    fn test_ensure_same_len_mismatch_reports_both_lengths() {
        let err = ensure_same_len(&[1, 2, 3], &[1]).unwrap_err();
        assert_eq!(
            err,
            VectorError::LengthMismatch(LengthMismatchError { left: 3, right: 1 })
        );
    }

    #[test]
    fn test_ensure_same_len3_checks_third_operand() {
        assert_eq!(ensure_same_len3(&[1], &[2], &[3]), Ok(1));
        let err = ensure_same_len3(&[true, false], &[1, 2], &[1]).unwrap_err();
        assert_eq!(
            err,
            VectorError::LengthMismatch(LengthMismatchError { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_display_messages() {
        let mismatch = VectorError::from(LengthMismatchError { left: 4, right: 2 });
        assert_eq!(format!("{}", mismatch), "Vector length mismatch: 4 != 2");

        let unpack = VectorError::WideningUnpack(WidthDirectionError {
            source_bits: 8,
            target_bits: 32,
        });
        assert_eq!(
            format!("{}", unpack),
            "Cannot unpack into a larger type (source width 8 bits, target width 32 bits)"
        );

        let pack = VectorError::NarrowingPack(WidthDirectionError {
            source_bits: 64,
            target_bits: 16,
        });
        assert_eq!(
            format!("{}", pack),
            "Cannot pack into a smaller type (source width 64 bits, target width 16 bits)"
        );

        let div = VectorError::DivisionByZero { index: 7 };
        assert_eq!(format!("{}", div), "Integer division by zero at index 7");
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = VectorError::from(LengthMismatchError { left: 1, right: 0 });
        assert!(err.source().is_some());
        assert!(VectorError::DivisionByZero { index: 0 }.source().is_none());
    }
}
