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


//! # Little-Endian Packing
//!
//! Reinterprets an integer sequence as a flat little-endian byte stream and
//! re-chunks it into elements of a different width.
//!
//! - `unpack_le` splits every wide source element into `bits(S) / bits(T)`
//!   narrower elements, least significant group first.
//! - `pack_le` joins up to `bits(T) / bits(S)` narrow source elements into
//!   one wider element, the first source element landing in the least
//!   significant position. A short final group leaves the unused high bits
//!   of the last element zero.
//!
//! Before a source element is shifted into place it is masked down to its
//! own width. Without the mask, the sign extension of a negative narrow
//! element would bleed into the groups above it.
//!
//! ```text
//! pack_le::<i8, u16>(&[-1, 1])
//!   -1 as u64 = 0xffff_ffff_ffff_ffff  & 0xff -> 0x00ff
//!    1 as u64 = 0x0000_0000_0000_0001  & 0xff -> 0x0001 << 8
//!   result    = 0x01ff
//! ```
//!
//! Widths are 8, 16, 32 or 64 bits, so the ratio between source and target
//! width is always a whole power of two.

use numvec_core::error::{VectorError, VectorResult, WidthDirectionError};
use numvec_core::num::{Int, unsigned_max};

fn direction_error<S: Int, T: Int>() -> WidthDirectionError {
    WidthDirectionError {
        source_bits: S::BITS,
        target_bits: T::BITS,
    }
}

/// Number of `T` elements produced per `S` element, if `S` is not narrower.
fn split_ratio<S: Int, T: Int>() -> VectorResult<usize> {
    S::WIDTH.ratio(T::WIDTH).ok_or_else(|| {
        let err = VectorError::WideningUnpack(direction_error::<S, T>());
        log::debug!("rejecting unpack {} -> {}: {err}", S::KIND, T::KIND);
        err
    })
}

/// Number of `S` elements consumed per `T` element, if `S` is not wider.
fn join_ratio<S: Int, T: Int>() -> VectorResult<usize> {
    T::WIDTH.ratio(S::WIDTH).ok_or_else(|| {
        let err = VectorError::NarrowingPack(direction_error::<S, T>());
        log::debug!("rejecting pack {} -> {}: {err}", S::KIND, T::KIND);
        err
    })
}

fn split_le<S: Int, T: Int>(a: &[S], per_source: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() * per_source);
    for &x in a {
        let raw = x.as_u64_bits();
        out.extend((0..per_source as u32).map(|k| T::from_u64_bits(raw >> (k * T::BITS))));
    }
    out
}

fn join_le<S: Int, T: Int>(a: &[S], per_target: usize) -> Vec<T> {
    let mask = unsigned_max::<S, u64>();
    a.chunks(per_target)
        .map(|group| {
            let packed = group
                .iter()
                .zip((0u32..).step_by(S::BITS as usize))
                .fold(0u64, |acc, (&x, shift)| acc | ((x.as_u64_bits() & mask) << shift));
            T::from_u64_bits(packed)
        })
        .collect()
}

/// Returns the length `unpack_le::<S, T>` produces for `n` input elements.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::pack::unpacked_len;
/// assert_eq!(unpacked_len::<u32, u8>(3), Ok(12));
/// assert!(unpacked_len::<u8, u32>(3).is_err());
/// ```
pub fn unpacked_len<S: Int, T: Int>(n: usize) -> VectorResult<usize> {
    Ok(n.saturating_mul(split_ratio::<S, T>()?))
}

/// Returns the length `pack_le::<S, T>` produces for `n` input elements.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::pack::packed_len;
/// assert_eq!(packed_len::<u8, u32>(5), Ok(2));
/// assert_eq!(packed_len::<u8, u32>(0), Ok(0));
/// assert!(packed_len::<u32, u8>(5).is_err());
/// ```
pub fn packed_len<S: Int, T: Int>(n: usize) -> VectorResult<usize> {
    Ok(n.div_ceil(join_ratio::<S, T>()?))
}

/// Unpacks every element of `a` into `bits(S) / bits(T)` elements of `T`,
/// least significant group first.
///
/// # Errors
///
/// `VectorError::WideningUnpack` if `T` is wider than `S`.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::pack::unpack_le;
/// let bytes: Vec<u8> = unpack_le(&[0x0102_0304u32]).unwrap();
/// assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01]);
///
/// let halves: Vec<i16> = unpack_le(&[0x8202u32]).unwrap();
/// assert_eq!(halves, [-32254, 0]);
/// ```
pub fn unpack_le<S: Int, T: Int>(a: &[S]) -> VectorResult<Vec<T>> {
    let per_source = split_ratio::<S, T>()?;
    log::trace!("unpack_le {} -> {} ({} elements)", S::KIND, T::KIND, a.len());

    Ok(split_le(a, per_source))
}

/// Packs groups of `bits(T) / bits(S)` elements of `a` into single `T`
/// elements, the first element of each group in the least significant bits.
///
/// The output has `ceil(a.len() / group)` elements. When the input does not
/// divide evenly, the last element holds the remaining source elements and
/// its unused high bits are zero.
///
/// # Errors
///
/// `VectorError::NarrowingPack` if `T` is narrower than `S`.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::pack::pack_le;
/// let words: Vec<u32> = pack_le(&[1u8, 2, 3]).unwrap();
/// assert_eq!(words, [0x0003_0201]);
///
/// let masked: Vec<u16> = pack_le(&[-1i8, 1]).unwrap();
/// assert_eq!(masked, [0x01ff]);
/// ```
pub fn pack_le<S: Int, T: Int>(a: &[S]) -> VectorResult<Vec<T>> {
    let per_target = join_ratio::<S, T>()?;
    log::trace!("pack_le {} -> {} ({} elements)", S::KIND, T::KIND, a.len());

    Ok(join_le(a, per_target))
}

/// Returns the little-endian byte stream of `a`.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::pack::to_le_bytes;
/// assert_eq!(to_le_bytes(&[0x0102u16, -2i16 as u16]), [0x02, 0x01, 0xfe, 0xff]);
/// ```
pub fn to_le_bytes<S: Int>(a: &[S]) -> Vec<u8> {
    split_le(a, S::WIDTH.bytes())
}

/// Reads a little-endian byte stream back into elements of `T`.
///
/// A trailing run shorter than one element fills the low bytes of a final
/// element whose remaining bytes are zero.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::pack::from_le_bytes;
/// let words: Vec<u16> = from_le_bytes(&[0x02, 0x01, 0xff]);
/// assert_eq!(words, [0x0102, 0x00ff]);
/// ```
pub fn from_le_bytes<T: Int>(bytes: &[u8]) -> Vec<T> {
    join_le(bytes, T::WIDTH.bytes())
}
