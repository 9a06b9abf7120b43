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


//! # Width Derivation
//!
//! The bit width of an integer type is derived from the type itself. A
//! pattern constant is truncated into the type, which keeps exactly its low
//! 1, 2, 4 or 8 bytes, and those surviving bytes are folded into a single
//! byte with one multiply and one shift:
//!
//! ```text
//! pattern = 0x20_00_10_08_08        bytes 4..0
//! folded  = (y * 0x1_0101_0001) >> 32 & 0xff
//!         = y.byte0 + y.byte1 + y.byte2 + y.byte4
//! ```
//!
//! An 8-bit type keeps `0x08`, a 16-bit type `0x0808` (8 + 8), a 32-bit type
//! `0x00100808` (8 + 8 + 16) and a 64-bit type the whole pattern
//! (8 + 8 + 16 + 32). The fold runs in a `const` context, so the result is
//! baked into `Int::BITS` at compile time.

use crate::num::kind::Width;
use crate::num::traits::Int;

/// Pattern whose truncation to an integer type encodes that type's width.
pub const WIDTH_PATTERN: u64 = 0x20_0010_0808;

const FOLD_MULTIPLIER: u64 = 0x1_0101_0001;

/// Folds the bytes surviving a truncation of `WIDTH_PATTERN` into a bit count.
///
/// `truncated` is the pattern cast into the type of interest and read back
/// as a `u64` bit pattern.
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::width::{fold_width, WIDTH_PATTERN};
/// assert_eq!(fold_width(WIDTH_PATTERN as u8 as u64), 8);
/// assert_eq!(fold_width(WIDTH_PATTERN as u16 as u64), 16);
/// assert_eq!(fold_width(WIDTH_PATTERN as u32 as u64), 32);
/// assert_eq!(fold_width(WIDTH_PATTERN), 64);
/// ```
#[inline(always)]
pub const fn fold_width(truncated: u64) -> u32 {
    ((truncated.wrapping_mul(FOLD_MULTIPLIER) >> 32) & 0xff) as u32
}

/// Derives the `Width` of a type from its truncated pattern.
///
/// Evaluated only in `const` items; an unsupported width fails compilation.
pub(crate) const fn derive_width(truncated: u64) -> Width {
    match Width::from_bits(fold_width(truncated)) {
        Some(width) => width,
        None => panic!("integer type is not 8, 16, 32 or 64 bits wide"),
    }
}

/// Returns the bit width of `T`: 8, 16, 32 or 64.
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::width::bits;
/// assert_eq!(bits::<i8>(), 8);
/// assert_eq!(bits::<u32>(), 32);
/// ```
#[inline(always)]
pub const fn bits<T: Int>() -> u32 {
    T::BITS
}

/// Returns the bit width of `T` as a `Width`.
#[inline(always)]
pub const fn width<T: Int>() -> Width {
    T::WIDTH
}
