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


//! # numvec Convert
//!
//! Conversions between sequences of fixed-width integers whose widths and
//! bounds are read off the element types themselves.
//!
//! ## Modules
//!
//! - `clamp`: Saturating conversions (`clamp_signed_to_unsigned`,
//!   `clamp_unsigned_to_signed`, `clamp_signed_to_signed`,
//!   `clamp_unsigned_to_unsigned`, and the generic `clamp`).
//! - `lossy`: `as`-cast conversions (`convert`) that truncate or extend
//!   without bounds checks.
//! - `pack`: Little-endian re-chunking between widths (`unpack_le`,
//!   `pack_le`), output length helpers, and the explicit byte stream view
//!   (`to_le_bytes`, `from_le_bytes`).
//!
//! ## Usage
//!
//! ```rust
//! use numvec_convert::{clamp, convert, pack_le, unpack_le};
//!
//! let saturated: Vec<i8> = clamp(&[-200_000i32, -20, 100_000, 20]);
//! assert_eq!(saturated, [-128, -20, 127, 20]);
//!
//! let truncated: Vec<u8> = convert(&[0x1234u16]);
//! assert_eq!(truncated, [0x34]);
//!
//! let bytes: Vec<u8> = unpack_le(&[0x1234u16]).unwrap();
//! assert_eq!(bytes, [0x34, 0x12]);
//! let words: Vec<u16> = pack_le(&bytes).unwrap();
//! assert_eq!(words, [0x1234]);
//! ```

pub mod clamp;
pub mod lossy;
pub mod pack;

pub use clamp::{
    clamp, clamp_signed_to_signed, clamp_signed_to_unsigned, clamp_unsigned_to_signed,
    clamp_unsigned_to_unsigned, clamp_value,
};
pub use lossy::{convert, convert_value};
pub use pack::{from_le_bytes, pack_le, packed_len, to_le_bytes, unpack_le, unpacked_len};
