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


//! # Lossy Conversions
//!
//! Native `as`-cast semantics applied to whole sequences: narrowing keeps
//! the low bits (two's complement truncation), widening sign-extends signed
//! sources and zero-extends unsigned ones. No bounds are checked. Use
//! `clamp` instead when out-of-range values must saturate.

use numvec_core::num::Int;

/// Converts one value to `T` with `as`-cast semantics.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::lossy::convert_value;
/// assert_eq!(convert_value::<i32, u8>(300), 44);
/// assert_eq!(convert_value::<i8, u16>(-1), 0xffff);
/// assert_eq!(convert_value::<u8, i8>(0x80), -128);
/// ```
#[inline(always)]
pub fn convert_value<S: Int, T: Int>(x: S) -> T {
    T::wrap_from_i128(x.widen_i128())
}

/// Converts a sequence of `S` into a sequence of `T` with `as`-cast
/// semantics for every element.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::lossy::convert;
/// let out: Vec<i8> = convert(&[1u16, 0x00ff, 0x0180]);
/// assert_eq!(out, [1, -1, -128]);
/// ```
pub fn convert<S: Int, T: Int>(a: &[S]) -> Vec<T> {
    log::trace!("convert {} -> {} ({} elements)", S::KIND, T::KIND, a.len());

    a.iter().map(|&x| convert_value(x)).collect()
}
