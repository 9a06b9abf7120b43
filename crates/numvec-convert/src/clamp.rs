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


//! # Clamping Conversions
//!
//! Saturating conversions between integer sequences. Each element is
//! compared against the destination's bounds, which come from the Numeric
//! Type Descriptor evaluated in an `i128` accumulator wide enough for every
//! supported type. Values below the minimum become the minimum, values above
//! the maximum become the maximum, and everything in range is carried over
//! unchanged.
//!
//! | Source   | Destination | Lower clamp       | Upper clamp         |
//! |----------|-------------|-------------------|---------------------|
//! | signed   | unsigned    | `0`               | `unsigned_max::<D>` |
//! | unsigned | signed      | never needed      | `signed_max::<D>`   |
//! | signed   | signed      | `signed_min::<D>` | `signed_max::<D>`   |
//! | unsigned | unsigned    | never needed      | `unsigned_max::<D>` |

use numvec_core::num::{Int, SignedInt, UnsignedInt, max_value, min_value};

/// Converts one value to `D`, saturating at `D`'s bounds.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::clamp::clamp_value;
/// assert_eq!(clamp_value::<i32, i8>(-200_000), i8::MIN);
/// assert_eq!(clamp_value::<i32, u8>(-1), 0);
/// assert_eq!(clamp_value::<u64, i16>(40_000), i16::MAX);
/// assert_eq!(clamp_value::<u8, i64>(200), 200);
/// ```
#[inline]
pub fn clamp_value<S: Int, D: Int>(x: S) -> D {
    let lo = min_value::<D, i128>();
    let hi = max_value::<D, i128>();
    D::wrap_from_i128(x.widen_i128().clamp(lo, hi))
}

/// Converts a sequence of `S` into a sequence of `D`, saturating every
/// element at `D`'s bounds.
///
/// The output has the same length and order as the input.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::clamp::clamp;
/// let wide: [i32; 4] = [-200_000, -20, 100_000, 20];
/// let narrow: Vec<i8> = clamp(&wide);
/// assert_eq!(narrow, [-128, -20, 127, 20]);
/// ```
pub fn clamp<S: Int, D: Int>(a: &[S]) -> Vec<D> {
    log::trace!("clamp {} -> {} ({} elements)", S::KIND, D::KIND, a.len());

    let lo = min_value::<D, i128>();
    let hi = max_value::<D, i128>();
    a.iter()
        .map(|&x| D::wrap_from_i128(x.widen_i128().clamp(lo, hi)))
        .collect()
}

/// Converts signed `S` into unsigned `U`. Every negative input becomes `0`.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::clamp::clamp_signed_to_unsigned;
/// let out: Vec<u8> = clamp_signed_to_unsigned(&[-5i32, 0, 300, 255]);
/// assert_eq!(out, [0, 0, 255, 255]);
/// ```
#[inline]
pub fn clamp_signed_to_unsigned<S: SignedInt, U: UnsignedInt>(a: &[S]) -> Vec<U> {
    clamp(a)
}

/// Converts unsigned `U` into signed `S`, saturating at `S`'s maximum.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::clamp::clamp_unsigned_to_signed;
/// let out: Vec<i8> = clamp_unsigned_to_signed(&[200u8, 100, 0]);
/// assert_eq!(out, [127, 100, 0]);
/// ```
#[inline]
pub fn clamp_unsigned_to_signed<U: UnsignedInt, S: SignedInt>(a: &[U]) -> Vec<S> {
    clamp(a)
}

/// Converts signed `S` into signed `T`, saturating at both of `T`'s bounds.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::clamp::clamp_signed_to_signed;
/// let out: Vec<i16> = clamp_signed_to_signed(&[-40_000i64, 12, 40_000]);
/// assert_eq!(out, [i16::MIN, 12, i16::MAX]);
/// ```
#[inline]
pub fn clamp_signed_to_signed<S: SignedInt, T: SignedInt>(a: &[S]) -> Vec<T> {
    clamp(a)
}

/// Converts unsigned `U` into unsigned `V`, saturating at `V`'s maximum.
///
/// # Examples
///
/// ```rust
/// # use numvec_convert::clamp::clamp_unsigned_to_unsigned;
/// let out: Vec<u8> = clamp_unsigned_to_unsigned(&[300u16, 20]);
/// assert_eq!(out, [255, 20]);
/// ```
#[inline]
pub fn clamp_unsigned_to_unsigned<U: UnsignedInt, V: UnsignedInt>(a: &[U]) -> Vec<V> {
    clamp(a)
}
