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


//! # Type Bounds
//!
//! Range bounds of an integer type `T`, computed from `bits::<T>()` alone and
//! expressed in a caller-chosen accumulator type `U`.
//!
//! `U` must be able to hold the requested extreme in its own range. Picking
//! `i128` always works for every supported `T`. A narrower `U` is allowed,
//! but the result then wraps exactly as the shift-and-subtract arithmetic
//! does in `U` (e.g. `unsigned_max::<u8, i8>()` is `-1`); no combination
//! panics.

use crate::num::traits::Int;
use num_traits::{CheckedShl, PrimInt, WrappingNeg, WrappingSub};

/// Integer types usable as the accumulator for bound computations.
pub trait BoundAccumulator: PrimInt + CheckedShl + WrappingSub + WrappingNeg {}

impl<U> BoundAccumulator for U where U: PrimInt + CheckedShl + WrappingSub + WrappingNeg {}

/// `1 << n` in `U`, or zero once the shift leaves the type.
#[inline(always)]
fn one_shl<U: BoundAccumulator>(n: u32) -> U {
    U::one().checked_shl(n).unwrap_or_else(U::zero)
}

/// Returns the largest signed value of `T`'s width, expressed as a `U`.
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::bounds::signed_max;
/// assert_eq!(signed_max::<u8, i64>(), 127);
/// assert_eq!(signed_max::<i64, i64>(), i64::MAX);
/// ```
#[inline]
pub fn signed_max<T: Int, U: BoundAccumulator>() -> U {
    one_shl::<U>(T::BITS - 1).wrapping_sub(&U::one())
}

/// Returns the smallest signed value of `T`'s width, expressed as a `U`.
///
/// For an unsigned `U` the result is the two's complement bit pattern of
/// that negative value.
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::bounds::signed_min;
/// assert_eq!(signed_min::<i16, i64>(), -32768);
/// assert_eq!(signed_min::<i8, u8>(), 0x80);
/// ```
#[inline]
pub fn signed_min<T: Int, U: BoundAccumulator>() -> U {
    one_shl::<U>(T::BITS - 1).wrapping_neg()
}

/// Returns the largest unsigned value of `T`'s width, expressed as a `U`.
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::bounds::unsigned_max;
/// assert_eq!(unsigned_max::<i8, i64>(), 255);
/// assert_eq!(unsigned_max::<u64, u64>(), u64::MAX);
/// assert_eq!(unsigned_max::<u32, i128>(), u32::MAX as i128);
/// ```
#[inline]
pub fn unsigned_max<T: Int, U: BoundAccumulator>() -> U {
    one_shl::<U>(T::BITS).wrapping_sub(&U::one())
}

/// Returns the minimum value of `T` itself (zero if unsigned), as a `U`.
#[inline]
pub fn min_value<T: Int, U: BoundAccumulator>() -> U {
    if T::SIGNEDNESS.is_signed() {
        signed_min::<T, U>()
    } else {
        U::zero()
    }
}

/// Returns the maximum value of `T` itself, as a `U`.
#[inline]
pub fn max_value<T: Int, U: BoundAccumulator>() -> U {
    if T::SIGNEDNESS.is_signed() {
        signed_max::<T, U>()
    } else {
        unsigned_max::<T, U>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_8_bounds() {
        assert_eq!(signed_min::<i8, i64>(), -128);
        assert_eq!(signed_max::<i8, i64>(), 127);
        assert_eq!(unsigned_max::<i8, i64>(), 255);
        // Signedness of T does not matter, only its width.
        assert_eq!(signed_min::<u8, i64>(), -128);
        assert_eq!(unsigned_max::<u8, i64>(), 255);
    }

    #[test]
    fn test_width_16_bounds() {
        assert_eq!(signed_min::<i16, i64>(), -32768);
        assert_eq!(signed_max::<i16, i64>(), 32767);
        assert_eq!(unsigned_max::<u16, i64>(), 65535);
    }

    #[test]
    fn test_width_32_and_64_bounds() {
        assert_eq!(signed_min::<i32, i64>(), i32::MIN as i64);
        assert_eq!(signed_max::<u32, i64>(), i32::MAX as i64);
        assert_eq!(unsigned_max::<u32, u64>(), u32::MAX as u64);
        assert_eq!(signed_min::<i64, i128>(), i64::MIN as i128);
        assert_eq!(signed_max::<i64, i128>(), i64::MAX as i128);
        assert_eq!(unsigned_max::<u64, i128>(), u64::MAX as i128);
    }

    #[test]
    fn test_same_width_accumulator() {
        assert_eq!(signed_min::<i64, i64>(), i64::MIN);
        assert_eq!(signed_max::<i64, i64>(), i64::MAX);
        assert_eq!(unsigned_max::<u64, u64>(), u64::MAX);
        assert_eq!(unsigned_max::<u32, u32>(), u32::MAX);
    }

    #[test]
    fn test_narrow_accumulator_wraps_without_panicking() {
        // Out of contract, but defined: the unsigned max of an 8-bit type
        // does not fit in i8 and reads back as -1.
        assert_eq!(unsigned_max::<u8, i8>(), -1);
        assert_eq!(signed_min::<i8, u8>(), 0x80);
        assert_eq!(signed_max::<i64, i8>(), -1);
    }

    #[test]
    fn test_min_and_max_value_match_primitive_constants() {
        fn check<T: Int>(min: i128, max: i128) {
            assert_eq!(min_value::<T, i128>(), min);
            assert_eq!(max_value::<T, i128>(), max);
        }
        check::<i8>(i8::MIN as i128, i8::MAX as i128);
        check::<u8>(0, u8::MAX as i128);
        check::<i16>(i16::MIN as i128, i16::MAX as i128);
        check::<u16>(0, u16::MAX as i128);
        check::<i32>(i32::MIN as i128, i32::MAX as i128);
        check::<u32>(0, u32::MAX as i128);
        check::<i64>(i64::MIN as i128, i64::MAX as i128);
        check::<u64>(0, u64::MAX as i128);
    }
}
