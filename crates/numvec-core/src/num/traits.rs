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


//! # Sealed Numeric Hierarchy
//!
//! The closed set of element types numvec operates on. The traits are
//! sealed: downstream crates can name them in bounds but cannot add kinds.
//!
//! ```text
//! Number            i8..i64, u8..u64, f32, f64, Complex<f32>, Complex<f64>
//! └─ NumberOrdered  i8..i64, u8..u64, f32, f64
//!    ├─ Int         i8..i64, u8..u64
//!    │  ├─ SignedInt    i8, i16, i32, i64
//!    │  └─ UnsignedInt  u8, u16, u32, u64
//!    └─ Float       f32, f64
//! ```

use crate::num::kind::{NumericKind, Signedness, Width};
use crate::num::ops::checked_arithmetic::CheckedDivVal;
use crate::num::ops::wrapping_arithmetic::{WrappingAddVal, WrappingMulVal, WrappingSubVal};
use crate::num::width::{WIDTH_PATTERN, derive_width};
use num_complex::Complex;
use num_traits::PrimInt;

mod sealed {
    pub trait Sealed {}
}

/// Any element type accepted by numvec.
///
/// Provides the kind tag and the by-value arithmetic used by elementwise
/// vector operations.
pub trait Number:
    sealed::Sealed
    + Copy
    + PartialEq
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
    + WrappingAddVal
    + WrappingSubVal
    + WrappingMulVal
    + CheckedDivVal
{
    /// The tag identifying this type.
    const KIND: NumericKind;
}

/// Element types with a partial order (every kind except complex).
pub trait NumberOrdered: Number + PartialOrd {}

/// Fixed-width integer element types.
///
/// Width and signedness are associated constants, so they are available
/// from the type parameter alone.
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::kind::{Signedness, Width};
/// # use numvec_core::num::traits::Int;
/// fn describe<T: Int>() -> (u32, Signedness) {
///     (T::BITS, T::SIGNEDNESS)
/// }
///
/// assert_eq!(describe::<i16>(), (16, Signedness::Signed));
/// assert_eq!(<u64 as Int>::WIDTH, Width::W64);
/// ```
pub trait Int: NumberOrdered + PrimInt + std::hash::Hash + std::fmt::Display + Default {
    /// Width derived from truncating `WIDTH_PATTERN` into this type.
    const WIDTH: Width;
    /// `WIDTH` in bits.
    const BITS: u32;
    const SIGNEDNESS: Signedness;

    /// Reads the value as a 64-bit pattern, sign-extending signed types.
    fn as_u64_bits(self) -> u64;

    /// Keeps the low `BITS` bits of `bits`.
    fn from_u64_bits(bits: u64) -> Self;

    /// Widens the value exactly into an `i128`.
    fn widen_i128(self) -> i128;

    /// Keeps the low `BITS` bits of `value` (two's complement truncation).
    fn wrap_from_i128(value: i128) -> Self;
}

/// Signed fixed-width integers.
pub trait SignedInt: Int + num_traits::Signed {}

/// Unsigned fixed-width integers.
pub trait UnsignedInt: Int + num_traits::Unsigned {}

/// IEEE floating point element types.
pub trait Float: NumberOrdered + num_traits::Float {}

macro_rules! impl_number_for {
    ($t:ty, $kind:ident) => {
        impl sealed::Sealed for $t {}

        impl Number for $t {
            const KIND: NumericKind = NumericKind::$kind;
        }
    };
}

macro_rules! impl_int_for {
    ($t:ty, $kind:ident, $signedness:ident, $marker:ident) => {
        impl_number_for!($t, $kind);

        impl NumberOrdered for $t {}

        impl Int for $t {
            const WIDTH: Width = derive_width((WIDTH_PATTERN as $t) as u64);
            const BITS: u32 = <Self as Int>::WIDTH.bits();
            const SIGNEDNESS: Signedness = Signedness::$signedness;

            #[inline(always)]
            fn as_u64_bits(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn from_u64_bits(bits: u64) -> Self {
                bits as $t
            }

            #[inline(always)]
            fn widen_i128(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn wrap_from_i128(value: i128) -> Self {
                value as $t
            }
        }

        impl $marker for $t {}
    };
}

macro_rules! impl_float_for {
    ($t:ty, $kind:ident) => {
        impl_number_for!($t, $kind);

        impl NumberOrdered for $t {}

        impl Float for $t {}
    };
}

impl_int_for!(i8, I8, Signed, SignedInt);
impl_int_for!(i16, I16, Signed, SignedInt);
impl_int_for!(i32, I32, Signed, SignedInt);
impl_int_for!(i64, I64, Signed, SignedInt);

impl_int_for!(u8, U8, Unsigned, UnsignedInt);
impl_int_for!(u16, U16, Unsigned, UnsignedInt);
impl_int_for!(u32, U32, Unsigned, UnsignedInt);
impl_int_for!(u64, U64, Unsigned, UnsignedInt);

impl_float_for!(f32, F32);
impl_float_for!(f64, F64);

impl_number_for!(Complex<f32>, Complex64);
impl_number_for!(Complex<f64>, Complex128);

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of<T: Number>() -> NumericKind {
        T::KIND
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(kind_of::<i8>(), NumericKind::I8);
        assert_eq!(kind_of::<u64>(), NumericKind::U64);
        assert_eq!(kind_of::<f32>(), NumericKind::F32);
        assert_eq!(kind_of::<Complex<f64>>(), NumericKind::Complex128);
    }

    #[test]
    fn test_int_constants_agree_with_kind_table() {
        fn check<T: Int>() {
            assert_eq!(T::KIND.width(), Some(T::WIDTH));
            assert_eq!(T::KIND.signedness(), Some(T::SIGNEDNESS));
            assert_eq!(T::BITS, T::WIDTH.bits());
        }
        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<u64>();
    }

    #[test]
    fn test_u64_bit_patterns() {
        assert_eq!((-1i8).as_u64_bits(), u64::MAX);
        assert_eq!(0x80u8.as_u64_bits(), 0x80);
        assert_eq!(i16::from_u64_bits(0x1_8001), -32767);
        assert_eq!(u32::from_u64_bits(0xdead_beef_0000_0001), 1);
    }

    #[test]
    fn test_i128_round_trip() {
        assert_eq!(u64::MAX.widen_i128(), u64::MAX as i128);
        assert_eq!(i64::MIN.widen_i128(), i64::MIN as i128);
        assert_eq!(u8::wrap_from_i128(-1), 255);
        assert_eq!(i8::wrap_from_i128(200), -56);
    }
}
