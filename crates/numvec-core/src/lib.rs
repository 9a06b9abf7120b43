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


//! # numvec Core
//!
//! Foundations shared by the numvec crates: a compile-time description of
//! every supported element type and the error taxonomy of vector
//! operations.
//!
//! ## Modules
//!
//! - `num`: The Numeric Type Descriptor. A sealed trait hierarchy over the
//!   eight fixed-width integers, two floats and two complex types; bit
//!   widths derived from the type itself (`bits::<T>()`); signed and
//!   unsigned range bounds expressed in any accumulator type; and by-value
//!   elementwise arithmetic traits with fixed overflow semantics.
//! - `error`: `VectorError`, the single error type returned when a call's
//!   preconditions (equal lengths, pack/unpack direction, non-zero integer
//!   divisors) do not hold, plus length validation helpers.
//!
//! ## Usage
//!
//! ```rust
//! use numvec_core::num::{bits, signed_min, unsigned_max, Int, Signedness};
//!
//! assert_eq!(bits::<u16>(), 16);
//! assert_eq!(signed_min::<i8, i64>(), -128);
//! assert_eq!(unsigned_max::<i8, i64>(), 255);
//! assert_eq!(<i32 as Int>::SIGNEDNESS, Signedness::Signed);
//! ```

pub mod error;
pub mod num;

pub use error::{VectorError, VectorResult};
