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


//! # Numeric Type Descriptor
//!
//! Everything numvec knows about an element type, derived from the type
//! parameter alone.
//!
//! ## Submodules
//!
//! - `kind`: The closed `NumericKind` tag table plus the `Width` and
//!   `Signedness` enums it answers with.
//! - `traits`: The sealed `Number` / `NumberOrdered` / `Int` / `SignedInt` /
//!   `UnsignedInt` / `Float` hierarchy.
//! - `width`: Compile-time width derivation (`bits::<T>()`, `width::<T>()`).
//! - `bounds`: `signed_min`, `signed_max`, `unsigned_max` of a type expressed
//!   in a chosen accumulator type.
//! - `ops`: By-value wrapping and checked arithmetic traits used by
//!   elementwise operations.

pub mod bounds;
pub mod kind;
pub mod ops;
pub mod traits;
pub mod width;

pub use bounds::{max_value, min_value, signed_max, signed_min, unsigned_max};
pub use kind::{NumericKind, Signedness, Width};
pub use traits::{Float, Int, Number, NumberOrdered, SignedInt, UnsignedInt};
pub use width::{bits, width};
