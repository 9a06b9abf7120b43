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


//! # numvec Ops
//!
//! Elementwise operations over numeric slices. Every binary or ternary
//! operation requires equal-length operands and returns
//! `VectorError::LengthMismatch` otherwise; nothing is truncated or padded.
//!
//! ## Modules
//!
//! - `arith`: `add`, `sub`, `mul`, `div` for every `Number` kind.
//! - `boolean`: `and`, `or`, `xor`, `not` over `bool` masks.
//! - `compare`: `lt`, `gt`, `le`, `ge`, `eq`, `ne` between slices, and the
//!   `*_scalar` forms against a broadcast scalar.
//! - `select`: `fill`, `select` (scalar pair by mask) and `merge` (slice pair
//!   by mask).
//!
//! ## Usage
//!
//! ```rust
//! use numvec_ops::{add, fill, mul, sub};
//!
//! let x: Vec<i8> = (1..=9).collect();
//! let ones = fill(x.len(), 1i8);
//! let y = mul(&add(&x, &ones)?, &sub(&x, &ones)?)?;
//! assert_eq!(y, [0, 3, 8, 15, 24, 35, 48, 63, 80]);
//! # Ok::<(), numvec_core::VectorError>(())
//! ```

pub mod arith;
pub mod boolean;
pub mod compare;
pub mod select;
mod zip;

pub use arith::{add, div, mul, sub};
pub use boolean::{and, not, or, xor};
pub use compare::{
    eq, eq_scalar, ge, ge_scalar, gt, gt_scalar, le, le_scalar, lt, lt_scalar, ne, ne_scalar,
};
pub use select::{fill, merge, select};
