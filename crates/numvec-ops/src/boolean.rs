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


//! Elementwise boolean operations over masks.

use crate::zip::zip_with;
use numvec_core::error::VectorResult;

/// Elementwise `a && b`.
///
/// # Examples
///
/// ```rust
/// # use numvec_ops::boolean::and;
/// assert_eq!(and(&[true, true, false], &[true, false, false]).unwrap(), [true, false, false]);
/// ```
pub fn and(a: &[bool], b: &[bool]) -> VectorResult<Vec<bool>> {
    zip_with(a, b, |x, y| x && y)
}

/// Elementwise `a || b`.
pub fn or(a: &[bool], b: &[bool]) -> VectorResult<Vec<bool>> {
    zip_with(a, b, |x, y| x || y)
}

/// Elementwise exclusive or.
pub fn xor(a: &[bool], b: &[bool]) -> VectorResult<Vec<bool>> {
    zip_with(a, b, |x, y| x != y)
}

/// Elementwise negation. Never fails.
pub fn not(a: &[bool]) -> Vec<bool> {
    a.iter().map(|&x| !x).collect()
}
