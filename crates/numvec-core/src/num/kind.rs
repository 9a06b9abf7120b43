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


//! # Numeric Kind Tags
//!
//! A closed, enumerated description of every element type numvec accepts.
//! Each eligible Rust type exposes its tag through `Number::KIND`, so
//! generic code can ask questions about a type parameter (its width, its
//! signedness, whether it is ordered) by reading a constant instead of
//! inspecting a value.

/// Bit width of a fixed-width integer (or float) element.
///
/// Only the four power-of-two widths are representable, so every ratio
/// between two widths is itself a power of two.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    W8 = 8,
    W16 = 16,
    W32 = 32,
    W64 = 64,
}

impl Width {
    /// All supported widths, narrowest first.
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    /// Returns the width in bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Returns the width in bytes.
    #[inline(always)]
    pub const fn bytes(self) -> usize {
        (self as u32 / 8) as usize
    }

    /// Maps a bit count onto a supported width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numvec_core::num::kind::Width;
    /// assert_eq!(Width::from_bits(16), Some(Width::W16));
    /// assert_eq!(Width::from_bits(24), None);
    /// ```
    #[inline]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Width::W8),
            16 => Some(Width::W16),
            32 => Some(Width::W32),
            64 => Some(Width::W64),
            _ => None,
        }
    }

    /// Returns how many `narrower` elements fit into one element of `self`,
    /// or `None` if `narrower` is in fact wider.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numvec_core::num::kind::Width;
    /// assert_eq!(Width::W64.ratio(Width::W8), Some(8));
    /// assert_eq!(Width::W16.ratio(Width::W16), Some(1));
    /// assert_eq!(Width::W8.ratio(Width::W32), None);
    /// ```
    #[inline]
    pub const fn ratio(self, narrower: Width) -> Option<usize> {
        if (narrower as u32) > (self as u32) {
            None
        } else {
            Some((self as u32 / narrower as u32) as usize)
        }
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Whether an integer type carries a sign bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    #[inline(always)]
    pub const fn is_signed(self) -> bool {
        matches!(self, Signedness::Signed)
    }
}

impl std::fmt::Display for Signedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signedness::Signed => write!(f, "signed"),
            Signedness::Unsigned => write!(f, "unsigned"),
        }
    }
}

/// Tag naming one of the twelve eligible element types.
///
/// # Examples
///
/// ```rust
/// # use numvec_core::num::kind::{NumericKind, Signedness, Width};
/// let kind = NumericKind::I16;
/// assert_eq!(kind.width(), Some(Width::W16));
/// assert_eq!(kind.signedness(), Some(Signedness::Signed));
/// assert!(kind.is_integer());
/// assert_eq!(kind.name(), "i16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// `Complex<f32>`.
    Complex64,
    /// `Complex<f64>`.
    Complex128,
}

impl NumericKind {
    pub const ALL: [NumericKind; 12] = [
        NumericKind::I8,
        NumericKind::I16,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::U8,
        NumericKind::U16,
        NumericKind::U32,
        NumericKind::U64,
        NumericKind::F32,
        NumericKind::F64,
        NumericKind::Complex64,
        NumericKind::Complex128,
    ];

    /// Width of integer and float kinds; complex kinds have none.
    pub const fn width(self) -> Option<Width> {
        match self {
            NumericKind::I8 | NumericKind::U8 => Some(Width::W8),
            NumericKind::I16 | NumericKind::U16 => Some(Width::W16),
            NumericKind::I32 | NumericKind::U32 | NumericKind::F32 => Some(Width::W32),
            NumericKind::I64 | NumericKind::U64 | NumericKind::F64 => Some(Width::W64),
            NumericKind::Complex64 | NumericKind::Complex128 => None,
        }
    }

    /// Signedness of integer kinds; `None` for float and complex kinds.
    pub const fn signedness(self) -> Option<Signedness> {
        match self {
            NumericKind::I8 | NumericKind::I16 | NumericKind::I32 | NumericKind::I64 => {
                Some(Signedness::Signed)
            }
            NumericKind::U8 | NumericKind::U16 | NumericKind::U32 | NumericKind::U64 => {
                Some(Signedness::Unsigned)
            }
            _ => None,
        }
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        self.signedness().is_some()
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64)
    }

    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, NumericKind::Complex64 | NumericKind::Complex128)
    }

    /// Ordered kinds support `<`, `>`, `<=` and `>=` comparisons.
    #[inline]
    pub const fn is_ordered(self) -> bool {
        !self.is_complex()
    }

    /// The Rust spelling of the type.
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
            NumericKind::Complex64 => "Complex<f32>",
            NumericKind::Complex128 => "Complex<f64>",
        }
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_bits_and_bytes() {
        assert_eq!(Width::W8.bits(), 8);
        assert_eq!(Width::W64.bits(), 64);
        assert_eq!(Width::W16.bytes(), 2);
        assert_eq!(Width::W32.bytes(), 4);
    }

    #[test]
    fn test_width_from_bits_round_trips_all() {
        for w in Width::ALL {
            assert_eq!(Width::from_bits(w.bits()), Some(w));
        }
        assert_eq!(Width::from_bits(0), None);
        assert_eq!(Width::from_bits(128), None);
    }

    #[test]
    fn test_width_ratio() {
        assert_eq!(Width::W32.ratio(Width::W8), Some(4));
        assert_eq!(Width::W64.ratio(Width::W32), Some(2));
        assert_eq!(Width::W16.ratio(Width::W64), None);
    }

    #[test]
    fn test_kind_classification() {
        let ints = NumericKind::ALL.iter().filter(|k| k.is_integer()).count();
        let floats = NumericKind::ALL.iter().filter(|k| k.is_float()).count();
        let complex = NumericKind::ALL.iter().filter(|k| k.is_complex()).count();
        assert_eq!((ints, floats, complex), (8, 2, 2));

        assert_eq!(NumericKind::U32.signedness(), Some(Signedness::Unsigned));
        assert_eq!(NumericKind::F64.signedness(), None);
        assert_eq!(NumericKind::F32.width(), Some(Width::W32));
        assert_eq!(NumericKind::Complex128.width(), None);
        assert!(!NumericKind::Complex64.is_ordered());
        assert!(NumericKind::F64.is_ordered());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Width::W16), "16-bit");
        assert_eq!(format!("{}", Signedness::Signed), "signed");
        assert_eq!(format!("{}", NumericKind::U64), "u64");
        assert_eq!(format!("{}", NumericKind::Complex64), "Complex<f32>");
    }
}
