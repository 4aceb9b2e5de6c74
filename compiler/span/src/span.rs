// Copyright (C) 2021-2026 The Sable Team.
// This file is part of the Sable library.

// The Sable library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Sable library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Sable library. If not, see <https://www.gnu.org/licenses/>.

//! Byte-offset source positions.
//!
//! A [`Span`] locates a region of the original surface program. The
//! optimizer only threads spans through untouched; mapping them back to
//! line/column information is the driver's business.

use serde::{Deserialize, Serialize};

use std::fmt;

/// An offset into the source text, in bytes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct BytePos(pub u32);

impl fmt::Display for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The region `lo..hi` of the source text.
///
/// The default span is the dummy span, used for nodes synthesized by the
/// optimizer that have no surface counterpart.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// The start position, inclusive.
    pub lo: BytePos,
    /// The end position, exclusive.
    pub hi: BytePos,
}

impl Span {
    /// Generates a new span from the `lo` and `hi` positions.
    pub fn new(lo: BytePos, hi: BytePos) -> Self {
        Self { lo, hi }
    }

    /// The dummy span, covering nothing.
    pub const fn dummy() -> Self {
        Self { lo: BytePos(0), hi: BytePos(0) }
    }

    /// Is this the dummy span?
    pub fn is_dummy(&self) -> bool {
        self == &Self::dummy()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}

impl std::ops::Add for Span {
    type Output = Self;

    /// The smallest span covering both operands.
    fn add(self, other: Self) -> Self {
        Span::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_covers_both_spans() {
        let left = Span::new(BytePos(3), BytePos(8));
        let right = Span::new(BytePos(6), BytePos(20));
        assert_eq!(left + right, Span::new(BytePos(3), BytePos(20)));
        assert_eq!(right + left, Span::new(BytePos(3), BytePos(20)));
    }

    #[test]
    fn default_is_dummy() {
        assert!(Span::default().is_dummy());
        assert!(!Span::new(BytePos(0), BytePos(1)).is_dummy());
    }
}
