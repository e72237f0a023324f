//! The two sides of a Xiangqi game.

use std::fmt;
use std::ops::{Not, RangeInclusive};

/// A side: Red moves first and starts on rows 7–9, Black starts on rows 0–2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Red = 0,
    Black = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// All sides in index order.
    pub const ALL: [Side; 2] = [Side::Red, Side::Black];

    /// Return the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta of one step toward the opponent's edge.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Rows of this side's palace. Columns are always 3–5.
    #[inline]
    pub fn palace_rows(self) -> RangeInclusive<u8> {
        match self {
            Side::Red => 7..=9,
            Side::Black => 0..=2,
        }
    }

    /// Return `true` if `row` lies on this side of the river.
    #[inline]
    pub const fn owns_row(self, row: u8) -> bool {
        match self {
            Side::Red => row >= 5,
            Side::Black => row <= 4,
        }
    }

    /// Return `true` once a soldier of this side standing on `row` has crossed the river.
    #[inline]
    pub const fn has_crossed_river(self, row: u8) -> bool {
        !self.owns_row(row)
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Black => "Black",
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
