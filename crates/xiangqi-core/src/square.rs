//! Board squares addressed by (row, column).

use std::fmt;

use crate::side::Side;

/// Number of rows on the board. Row 0 is Black's back rank, row 9 is Red's.
pub const ROWS: u8 = 10;

/// Number of columns on the board.
pub const COLS: u8 = 9;

/// Columns spanned by both palaces.
const PALACE_COLS: std::ops::RangeInclusive<u8> = 3..=5;

/// Return `true` if signed `(row, col)` coordinates lie on the board.
#[inline]
pub const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < ROWS as i8 && col >= 0 && col < COLS as i8
}

/// A square on the 10×9 board. Always in bounds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = ROWS as usize * COLS as usize;

    /// Create a square, returning `None` if out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < ROWS && col < COLS {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square from a zero-based index (`row * 9 + col`).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Square::COUNT {
            Some(Square {
                row: (index / COLS as usize) as u8,
                col: (index % COLS as usize) as u8,
            })
        } else {
            None
        }
    }

    /// Create a square without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the coordinates are on the board.
    #[inline]
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Square {
        debug_assert!(row < ROWS && col < COLS);
        Square { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the zero-based index (0..89).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * COLS as usize + self.col as usize
    }

    /// Shift by a row and column delta, returning `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if in_bounds(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Return `true` if this square is inside `side`'s 3×3 palace.
    pub fn in_palace(self, side: Side) -> bool {
        PALACE_COLS.contains(&self.col) && side.palace_rows().contains(&self.row)
    }

    /// Iterate over all 90 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::COUNT).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Square::new(9, 8).is_some());
        assert!(Square::new(10, 0).is_none());
        assert!(Square::new(0, 9).is_none());
    }

    #[test]
    fn index_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), Some(sq));
        }
        assert!(Square::from_index(90).is_none());
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), 90);
    }

    #[test]
    fn in_bounds_edges() {
        assert!(in_bounds(0, 0));
        assert!(in_bounds(9, 8));
        assert!(!in_bounds(-1, 0));
        assert!(!in_bounds(0, -1));
        assert!(!in_bounds(10, 0));
        assert!(!in_bounds(0, 9));
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(2, 1), Square::new(2, 1));
        let far = Square::new(9, 8).unwrap();
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(-9, -8), Square::new(0, 0));
    }

    #[test]
    fn palace_membership() {
        let red_center = Square::new(8, 4).unwrap();
        assert!(red_center.in_palace(Side::Red));
        assert!(!red_center.in_palace(Side::Black));
        assert!(Square::new(0, 3).unwrap().in_palace(Side::Black));
        assert!(!Square::new(0, 2).unwrap().in_palace(Side::Black));
        assert!(!Square::new(6, 4).unwrap().in_palace(Side::Red));
        assert_eq!(Square::all().filter(|sq| sq.in_palace(Side::Red)).count(), 9);
    }

    #[test]
    fn display_and_debug() {
        let sq = Square::new(5, 8).unwrap();
        assert_eq!(format!("{sq}"), "(5,8)");
        assert_eq!(format!("{sq:?}"), "Square(5,8)");
    }
}
