//! The standard opening position.

use crate::error::PositionError;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

use crate::piece_kind::PieceKind::{Advisor, Cannon, Chariot, Elephant, General, Horse, Soldier};
use crate::side::Side::{Black, Red};

const fn at(row: u8, col: u8) -> Square {
    Square::new_unchecked(row, col)
}

/// The 32 pieces of the standard opening, in id order.
///
/// Black occupies rows 0–3, Red rows 6–9.
pub const STARTING_LAYOUT: [(PieceKind, Side, Square); 32] = [
    (Chariot, Black, at(0, 0)),
    (Horse, Black, at(0, 1)),
    (Elephant, Black, at(0, 2)),
    (Advisor, Black, at(0, 3)),
    (General, Black, at(0, 4)),
    (Advisor, Black, at(0, 5)),
    (Elephant, Black, at(0, 6)),
    (Horse, Black, at(0, 7)),
    (Chariot, Black, at(0, 8)),
    (Cannon, Black, at(2, 1)),
    (Cannon, Black, at(2, 7)),
    (Soldier, Black, at(3, 0)),
    (Soldier, Black, at(3, 2)),
    (Soldier, Black, at(3, 4)),
    (Soldier, Black, at(3, 6)),
    (Soldier, Black, at(3, 8)),
    (Chariot, Red, at(9, 0)),
    (Horse, Red, at(9, 1)),
    (Elephant, Red, at(9, 2)),
    (Advisor, Red, at(9, 3)),
    (General, Red, at(9, 4)),
    (Advisor, Red, at(9, 5)),
    (Elephant, Red, at(9, 6)),
    (Horse, Red, at(9, 7)),
    (Chariot, Red, at(9, 8)),
    (Cannon, Red, at(7, 1)),
    (Cannon, Red, at(7, 7)),
    (Soldier, Red, at(6, 0)),
    (Soldier, Red, at(6, 2)),
    (Soldier, Red, at(6, 4)),
    (Soldier, Red, at(6, 6)),
    (Soldier, Red, at(6, 8)),
];

impl Position {
    /// Build a position from `(kind, side, square)` triples, assigning ids in order.
    pub fn from_layout(layout: &[(PieceKind, Side, Square)]) -> Result<Position, PositionError> {
        let mut position = Position::empty();
        for &(kind, side, square) in layout {
            position.place(kind, side, square)?;
        }
        Ok(position)
    }

    /// Return the standard opening position.
    pub fn starting_position() -> Position {
        Position::from_layout(&STARTING_LAYOUT)
            .expect("standard layout places every piece on a distinct square")
    }
}
