//! A concrete move of one piece.

use std::fmt;

use crate::piece::PieceId;
use crate::square::Square;

/// A move of piece `piece` from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.piece, self.from, self.to)
    }
}
