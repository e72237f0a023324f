//! Pieces with a stable identity.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Stable identity of a piece for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    /// Return the raw id, usable as a slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board. Only its square changes over a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub side: Side,
    pub square: Square,
}

impl Piece {
    /// Return the letter code: uppercase for Red, lowercase for Black.
    pub fn letter(&self) -> char {
        let c = self.kind.letter();
        match self.side {
            Side::Red => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Return the traditional character for this piece.
    #[inline]
    pub fn label(&self) -> char {
        self.kind.label(self.side)
    }

    /// Return `true` if `other` belongs to the opposing side.
    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.side != other.side
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}@{}", self.letter(), self.id, self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(kind: PieceKind, side: Side) -> Piece {
        Piece {
            id: PieceId(3),
            kind,
            side,
            square: Square::new(4, 4).unwrap(),
        }
    }

    #[test]
    fn letter_case_follows_side() {
        assert_eq!(piece(PieceKind::Horse, Side::Red).letter(), 'H');
        assert_eq!(piece(PieceKind::Horse, Side::Black).letter(), 'h');
    }

    #[test]
    fn enemy_relation() {
        let red = piece(PieceKind::Cannon, Side::Red);
        let black = piece(PieceKind::Cannon, Side::Black);
        assert!(red.is_enemy_of(&black));
        assert!(!red.is_enemy_of(&red));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", piece(PieceKind::General, Side::Red)), "K#3@(4,4)");
    }
}
