//! Chariot and cannon moves along ranks and files.

use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

use super::{ORTHOGONAL, push_target};

/// Slide through empty squares; stop before a friend or on an enemy.
pub(super) fn gen_chariot(piece: &Piece, position: &Position, moves: &mut Vec<Square>) {
    for (dr, dc) in ORTHOGONAL {
        let mut next = piece.square.offset(dr, dc);
        while let Some(to) = next {
            if !push_target(position, piece.side, to, moves) {
                break;
            }
            next = to.offset(dr, dc);
        }
    }
}

/// Slide through empty squares without capturing, or capture the first
/// piece beyond exactly one screen if it is an enemy.
pub(super) fn gen_cannon(piece: &Piece, position: &Position, moves: &mut Vec<Square>) {
    for (dr, dc) in ORTHOGONAL {
        let mut screened = false;
        let mut next = piece.square.offset(dr, dc);
        while let Some(to) = next {
            match position.piece_at(to) {
                None if !screened => moves.push(to),
                None => {}
                Some(_) if !screened => screened = true,
                Some(target) => {
                    if target.side != piece.side {
                        moves.push(to);
                    }
                    break;
                }
            }
            next = to.offset(dr, dc);
        }
    }
}
