//! Soldier moves.

use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

use super::push_target;

/// One step forward; once across the river, also one step sideways.
pub(super) fn gen_soldier(piece: &Piece, position: &Position, moves: &mut Vec<Square>) {
    let side = piece.side;
    if let Some(to) = piece.square.offset(side.forward(), 0) {
        push_target(position, side, to, moves);
    }
    if side.has_crossed_river(piece.square.row()) {
        for dc in [-1, 1] {
            if let Some(to) = piece.square.offset(0, dc) {
                push_target(position, side, to, moves);
            }
        }
    }
}
