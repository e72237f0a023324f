//! Elephant and horse moves: fixed jumps that a blocking piece can cancel.

use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

use super::{DIAGONAL, push_target};

/// Horse jumps as `(destination delta, leg delta)`.
///
/// The leg is the orthogonal square next to the horse; if it is occupied
/// the jump is impossible.
const HORSE_JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((-2, -1), (-1, 0)),
    ((-2, 1), (-1, 0)),
    ((2, -1), (1, 0)),
    ((2, 1), (1, 0)),
    ((-1, -2), (0, -1)),
    ((1, -2), (0, -1)),
    ((-1, 2), (0, 1)),
    ((1, 2), (0, 1)),
];

/// Two diagonal steps on the elephant's own side of the river, unless the eye is blocked.
pub(super) fn gen_elephant(piece: &Piece, position: &Position, moves: &mut Vec<Square>) {
    for (dr, dc) in DIAGONAL {
        let Some(to) = piece.square.offset(dr * 2, dc * 2) else {
            continue;
        };
        if !piece.side.owns_row(to.row()) {
            continue;
        }
        let eye_blocked = piece
            .square
            .offset(dr, dc)
            .is_some_and(|eye| position.is_occupied(eye));
        if !eye_blocked {
            push_target(position, piece.side, to, moves);
        }
    }
}

/// L-shaped jumps, unless the leg is blocked.
pub(super) fn gen_horse(piece: &Piece, position: &Position, moves: &mut Vec<Square>) {
    for ((dr, dc), (lr, lc)) in HORSE_JUMPS {
        let Some(to) = piece.square.offset(dr, dc) else {
            continue;
        };
        let leg_blocked = piece
            .square
            .offset(lr, lc)
            .is_some_and(|leg| position.is_occupied(leg));
        if !leg_blocked {
            push_target(position, piece.side, to, moves);
        }
    }
}
