//! Raw move generation: per-kind movement rules, ignoring check.

mod leapers;
mod palace;
mod sliders;
mod soldier;

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

use self::leapers::{gen_elephant, gen_horse};
use self::palace::{gen_advisor, gen_general};
use self::sliders::{gen_cannon, gen_chariot};
use self::soldier::gen_soldier;

/// Single orthogonal steps, in generation order: up, down, left, right.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Single diagonal steps, in generation order.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Generate the geometrically reachable destinations of `piece` in `position`.
///
/// Whether the move would leave the mover's own general exposed is not
/// considered; see [`legal_moves`](crate::legal_moves) for that. Every
/// returned square is on the board and never holds a friendly piece.
pub fn raw_moves(piece: &Piece, position: &Position) -> Vec<Square> {
    let mut moves = Vec::with_capacity(17);
    match piece.kind {
        PieceKind::General => gen_general(piece, position, &mut moves),
        PieceKind::Advisor => gen_advisor(piece, position, &mut moves),
        PieceKind::Elephant => gen_elephant(piece, position, &mut moves),
        PieceKind::Horse => gen_horse(piece, position, &mut moves),
        PieceKind::Chariot => gen_chariot(piece, position, &mut moves),
        PieceKind::Cannon => gen_cannon(piece, position, &mut moves),
        PieceKind::Soldier => gen_soldier(piece, position, &mut moves),
    }
    moves
}

/// Resolve occupancy of `to` for a piece of `side` and record it if legal.
///
/// Empty squares and enemy pieces are recorded; friendly pieces are not.
/// Returns `true` only for an empty square, i.e. when a slide may go on.
fn push_target(position: &Position, side: Side, to: Square, moves: &mut Vec<Square>) -> bool {
    match position.piece_at(to) {
        None => {
            moves.push(to);
            true
        }
        Some(occupant) if occupant.side != side => {
            moves.push(to);
            false
        }
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn push_target_resolves_occupancy() {
        let pos = Position::from_layout(&[
            (PieceKind::Horse, Side::Red, sq(4, 4)),
            (PieceKind::Horse, Side::Black, sq(4, 5)),
        ])
        .unwrap();
        let mut moves = Vec::new();
        assert!(push_target(&pos, Side::Red, sq(3, 3), &mut moves));
        assert!(!push_target(&pos, Side::Red, sq(4, 5), &mut moves));
        assert!(!push_target(&pos, Side::Red, sq(4, 4), &mut moves));
        assert_eq!(moves, vec![sq(3, 3), sq(4, 5)]);
    }

    #[test]
    fn opening_position_raw_move_counts() {
        let pos = Position::starting_position();
        let total: usize = pos
            .pieces_of(Side::Red)
            .map(|piece| raw_moves(piece, &pos).len())
            .sum();
        // Every opening raw move is also legal.
        assert_eq!(total, 44);
    }

    #[test]
    fn raw_moves_never_land_on_friends() {
        let pos = Position::starting_position();
        for piece in pos.pieces() {
            for to in raw_moves(piece, &pos) {
                if let Some(occupant) = pos.piece_at(to) {
                    assert_ne!(occupant.side, piece.side, "{piece:?} lands on friend at {to}");
                }
            }
        }
    }
}
