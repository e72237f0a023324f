//! Legal move filtering and terminal-state classification.

use tracing::debug;

use crate::movegen::raw_moves;
use crate::piece::Piece;
use crate::piece_move::Move;
use crate::position::Position;
use crate::safety::is_safe;
use crate::side::Side;
use crate::square::Square;

/// Return the raw moves of `piece` that do not leave its own general exposed.
///
/// Each candidate is applied to a copy of `position` and the copy is checked
/// with [`is_safe`]. Order follows [`raw_moves`]. A piece that is not on
/// `position` has no legal moves.
pub fn legal_moves(piece: &Piece, position: &Position) -> Vec<Square> {
    raw_moves(piece, position)
        .into_iter()
        .filter(|&to| {
            position
                .after_move(piece.id, to)
                .is_ok_and(|next| is_safe(&next, piece.side))
        })
        .collect()
}

/// Return every legal move of `side`, grouped by piece in id order.
pub fn legal_moves_for_side(position: &Position, side: Side) -> Vec<Move> {
    position
        .pieces_of(side)
        .flat_map(|piece| {
            legal_moves(piece, position).into_iter().map(|to| Move {
                piece: piece.id,
                from: piece.square,
                to,
            })
        })
        .collect()
}

/// Return `true` if `side` has at least one legal move.
pub fn has_legal_move(position: &Position, side: Side) -> bool {
    position
        .pieces_of(side)
        .any(|piece| !legal_moves(piece, position).is_empty())
}

/// The state of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Not in check, with moves available.
    Normal,
    /// In check, with at least one reply.
    InCheck,
    /// In check with no legal reply.
    Checkmate,
    /// Not in check but without any legal move.
    Stalemate,
}

/// Check, mate and stalemate flags for the side to move.
///
/// At most one of `is_mate` and `is_stale` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub in_check: bool,
    pub is_mate: bool,
    pub is_stale: bool,
}

impl Classification {
    /// Collapse the flags into a single [`Outcome`].
    pub fn outcome(self) -> Outcome {
        match (self.in_check, self.is_mate, self.is_stale) {
            (_, true, _) => Outcome::Checkmate,
            (_, _, true) => Outcome::Stalemate,
            (true, false, false) => Outcome::InCheck,
            (false, false, false) => Outcome::Normal,
        }
    }

    /// Return `true` if the game cannot continue.
    pub fn is_terminal(self) -> bool {
        self.is_mate || self.is_stale
    }
}

/// Classify `position` for `side_to_move`.
///
/// Both generals must be present; without one, the side is reported as in
/// check.
pub fn classify(position: &Position, side_to_move: Side) -> Classification {
    let in_check = !is_safe(position, side_to_move);
    let has_any_move = has_legal_move(position, side_to_move);
    let classification = Classification {
        in_check,
        is_mate: in_check && !has_any_move,
        is_stale: !in_check && !has_any_move,
    };
    debug!(side = %side_to_move, outcome = ?classification.outcome(), "classified position");
    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_kind::PieceKind;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn opening_legal_moves_equal_raw_moves() {
        let pos = Position::starting_position();
        for piece in pos.pieces() {
            assert_eq!(legal_moves(piece, &pos), raw_moves(piece, &pos), "{piece:?}");
        }
        assert_eq!(legal_moves_for_side(&pos, Side::Red).len(), 44);
        assert_eq!(legal_moves_for_side(&pos, Side::Black).len(), 44);
    }

    #[test]
    fn piece_between_generals_is_pinned_to_the_file() {
        let pos = Position::from_layout(&[
            (PieceKind::General, Side::Red, sq(9, 4)),
            (PieceKind::General, Side::Black, sq(0, 4)),
            (PieceKind::Chariot, Side::Red, sq(5, 4)),
        ])
        .unwrap();
        let chariot = pos.piece_at(sq(5, 4)).unwrap();
        let moves = legal_moves(chariot, &pos);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|to| to.col() == 4), "{moves:?}");
        assert!(raw_moves(chariot, &pos).len() > moves.len());
    }

    #[test]
    fn check_must_be_answered() {
        let pos = Position::from_layout(&[
            (PieceKind::General, Side::Red, sq(9, 4)),
            (PieceKind::General, Side::Black, sq(0, 3)),
            (PieceKind::Chariot, Side::Black, sq(9, 0)),
            (PieceKind::Chariot, Side::Red, sq(5, 1)),
        ])
        .unwrap();

        let general = pos.general(Side::Red).unwrap();
        assert_eq!(legal_moves(general, &pos), vec![sq(8, 4)]);

        let chariot = pos.piece_at(sq(5, 1)).unwrap();
        assert_eq!(legal_moves(chariot, &pos), vec![sq(9, 1)]);

        let c = classify(&pos, Side::Red);
        assert!(c.in_check);
        assert_eq!(c.outcome(), Outcome::InCheck);
        assert!(!c.is_terminal());
    }

    #[test]
    fn general_may_not_step_onto_open_file() {
        let pos = Position::from_layout(&[
            (PieceKind::General, Side::Red, sq(9, 3)),
            (PieceKind::General, Side::Black, sq(0, 4)),
        ])
        .unwrap();
        let general = pos.general(Side::Red).unwrap();
        assert_eq!(legal_moves(general, &pos), vec![sq(8, 3)]);
    }

    #[test]
    fn foreign_piece_has_no_legal_moves() {
        let pos = Position::starting_position();
        let mut other = pos.clone();
        let horse = *pos.piece_at(sq(9, 1)).unwrap();
        other.remove(horse.id);
        assert!(legal_moves(&horse, &other).is_empty());
    }

    #[test]
    fn outcome_mapping() {
        let flags = |in_check, is_mate, is_stale| Classification {
            in_check,
            is_mate,
            is_stale,
        };
        assert_eq!(flags(false, false, false).outcome(), Outcome::Normal);
        assert_eq!(flags(true, false, false).outcome(), Outcome::InCheck);
        assert_eq!(flags(true, true, false).outcome(), Outcome::Checkmate);
        assert_eq!(flags(false, false, true).outcome(), Outcome::Stalemate);
    }
}
