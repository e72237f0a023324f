//! General and advisor moves, confined to the palace.

use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

use super::{DIAGONAL, ORTHOGONAL, push_target};

/// One orthogonal step inside the palace.
pub(super) fn gen_general(piece: &Piece, position: &Position, moves: &mut Vec<Square>) {
    gen_palace_steps(piece, position, &ORTHOGONAL, moves);
}

/// One diagonal step inside the palace.
pub(super) fn gen_advisor(piece: &Piece, position: &Position, moves: &mut Vec<Square>) {
    gen_palace_steps(piece, position, &DIAGONAL, moves);
}

fn gen_palace_steps(
    piece: &Piece,
    position: &Position,
    steps: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in steps {
        let Some(to) = piece.square.offset(dr, dc) else {
            continue;
        };
        if to.in_palace(piece.side) {
            push_target(position, piece.side, to, moves);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::movegen::raw_moves;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::side::Side;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn moves_of(layout: &[(PieceKind, Side, Square)]) -> Vec<Square> {
        let pos = Position::from_layout(layout).unwrap();
        let piece = pos.piece_at(layout[0].2).unwrap();
        raw_moves(piece, &pos)
    }

    #[test]
    fn general_in_palace_centre() {
        let moves = moves_of(&[(PieceKind::General, Side::Red, sq(8, 4))]);
        assert_eq!(moves, vec![sq(7, 4), sq(9, 4), sq(8, 3), sq(8, 5)]);
    }

    #[test]
    fn general_cannot_leave_palace() {
        let moves = moves_of(&[(PieceKind::General, Side::Black, sq(2, 3))]);
        assert_eq!(moves, vec![sq(1, 3), sq(2, 4)]);
        for to in moves {
            assert!(to.in_palace(Side::Black));
        }
    }

    #[test]
    fn general_captures_enemy_but_not_friend() {
        let moves = moves_of(&[
            (PieceKind::General, Side::Red, sq(9, 4)),
            (PieceKind::Advisor, Side::Red, sq(9, 3)),
            (PieceKind::Chariot, Side::Black, sq(9, 5)),
        ]);
        assert_eq!(moves, vec![sq(8, 4), sq(9, 5)]);
    }

    #[test]
    fn advisor_corner_has_one_move() {
        let moves = moves_of(&[(PieceKind::Advisor, Side::Red, sq(9, 3))]);
        assert_eq!(moves, vec![sq(8, 4)]);
    }

    #[test]
    fn advisor_centre_reaches_all_corners() {
        let moves = moves_of(&[(PieceKind::Advisor, Side::Black, sq(1, 4))]);
        assert_eq!(moves, vec![sq(0, 3), sq(0, 5), sq(2, 3), sq(2, 5)]);
    }
}
