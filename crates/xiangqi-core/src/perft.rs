//! Perft (performance test) for move generation correctness verification.

use crate::legality::legal_moves_for_side;
use crate::position::Position;
use crate::side::Side;

/// Count the leaf nodes of the legal move tree at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves without applying any of them.
pub fn perft(position: &Position, side: Side, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves_for_side(position, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .filter_map(|mv| position.after_move(mv.piece, mv.to).ok())
        .map(|child| perft(&child, side.flip(), depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted by the move's display string.
pub fn divide(position: &Position, side: Side, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves_for_side(position, side)
        .iter()
        .filter_map(|mv| {
            let child = position.after_move(mv.piece, mv.to).ok()?;
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, side.flip(), depth - 1)
            };
            Some((mv.to_string(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_0_is_one() {
        let pos = Position::starting_position();
        assert_eq!(perft(&pos, Side::Red, 0), 1);
    }

    #[test]
    fn perft_startpos_depth_1() {
        let pos = Position::starting_position();
        assert_eq!(perft(&pos, Side::Red, 1), 44);
        assert_eq!(perft(&pos, Side::Black, 1), 44);
    }

    #[test]
    fn divide_sums_to_perft() {
        let pos = Position::starting_position();
        let breakdown = divide(&pos, Side::Red, 2);
        assert_eq!(breakdown.len(), 44);
        let total: u64 = breakdown.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&pos, Side::Red, 2));
    }
}
