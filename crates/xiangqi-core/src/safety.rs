//! Attack detection and general safety, including the flying-general rule.

use crate::movegen::raw_moves;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

/// Return `true` if any piece of `by_side` can reach `square` with a raw move.
pub fn is_attacked(position: &Position, square: Square, by_side: Side) -> bool {
    position
        .pieces_of(by_side)
        .any(|piece| raw_moves(piece, position).contains(&square))
}

/// Return `true` if both generals share a file with nothing between them.
///
/// This is a forbidden configuration, not a movement rule: whoever produces
/// it has exposed their own general.
pub fn generals_facing(position: &Position) -> bool {
    let (Some(red), Some(black)) = (position.general(Side::Red), position.general(Side::Black))
    else {
        return false;
    };
    let col = red.square.col();
    if col != black.square.col() {
        return false;
    }

    let low = red.square.row().min(black.square.row());
    let high = red.square.row().max(black.square.row());
    ((low + 1)..high)
        .filter_map(|row| Square::new(row, col))
        .all(|between| !position.is_occupied(between))
}

/// Return `true` if `side`'s general exists, is not facing the other
/// general, and is not attacked.
pub fn is_safe(position: &Position, side: Side) -> bool {
    let Some(general) = position.general(side) else {
        return false;
    };
    if generals_facing(position) {
        return false;
    }
    !is_attacked(position, general.square, side.flip())
}
