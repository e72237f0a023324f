//! Error types for position construction and validation.

use crate::piece::PieceId;
use crate::side::Side;
use crate::square::Square;

/// Errors from building or validating a [`Position`](crate::position::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A piece was placed on a square that already holds one.
    #[error("square {square} is already occupied")]
    SquareOccupied {
        /// The contested square.
        square: Square,
    },
    /// An operation named a piece that is not on the board.
    #[error("no piece with id {id}")]
    UnknownPiece {
        /// The id that was looked up.
        id: PieceId,
    },
    /// The position holds more pieces than ids can address.
    #[error("position is full")]
    TooManyPieces,
    /// A side does not have exactly one general.
    #[error("expected 1 general for {side}, found {count}")]
    InvalidGeneralCount {
        /// Which side has the wrong general count.
        side: Side,
        /// Number of generals found.
        count: usize,
    },
    /// A general stands outside its own palace.
    #[error("{side} general on {square} is outside its palace")]
    GeneralOutsidePalace {
        /// Owner of the general.
        side: Side,
        /// Where it stands.
        square: Square,
    },
}
