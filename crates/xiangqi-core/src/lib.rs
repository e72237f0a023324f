//! Core Xiangqi rules: board representation, move generation, check,
//! checkmate and stalemate detection.

mod error;
mod legality;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod piece_move;
mod position;
mod safety;
mod setup;
mod side;
mod square;

pub use error::PositionError;
pub use legality::{
    Classification, Outcome, classify, has_legal_move, legal_moves, legal_moves_for_side,
};
pub use movegen::raw_moves;
pub use perft::{divide, perft};
pub use piece::{Piece, PieceId};
pub use piece_kind::PieceKind;
pub use piece_move::Move;
pub use position::{Position, PrettyPosition};
pub use safety::{generals_facing, is_attacked, is_safe};
pub use setup::STARTING_LAYOUT;
pub use side::Side;
pub use square::{COLS, ROWS, Square, in_bounds};
