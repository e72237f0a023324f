//! Game controller and console errors.

use xiangqi_core::{PositionError, Side, Square};

/// Errors that can occur while playing a game or handling console input.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// A move was attempted after the game ended.
    #[error("the game is over")]
    GameOver,

    /// There is no piece on the named square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty square.
        square: Square,
    },

    /// The piece on the named square belongs to the side not on move.
    #[error("the piece on {square} belongs to {side}")]
    NotYourPiece {
        /// Where the piece stands.
        square: Square,
        /// Its owner.
        side: Side,
    },

    /// The destination is not a legal move for the piece.
    #[error("illegal move {from} -> {to}")]
    IllegalMove {
        /// Origin square.
        from: Square,
        /// Rejected destination.
        to: Square,
    },

    /// The first word of a console line is not a command.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The unrecognized word.
        name: String,
    },

    /// A command is missing one of its arguments.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command that was cut short.
        command: &'static str,
    },

    /// A coordinate is not a number.
    #[error("invalid coordinate: {value}")]
    InvalidCoordinate {
        /// The text that failed to parse.
        value: String,
    },

    /// A coordinate pair lies outside the 10×9 board.
    #[error("square ({row},{col}) is off the board")]
    OffBoard {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` gave a value the option does not accept.
    #[error("invalid value {value} for option {name}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The position handed to the controller is malformed.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The underlying validation error.
        #[from]
        source: PositionError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
