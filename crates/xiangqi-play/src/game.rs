//! Headless game controller: turns, selection, move execution and results.

use std::fmt;

use tracing::{debug, info};

use xiangqi_core::{
    Classification, Move, Piece, PieceId, PieceKind, Position, PositionError, Side, Square,
    classify, is_safe, legal_moves,
};

use crate::error::PlayError;

/// Why a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser had no legal reply to check.
    Checkmate,
    /// The loser's general was taken outright.
    GeneralCaptured,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Side, reason: WinReason },
    /// The side to move had no legal move while not in check.
    Stalemate,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win {
                winner,
                reason: WinReason::Checkmate,
            } => write!(f, "{winner} wins (checkmate)"),
            GameResult::Win {
                winner,
                reason: WinReason::GeneralCaptured,
            } => write!(f, "{winner} wins (general captured)"),
            GameResult::Stalemate => write!(f, "Draw (stalemate)"),
        }
    }
}

/// What a move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub captured: Option<Piece>,
    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}

/// Response to a click on a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEffect {
    /// An own piece was selected; its legal destinations are attached.
    Selected(Vec<Square>),
    /// The current selection was cleared.
    Deselected,
    /// The selected piece moved to the clicked square.
    Moved(MoveRecord),
    /// Nothing changed.
    Ignored,
}

/// A game in progress.
///
/// Red moves first. The controller only ever applies legal moves, so both
/// generals stay on the board unless a position handed to
/// [`Game::from_position`] already left one en prise.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    turn: Side,
    selected: Option<PieceId>,
    valid_moves: Vec<Square>,
    last_move: Option<(Square, Square)>,
    check_square: Option<Square>,
    result: Option<GameResult>,
}

impl Game {
    /// Start a game from the standard opening.
    pub fn new() -> Game {
        Game::with_position(Position::starting_position(), Side::Red)
    }

    /// Start a game from an arbitrary valid position.
    pub fn from_position(position: Position, turn: Side) -> Result<Game, PlayError> {
        position.validate()?;
        Ok(Game::with_position(position, turn))
    }

    fn with_position(position: Position, turn: Side) -> Game {
        let mut game = Game {
            position,
            turn,
            selected: None,
            valid_moves: Vec::new(),
            last_move: None,
            check_square: None,
            result: None,
        };
        game.settle();
        game
    }

    /// Return to the opening position with Red to move.
    pub fn reset(&mut self) {
        *self = Game::new();
        info!("new game");
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The selected piece, if any.
    pub fn selected(&self) -> Option<&Piece> {
        self.position.piece(self.selected?)
    }

    /// Legal destinations of the selected piece.
    #[inline]
    pub fn valid_moves(&self) -> &[Square] {
        &self.valid_moves
    }

    /// Origin and destination of the last move played.
    #[inline]
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// Square of the side to move's general while it is in check.
    #[inline]
    pub fn check_square(&self) -> Option<Square> {
        self.check_square
    }

    /// The final result, once the game is over.
    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Return `true` once a result is recorded.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Classify the current position for the side to move.
    pub fn status(&self) -> Classification {
        classify(&self.position, self.turn)
    }

    /// Handle a click on `square`.
    ///
    /// Clicking an own piece selects it, or deselects it if it was already
    /// selected. Clicking one of the selected piece's destinations plays
    /// the move. Clicking an empty square drops the selection; clicking an
    /// enemy piece out of reach leaves it alone.
    pub fn click(&mut self, square: Square) -> Result<ClickEffect, PlayError> {
        if self.is_over() {
            return Ok(ClickEffect::Ignored);
        }

        let occupant = self.position.piece_at(square).map(|piece| (piece.id, piece.side));
        match occupant {
            Some((id, side)) if side == self.turn => {
                if self.selected == Some(id) {
                    self.clear_selection();
                    Ok(ClickEffect::Deselected)
                } else {
                    Ok(ClickEffect::Selected(self.select(square)?.to_vec()))
                }
            }
            _ if self.valid_moves.contains(&square) => {
                let Some(id) = self.selected else {
                    return Ok(ClickEffect::Ignored);
                };
                Ok(ClickEffect::Moved(self.execute(id, square)?))
            }
            Some(_) => Ok(ClickEffect::Ignored),
            None if self.selected.is_some() => {
                self.clear_selection();
                Ok(ClickEffect::Deselected)
            }
            None => Ok(ClickEffect::Ignored),
        }
    }

    /// Select the piece on `square` and return its legal destinations.
    pub fn select(&mut self, square: Square) -> Result<&[Square], PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        let piece = self
            .position
            .piece_at(square)
            .ok_or(PlayError::EmptySquare { square })?;
        if piece.side != self.turn {
            return Err(PlayError::NotYourPiece {
                square,
                side: piece.side,
            });
        }
        self.valid_moves = legal_moves(piece, &self.position);
        self.selected = Some(piece.id);
        debug!(%square, moves = self.valid_moves.len(), "selected piece");
        Ok(&self.valid_moves)
    }

    /// Play the piece on `from` to `to`, if legal.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, PlayError> {
        let moves = self.select(from)?.to_vec();
        if !moves.contains(&to) {
            self.clear_selection();
            return Err(PlayError::IllegalMove { from, to });
        }
        let id = self.selected.ok_or(PlayError::EmptySquare { square: from })?;
        self.execute(id, to)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }

    /// Recompute the check highlight and any result for the side to move.
    fn settle(&mut self) {
        self.check_square = if is_safe(&self.position, self.turn) {
            None
        } else {
            self.position.general(self.turn).map(|general| general.square)
        };
        let status = classify(&self.position, self.turn);
        self.result = if status.is_mate {
            Some(GameResult::Win {
                winner: self.turn.flip(),
                reason: WinReason::Checkmate,
            })
        } else if status.is_stale {
            Some(GameResult::Stalemate)
        } else {
            None
        };
        if let Some(result) = self.result {
            info!(%result, "game over");
        }
    }

    /// Apply an already-validated move and advance the game.
    fn execute(&mut self, id: PieceId, to: Square) -> Result<MoveRecord, PlayError> {
        let from = self
            .position
            .piece(id)
            .map(|piece| piece.square)
            .ok_or(PositionError::UnknownPiece { id })?;
        let captured = self.position.relocate(id, to)?;
        let mover = self.turn;
        let mv = Move { piece: id, from, to };
        self.last_move = Some((from, to));
        self.clear_selection();
        debug!(side = %mover, %from, %to, capture = captured.is_some(), "move played");

        if captured.is_some_and(|piece| piece.kind == PieceKind::General) {
            let result = GameResult::Win {
                winner: mover,
                reason: WinReason::GeneralCaptured,
            };
            self.check_square = None;
            self.result = Some(result);
            info!(%result, "game over");
            return Ok(MoveRecord {
                mv,
                captured,
                result: Some(result),
            });
        }

        self.turn = mover.flip();
        self.settle();

        Ok(MoveRecord {
            mv,
            captured,
            result: self.result,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
