//! The board state: an owned set of pieces indexed by stable identity.

use std::fmt;

use tracing::trace;

use crate::error::PositionError;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::{COLS, ROWS, Square};

/// A Xiangqi position: which piece stands where.
///
/// Pieces live in slots indexed by [`PieceId`]; a mailbox grid maps each
/// square back to the id standing on it. Captured pieces leave an empty
/// slot, so ids stay stable for the whole game. Iteration is in ascending
/// id order, which keeps every generated move sequence deterministic.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    /// Piece slots, indexed by [`PieceId::index()`].
    slots: Vec<Option<Piece>>,
    /// Occupant of each square, indexed by [`Square::index()`].
    grid: [Option<PieceId>; Square::COUNT],
}

impl Position {
    /// Return a position with no pieces.
    pub fn empty() -> Position {
        Position {
            slots: Vec::new(),
            grid: [None; Square::COUNT],
        }
    }

    /// Put a new piece on an empty square and return its id.
    pub fn place(
        &mut self,
        kind: PieceKind,
        side: Side,
        square: Square,
    ) -> Result<PieceId, PositionError> {
        if self.is_occupied(square) {
            return Err(PositionError::SquareOccupied { square });
        }
        let raw = u8::try_from(self.slots.len()).map_err(|_| PositionError::TooManyPieces)?;
        let id = PieceId(raw);
        self.slots.push(Some(Piece {
            id,
            kind,
            side,
            square,
        }));
        self.grid[square.index()] = Some(id);
        Ok(id)
    }

    /// Return the piece with the given id, if it is still on the board.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.index())?.as_ref()
    }

    /// Return the piece standing on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.piece(self.grid[square.index()]?)
    }

    /// Return `true` if any piece stands on `square`.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.grid[square.index()].is_some()
    }

    /// Return the first piece (lowest id) of the given kind and side.
    pub fn find_piece(&self, kind: PieceKind, side: Side) -> Option<&Piece> {
        self.pieces()
            .find(|piece| piece.kind == kind && piece.side == side)
    }

    /// Return `side`'s general, if present.
    #[inline]
    pub fn general(&self, side: Side) -> Option<&Piece> {
        self.find_piece(PieceKind::General, side)
    }

    /// Iterate over every piece on the board in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten()
    }

    /// Iterate over the pieces belonging to `side` in id order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.side == side)
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    /// Return `true` if the board holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// Move piece `id` to `to`, removing whatever stood there.
    ///
    /// Returns the captured piece, if any. No movement rule is checked here.
    pub fn relocate(&mut self, id: PieceId, to: Square) -> Result<Option<Piece>, PositionError> {
        let from = self
            .piece(id)
            .map(|piece| piece.square)
            .ok_or(PositionError::UnknownPiece { id })?;
        if from == to {
            return Ok(None);
        }

        let captured = match self.grid[to.index()] {
            Some(occupant) => self.remove(occupant),
            None => None,
        };

        self.grid[from.index()] = None;
        self.grid[to.index()] = Some(id);
        if let Some(Some(piece)) = self.slots.get_mut(id.index()) {
            piece.square = to;
        }
        trace!(%id, %from, %to, captured = captured.is_some(), "relocated piece");
        Ok(captured)
    }

    /// Take piece `id` off the board, returning it.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.slots.get_mut(id.index())?.take()?;
        self.grid[piece.square.index()] = None;
        Some(piece)
    }

    /// Return the hypothetical successor in which piece `id` has moved to `to`.
    ///
    /// `self` is left untouched.
    pub fn after_move(&self, id: PieceId, to: Square) -> Result<Position, PositionError> {
        let mut next = self.clone();
        next.relocate(id, to)?;
        Ok(next)
    }

    /// Validate the structural invariants of the position.
    ///
    /// Each side must have exactly one general, standing inside its palace.
    pub fn validate(&self) -> Result<(), PositionError> {
        for side in Side::ALL {
            let mut generals = self
                .pieces_of(side)
                .filter(|piece| piece.kind == PieceKind::General);
            let general = generals.next();
            let count = usize::from(general.is_some()) + generals.count();
            let Some(general) = general.filter(|_| count == 1) else {
                return Err(PositionError::InvalidGeneralCount { side, count });
            };
            if !general.square.in_palace(side) {
                return Err(PositionError::GeneralOutsidePalace {
                    side,
                    square: general.square,
                });
            }
        }
        Ok(())
    }

    /// Return a wrapper that renders the position as a 10×9 grid.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition {
            position: self,
            marks: &[],
            last_move: None,
            check: None,
            selected: None,
            chinese: false,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pieces()).finish()
    }
}

/// Grid renderer for a [`Position`], with optional highlights.
///
/// Row 0 is printed first. Each cell is a one-character marker followed
/// by the piece glyph. Marked empty squares show `*`, marked occupied
/// squares (captures) show `x`. The marker column shows `!` for a checked
/// general, `>` for the selected piece and `+` for both ends of the last
/// move, in that order of precedence.
pub struct PrettyPosition<'a> {
    position: &'a Position,
    marks: &'a [Square],
    last_move: Option<(Square, Square)>,
    check: Option<Square>,
    selected: Option<Square>,
    chinese: bool,
}

impl<'a> PrettyPosition<'a> {
    /// Highlight the given squares as destinations.
    pub fn with_marks(mut self, marks: &'a [Square]) -> Self {
        self.marks = marks;
        self
    }

    /// Flag the origin and destination of the last move.
    pub fn with_last_move(mut self, last_move: Option<(Square, Square)>) -> Self {
        self.last_move = last_move;
        self
    }

    /// Flag the square of a general in check.
    pub fn with_check(mut self, check: Option<Square>) -> Self {
        self.check = check;
        self
    }

    /// Flag the square of the selected piece.
    pub fn with_selected(mut self, selected: Option<Square>) -> Self {
        self.selected = selected;
        self
    }

    /// Draw traditional characters instead of letters.
    pub fn chinese(mut self, chinese: bool) -> Self {
        self.chinese = chinese;
        self
    }

    fn marker(&self, square: Square) -> char {
        if self.check == Some(square) {
            '!'
        } else if self.selected == Some(square) {
            '>'
        } else if self
            .last_move
            .is_some_and(|(from, to)| from == square || to == square)
        {
            '+'
        } else {
            ' '
        }
    }

    fn glyph(&self, square: Square) -> char {
        let marked = self.marks.contains(&square);
        match (self.position.piece_at(square), marked, self.chinese) {
            (Some(_), true, false) => 'x',
            (Some(_), true, true) => 'Ｘ',
            (Some(piece), false, false) => piece.letter(),
            (Some(piece), false, true) => piece.label(),
            (None, true, false) => '*',
            (None, true, true) => '＊',
            (None, false, false) => '.',
            (None, false, true) => '．',
        }
    }
}

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..COLS {
            if self.chinese {
                let digit = char::from_u32(0xFF10 + u32::from(col)).unwrap_or(' ');
                write!(f, " {digit}")?;
            } else {
                write!(f, " {col}")?;
            }
        }

        for row in 0..ROWS {
            writeln!(f)?;
            if row == ROWS / 2 {
                let width = if self.chinese { COLS * 3 - 1 } else { COLS * 2 - 1 };
                writeln!(f, "   {}", "~".repeat(width as usize))?;
            }
            write!(f, "{row} ")?;
            for col in 0..COLS {
                let square = Square::new_unchecked(row, col);
                write!(f, "{}{}", self.marker(square), self.glyph(square))?;
            }
        }
        Ok(())
    }
}
