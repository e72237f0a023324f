//! Line-oriented console session over any reader/writer pair.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use xiangqi_core::{Piece, Square};

use crate::command::{Command, ConsoleOption, Labels, parse_command};
use crate::error::PlayError;
use crate::game::{ClickEffect, Game, MoveRecord};

const HELP: &str = "\
commands:
  board                      print the board
  click <row> <col>          select a piece or play to the square
  move <r1> <c1> <r2> <c2>   play a move directly
  moves <row> <col>          list a piece's legal destinations
  status                     show the side to move, check and result
  rules                      summarize how each piece moves
  set labels chinese|ascii   choose how pieces are drawn
  set hints on|off           mark destinations of the selected piece
  new                        start a new game
  help                       show this list
  quit                       leave
board marks: * destination, x capture, ! general in check,
             > selected piece, + last move";

const RULES: &str = "\
General   one step orthogonally, inside the palace; may never face the
          other general on an open file
Advisor   one step diagonally, inside the palace
Elephant  two steps diagonally, not across the river, blocked by a piece
          on the middle point
Horse     one step orthogonally then one diagonally outward, blocked by a
          piece on the first step
Chariot   any distance orthogonally
Cannon    moves like a chariot; captures by jumping exactly one piece
Soldier   one step forward; after crossing the river, also one step
          sideways
A move may not leave your own general in check. Checkmate wins; having no
legal move while not in check is a draw.";

/// Display knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub labels: Labels,
    pub hints: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            labels: Labels::Ascii,
            hints: true,
        }
    }
}

/// An interactive game session.
pub struct Console {
    game: Game,
    config: ConsoleConfig,
}

impl Console {
    /// Create a console with a fresh game and default settings.
    pub fn new() -> Self {
        Self::with_config(ConsoleConfig::default())
    }

    pub fn with_config(config: ConsoleConfig) -> Self {
        Self::with_game(Game::new(), config)
    }

    /// Create a console around an existing game.
    pub fn with_game(game: Game, config: ConsoleConfig) -> Self {
        Self { game, config }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config
    }

    /// Run the session until `quit` or end of input.
    ///
    /// Command errors are reported to `output` and the loop carries on;
    /// only I/O failures end the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), PlayError> {
        self.print_board(&mut output)?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received console command");

            let result = match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {}
                Err(e @ PlayError::Io { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "console command rejected");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("xiangqi shutting down");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), PlayError> {
        match cmd {
            Command::Board => self.print_board(out),
            Command::Click(square) => self.handle_click(square, out),
            Command::Move { from, to } => {
                let record = self.game.play(from, to)?;
                self.report_move(&record, out)
            }
            Command::Moves(square) => self.handle_moves(square, out),
            Command::Status => self.print_status(out),
            Command::Set(option) => self.handle_set(option, out),
            Command::New => {
                self.game.reset();
                self.print_board(out)
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            Command::Rules => {
                writeln!(out, "{RULES}")?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn handle_click<W: Write>(&mut self, square: Square, out: &mut W) -> Result<(), PlayError> {
        match self.game.click(square)? {
            ClickEffect::Selected(moves) => {
                self.print_board(out)?;
                writeln!(out, "selected {square}: {}", format_squares(&moves))?;
            }
            ClickEffect::Deselected => writeln!(out, "selection cleared")?,
            ClickEffect::Moved(record) => self.report_move(&record, out)?,
            ClickEffect::Ignored => writeln!(out, "nothing to do")?,
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&mut self, square: Square, out: &mut W) -> Result<(), PlayError> {
        let moves = self.game.select(square)?.to_vec();
        self.print_board(out)?;
        writeln!(out, "moves from {square}: {}", format_squares(&moves))?;
        Ok(())
    }

    fn handle_set<W: Write>(
        &mut self,
        option: ConsoleOption,
        out: &mut W,
    ) -> Result<(), PlayError> {
        match option {
            ConsoleOption::Labels(labels) => {
                self.config.labels = labels;
                let name = match labels {
                    Labels::Chinese => "chinese",
                    Labels::Ascii => "ascii",
                };
                writeln!(out, "labels set to {name}")?;
            }
            ConsoleOption::Hints(hints) => {
                self.config.hints = hints;
                writeln!(out, "hints {}", if hints { "on" } else { "off" })?;
            }
        }
        debug!(config = ?self.config, "console option changed");
        Ok(())
    }

    fn report_move<W: Write>(&self, record: &MoveRecord, out: &mut W) -> Result<(), PlayError> {
        write!(out, "played {}-{}", record.mv.from, record.mv.to)?;
        if let Some(captured) = &record.captured {
            write!(out, ", captured {}", self.piece_symbol(captured))?;
        }
        writeln!(out)?;
        self.print_board(out)
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), PlayError> {
        let marks: &[Square] = if self.config.hints {
            self.game.valid_moves()
        } else {
            &[]
        };
        let board = self
            .game
            .position()
            .pretty()
            .with_marks(marks)
            .with_last_move(self.game.last_move())
            .with_check(self.game.check_square())
            .with_selected(self.game.selected().map(|piece| piece.square))
            .chinese(self.config.labels == Labels::Chinese);
        writeln!(out, "{board}")?;
        if let Some((from, to)) = self.game.last_move() {
            writeln!(out, "last move {from}-{to}")?;
        }
        self.print_status(out)
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<(), PlayError> {
        if let Some(result) = self.game.result() {
            writeln!(out, "{result}")?;
            return Ok(());
        }
        let turn = self.game.turn();
        writeln!(out, "{turn} to move")?;
        if let Some(square) = self.game.check_square() {
            writeln!(out, "{turn} is in check! (general on {square})")?;
        }
        Ok(())
    }

    fn piece_symbol(&self, piece: &Piece) -> char {
        match self.config.labels {
            Labels::Chinese => piece.label(),
            Labels::Ascii => piece.letter(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn format_squares(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "no legal moves".to_string();
    }
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
