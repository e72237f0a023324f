//! Console command parsing.

use xiangqi_core::Square;

use crate::error::PlayError;

/// How pieces are drawn on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Labels {
    /// Traditional characters (帥, 將, 馬, ...).
    Chinese,
    /// Piece letters, uppercase for Red.
    Ascii,
}

/// An option changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOption {
    Labels(Labels),
    /// Mark the selected piece's destinations on the board.
    Hints(bool),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `board` -- print the board.
    Board,
    /// `click <row> <col>` -- act as if the square was clicked.
    Click(Square),
    /// `move <row> <col> <row> <col>` -- play a move directly.
    Move { from: Square, to: Square },
    /// `moves <row> <col>` -- select a piece and list its legal destinations.
    Moves(Square),
    /// `status` -- report whose turn it is and any check or result.
    Status,
    /// `set <option> <value>` -- change a console option.
    Set(ConsoleOption),
    /// `rules` -- summarize how each piece moves.
    Rules,
    /// `new` -- start a fresh game.
    New,
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the console.
    Quit,
}

/// Parse a single non-empty line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Err(PlayError::UnknownCommand {
            name: String::new(),
        });
    };

    match name {
        "board" | "b" => Ok(Command::Board),
        "click" | "c" => Ok(Command::Click(parse_square(args, "click")?)),
        "move" | "m" => {
            let from = parse_square(args, "move")?;
            let to = parse_square(args.get(2..).unwrap_or_default(), "move")?;
            Ok(Command::Move { from, to })
        }
        "moves" => Ok(Command::Moves(parse_square(args, "moves")?)),
        "status" => Ok(Command::Status),
        "rules" => Ok(Command::Rules),
        "set" => parse_set(args),
        "new" => Ok(Command::New),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(PlayError::UnknownCommand {
            name: name.to_string(),
        }),
    }
}

/// Parse the first two tokens as a `row col` pair.
fn parse_square(tokens: &[&str], command: &'static str) -> Result<Square, PlayError> {
    let [row, col, ..] = tokens else {
        return Err(PlayError::MissingArgument { command });
    };
    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;
    Square::new(row, col).ok_or(PlayError::OffBoard { row, col })
}

fn parse_coordinate(token: &str) -> Result<u8, PlayError> {
    token.parse().map_err(|_| PlayError::InvalidCoordinate {
        value: token.to_string(),
    })
}

/// Parse the `set` command arguments.
fn parse_set(tokens: &[&str]) -> Result<Command, PlayError> {
    let [name, value, ..] = tokens else {
        return Err(PlayError::MissingArgument { command: "set" });
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "labels" => match value.to_ascii_lowercase().as_str() {
            "chinese" => ConsoleOption::Labels(Labels::Chinese),
            "ascii" => ConsoleOption::Labels(Labels::Ascii),
            _ => {
                return Err(PlayError::InvalidOptionValue {
                    name: "labels",
                    value: value.to_string(),
                });
            }
        },
        "hints" => match value.to_ascii_lowercase().as_str() {
            "on" | "true" => ConsoleOption::Hints(true),
            "off" | "false" => ConsoleOption::Hints(false),
            _ => {
                return Err(PlayError::InvalidOptionValue {
                    name: "hints",
                    value: value.to_string(),
                });
            }
        },
        _ => {
            return Err(PlayError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("status").unwrap(), Command::Status);
        assert_eq!(parse_command("rules").unwrap(), Command::Rules);
        assert_eq!(parse_command("new").unwrap(), Command::New);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("  q  ").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_click() {
        assert_eq!(parse_command("click 9 1").unwrap(), Command::Click(sq(9, 1)));
    }

    #[test]
    fn parse_move() {
        assert_eq!(
            parse_command("move 9 1 7 2").unwrap(),
            Command::Move {
                from: sq(9, 1),
                to: sq(7, 2)
            }
        );
    }

    #[test]
    fn parse_moves() {
        assert_eq!(parse_command("moves 0 4").unwrap(), Command::Moves(sq(0, 4)));
    }

    #[test]
    fn parse_missing_arguments() {
        assert!(matches!(
            parse_command("click 9"),
            Err(PlayError::MissingArgument { command: "click" })
        ));
        assert!(matches!(
            parse_command("move 9 1 7"),
            Err(PlayError::MissingArgument { command: "move" })
        ));
        assert!(matches!(
            parse_command("set hints"),
            Err(PlayError::MissingArgument { command: "set" })
        ));
    }

    #[test]
    fn parse_bad_coordinates() {
        assert!(matches!(
            parse_command("click a 1"),
            Err(PlayError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            parse_command("click 10 0"),
            Err(PlayError::OffBoard { row: 10, col: 0 })
        ));
        assert!(matches!(
            parse_command("click 0 9"),
            Err(PlayError::OffBoard { row: 0, col: 9 })
        ));
    }

    #[test]
    fn parse_set_options() {
        assert_eq!(
            parse_command("set labels chinese").unwrap(),
            Command::Set(ConsoleOption::Labels(Labels::Chinese))
        );
        assert_eq!(
            parse_command("set Hints OFF").unwrap(),
            Command::Set(ConsoleOption::Hints(false))
        );
        assert!(matches!(
            parse_command("set hints maybe"),
            Err(PlayError::InvalidOptionValue { name: "hints", .. })
        ));
        assert!(matches!(
            parse_command("set depth 3"),
            Err(PlayError::UnknownOption { .. })
        ));
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            parse_command("castle"),
            Err(PlayError::UnknownCommand { .. })
        ));
    }
}
