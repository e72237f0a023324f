//! Playing Xiangqi: a headless game controller and a text console.

pub mod command;
pub mod console;
pub mod error;
pub mod game;

pub use command::{Command, ConsoleOption, Labels};
pub use console::{Console, ConsoleConfig};
pub use error::PlayError;
pub use game::{ClickEffect, Game, GameResult, MoveRecord, WinReason};
