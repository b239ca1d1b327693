//! Line-oriented player commands.

use derive_more::Display;
use knights_engine::{CardId, Position};
use std::str::FromStr;

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HostCommand {
    /// Select a hand card by instance id.
    #[display("select {}", _0)]
    Select(CardId),
    /// Move to a highlighted square.
    #[display("move {} {}", _0.row, _0.col)]
    Move(Position),
    /// Drop the current selection.
    #[display("clear")]
    Clear,
    /// Open the deck viewer.
    #[display("deck")]
    Deck,
    /// Close the deck viewer.
    #[display("close")]
    Close,
    /// Redraw the board.
    #[display("board")]
    Board,
    /// Show the hand.
    #[display("hand")]
    Hand,
    /// Print the full state as JSON.
    #[display("state")]
    State,
    /// Show the command list.
    #[display("help")]
    Help,
    /// Leave the game.
    #[display("quit")]
    Quit,
}

/// Command list shown by `help`.
pub const HELP: &str = "\
Commands:
  select <id>        select a hand card (alias: s)
  move <row> <col>   move to a highlighted square (alias: m)
  clear              drop the current selection
  deck               open the deck viewer
  close              close the deck viewer
  board              redraw the board
  hand               show the hand
  state              print the game state as JSON
  help               show this list
  quit               leave the game (alias: q)";

/// Failure to parse a command line.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Blank input.
    #[display("Empty command")]
    Empty,
    /// First word is not a known command.
    #[display("Unknown command '{}'", _0)]
    Unknown(String),
    /// Wrong number of arguments.
    #[display("Usage: {}", _0)]
    Usage(&'static str),
    /// An argument is not an integer.
    #[display("'{}' is not a number", _0)]
    NotANumber(String),
}

impl std::error::Error for CommandError {}

fn number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::NotANumber(word.to_string()))
}

impl FromStr for HostCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        let bare = |command: HostCommand| {
            if args.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::Usage(HELP_USAGE_BARE))
            }
        };

        match head.to_ascii_lowercase().as_str() {
            "select" | "s" => match args {
                [id] => Ok(Self::Select(CardId::from(number::<u32>(id)?))),
                _ => Err(CommandError::Usage("select <id>")),
            },
            "move" | "m" => match args {
                [row, col] => Ok(Self::Move(Position::new(number(row)?, number(col)?))),
                _ => Err(CommandError::Usage("move <row> <col>")),
            },
            "clear" => bare(Self::Clear),
            "deck" => bare(Self::Deck),
            "close" => bare(Self::Close),
            "board" => bare(Self::Board),
            "hand" => bare(Self::Hand),
            "state" => bare(Self::State),
            "help" | "?" => bare(Self::Help),
            "quit" | "exit" | "q" => bare(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

const HELP_USAGE_BARE: &str = "this command takes no arguments";
