//! Knight's Journey host application.
//!
//! Wraps the [`knights_engine`] rules in a terminal session: TOML
//! configuration, a plain-text renderer, and a line-oriented command loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
mod console;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console
pub use command::{CommandError, HELP, HostCommand};
pub use console::{ConsoleRenderer, board_text, deck_text, hand_text, health_text};
pub use session::{Flow, GameSession, summary};
