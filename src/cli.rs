//! Command-line interface for knights_journey.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Knight's Journey - card-driven knight movement on a square board
#[derive(Parser, Debug)]
#[command(name = "knights_journey")]
#[command(about = "Move a knight with a hand of movement cards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Path to a game config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Finalize moves at once instead of waiting for them to settle
        #[arg(long)]
        no_delay: bool,
    },

    /// Print the opening deck grouped by card name, then exit
    Deck {
        /// Path to a game config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
