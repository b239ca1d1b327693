//! Knight's Journey - terminal host
//!
//! Plays the card-driven knight game over stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use knights_engine::{DeckView, Engine};
use knights_journey::{Flow, GameConfig, GameSession, HostCommand, deck_text};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, no_delay } => run_play(config, no_delay).await,
        Command::Deck { config, json } => run_deck(config, json),
    }
}

/// Runs the interactive command loop until `quit` or end of input.
#[instrument]
async fn run_play(config: Option<PathBuf>, no_delay: bool) -> Result<()> {
    let mut config = GameConfig::load(config.as_deref())?;
    if no_delay {
        config = config.without_delays();
    }

    let mut session = GameSession::new(&config, std::io::stdout())?;
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<HostCommand>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, input = %line, "Unparsable command");
                println!("{}", e);
                continue;
            }
        };
        if session.handle(command).await? == Flow::Quit {
            break;
        }
    }

    info!("Goodbye");
    Ok(())
}

/// Prints the opening deck and exits.
#[instrument]
fn run_deck(config: Option<PathBuf>, json: bool) -> Result<()> {
    let config = GameConfig::load(config.as_deref())?;
    let engine = Engine::headless(config.engine().clone(), &config.layout_or_default())?;
    let view = DeckView::from_state(engine.state());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", deck_text(&view));
    }
    Ok(())
}
