//! Interactive game session: feeds player commands to the engine.

use crate::command::{HostCommand, HELP};
use crate::config::GameConfig;
use crate::console::{ConsoleRenderer, hand_text};
use knights_engine::{Engine, LayoutError, ResolutionReport};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the session.
    Quit,
}

/// One player's game, rendered to a console writer.
pub struct GameSession<W: Write> {
    engine: Engine<ConsoleRenderer<W>>,
}

impl<W: Write> GameSession<W> {
    /// Builds the opening position from `config` and draws it.
    #[instrument(skip_all)]
    pub fn new(config: &GameConfig, out: W) -> Result<Self, LayoutError> {
        let layout = config.layout_or_default();
        let engine = Engine::new(config.engine().clone(), &layout, ConsoleRenderer::new(out))?;
        info!(
            hand = engine.state().hand().len(),
            deck = engine.state().zones().deck().len(),
            enemies = engine.state().enemies().len(),
            "Game session started"
        );
        Ok(Self { engine })
    }

    /// Returns the engine.
    pub fn engine(&self) -> &Engine<ConsoleRenderer<W>> {
        &self.engine
    }

    /// Runs one command to completion.
    ///
    /// A committed move waits out its settle delay before it is finalized,
    /// so no other command can interleave with a resolution.
    #[instrument(skip(self), fields(command = %command))]
    pub async fn handle(&mut self, command: HostCommand) -> anyhow::Result<Flow> {
        match command {
            HostCommand::Select(card) => {
                if let Err(e) = self.engine.select_card(card) {
                    debug!(error = %e, "Selection rejected");
                    self.say(format!("Cannot select: {}", e));
                }
            }
            HostCommand::Move(destination) => match self.engine.commit_move(destination) {
                Ok(settle) => {
                    tokio::time::sleep(settle).await;
                    if let Some(report) = self.engine.finalize() {
                        self.say(summary(&report));
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Move rejected");
                    self.say(format!("Cannot move: {}", e));
                }
            },
            HostCommand::Clear => self.engine.clear_selection(),
            HostCommand::Deck => {
                self.engine.open_deck_viewer();
                self.say("(close the viewer with 'close')");
            }
            HostCommand::Close => {
                self.engine.close_deck_viewer();
                self.engine.redraw();
            }
            HostCommand::Board => self.engine.redraw(),
            HostCommand::Hand => {
                let text = hand_text(self.engine.state());
                self.say(text.trim_end());
            }
            HostCommand::State => {
                let json = serde_json::to_string_pretty(self.engine.state())?;
                self.say(json);
            }
            HostCommand::Help => self.say(HELP),
            HostCommand::Quit => {
                info!(
                    turn = self.engine.state().turn(),
                    captures = self.engine.state().captures(),
                    "Game session ended"
                );
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn say(&mut self, text: impl AsRef<str>) {
        self.engine.renderer_mut().line(text);
    }
}

/// One-line account of a resolved move.
pub fn summary(report: &ResolutionReport) -> String {
    let mut parts = Vec::new();
    match report.captured {
        Some(pos) => parts.push(format!("captured enemy at {}", pos)),
        None => parts.push("no capture".to_string()),
    }
    if report.reversed {
        parts.push("returned to start".to_string());
    }
    if report.armor_gained > 0 {
        parts.push(format!("+{} armor", report.armor_gained));
    }
    if report.actions_refunded > 0 {
        parts.push(format!("+{} action", report.actions_refunded));
    }
    if !report.drawn.is_empty() {
        parts.push(format!("drew {}", report.drawn.len()));
    }
    format!(
        "Resolved: {}. {} action(s) left.",
        parts.join(", "),
        report.actions_remaining
    )
}
