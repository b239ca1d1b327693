//! Plain-text renderer for terminals.

use knights_engine::{DeckView, GameState, Position, Renderer};
use std::io::Write;
use tracing::{instrument, warn};

/// Renders the game as ASCII to any writer.
///
/// Board legend: `P` player, `E` enemy, `*` highlighted destination
/// (`x` when the destination holds an enemy), `.` empty.
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Writes one line of host text.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.emit(format!("{}\n", text.as_ref()));
    }

    fn emit(&mut self, text: String) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

/// Draws the board grid with column and row labels.
#[instrument(skip(state))]
pub fn board_text(state: &GameState) -> String {
    // Built states always have a board that fits in i32.
    let n = state.board().as_coordinate().unwrap_or_default();
    let mut text = String::from("   ");
    for col in 0..n {
        text.push_str(&format!("{:>2}", col));
    }
    text.push('\n');

    for row in 0..n {
        text.push_str(&format!("{:>2} ", row));
        for col in 0..n {
            let pos = Position::new(row, col);
            let enemy = state.enemies().contains(&pos);
            let symbol = if pos == state.player() {
                'P'
            } else if state.is_highlighted(pos) {
                if enemy { 'x' } else { '*' }
            } else if enemy {
                'E'
            } else {
                '.'
            };
            text.push(' ');
            text.push(symbol);
        }
        text.push('\n');
    }
    text
}

/// Lists the hand, marking the selected card.
pub fn hand_text(state: &GameState) -> String {
    if state.hand().is_empty() {
        return "Hand: (empty)\n".to_string();
    }
    let mut text = String::from("Hand:\n");
    for card in state.hand() {
        let marker = if state.selected() == Some(card.id()) { '>' } else { ' ' };
        text.push_str(&format!(" {} {}\n", marker, card));
    }
    text
}

/// One-line player stats.
pub fn health_text(state: &GameState) -> String {
    format!(
        "Turn {} | Actions {} | Armor {} | Captures {} | Deck {} | Discard {} | {}\n",
        state.turn(),
        state.actions_remaining(),
        state.armor(),
        state.captures(),
        state.zones().deck().len(),
        state.discard().len(),
        state.phase(),
    )
}

/// Deck viewer listing, one group per card name.
pub fn deck_text(view: &DeckView) -> String {
    let mut text = format!("Deck viewer ({} cards):\n", view.total());
    for (name, entries) in view.groups() {
        text.push_str(&format!("  {} x{}\n", name, entries.len()));
        for entry in entries {
            text.push_str(&format!("    {} ({})\n", entry.card, entry.zone));
        }
    }
    text
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render_board(&mut self, state: &GameState) {
        self.emit(board_text(state));
    }

    fn render_player_hand(&mut self, state: &GameState) {
        self.emit(hand_text(state));
    }

    fn render_health(&mut self, state: &GameState) {
        self.emit(health_text(state));
    }

    fn update_game_object_positions(&mut self, state: &GameState) {
        self.emit(format!("Player moves to {}\n", state.player()));
    }

    fn render_deck_viewer(&mut self, view: &DeckView) {
        self.emit(deck_text(view));
    }
}
