//! The rendering collaborator the engine drives after each transition.

use crate::deck_view::DeckView;
use crate::state::GameState;

/// Presentation hooks invoked by the engine.
///
/// Every method is side-effect only; the engine never reads anything back.
pub trait Renderer {
    /// Repaints the board and highlights.
    fn render_board(&mut self, state: &GameState);

    /// Repaints the hand.
    fn render_player_hand(&mut self, state: &GameState);

    /// Repaints armor and other player stats.
    fn render_health(&mut self, state: &GameState);

    /// Repositions object markers without a full repaint.
    fn update_game_object_positions(&mut self, state: &GameState);

    /// Shows the grouped deck viewer.
    fn render_deck_viewer(&mut self, view: &DeckView);
}

/// Renderer that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_board(&mut self, _state: &GameState) {}

    fn render_player_hand(&mut self, _state: &GameState) {}

    fn render_health(&mut self, _state: &GameState) {}

    fn update_game_object_positions(&mut self, _state: &GameState) {}

    fn render_deck_viewer(&mut self, _view: &DeckView) {}
}
