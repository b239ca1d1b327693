//! The turn/action state machine and the operations exposed to input handlers.

use crate::action::{CommitMove, Rejection, SelectCard};
use crate::card::CardId;
use crate::config::EngineConfig;
use crate::contracts::{
    enforce_post, CommitContract, Contract, FinalizeContract, NotResolving, SelectContract,
};
use crate::deck_view::DeckView;
use crate::layout::{Layout, LayoutError};
use crate::render::{NullRenderer, Renderer};
use crate::resolution::{self, PendingResolution, ResolutionReport};
use crate::rules::valid_moves;
use crate::state::GameState;
use crate::types::Position;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Owns the game state and is the only way to change it.
///
/// All operations take `&mut self`, so mutations are serialized by the
/// borrow checker. Rejected inputs return `Err` and leave the rules state
/// as it was (the single exception is the fresh-turn reset described on
/// [`Engine::select_card`]).
#[derive(Debug)]
pub struct Engine<R: Renderer = NullRenderer> {
    state: GameState,
    config: EngineConfig,
    renderer: R,
    pending: Option<PendingResolution>,
    deck_viewer_open: bool,
}

impl Engine<NullRenderer> {
    /// Creates a headless engine.
    #[instrument(skip_all)]
    pub fn headless(config: EngineConfig, layout: &Layout) -> Result<Self, LayoutError> {
        Self::new(config, layout, NullRenderer)
    }
}

impl<R: Renderer> Engine<R> {
    /// Creates an engine from a layout and draws the initial frame.
    #[instrument(skip_all)]
    pub fn new(config: EngineConfig, layout: &Layout, renderer: R) -> Result<Self, LayoutError> {
        let state = layout.build(&config)?;
        let mut engine = Self {
            state,
            config,
            renderer,
            pending: None,
            deck_viewer_open: false,
        };
        engine.renderer.render_board(&engine.state);
        engine.renderer.render_player_hand(&engine.state);
        engine.renderer.render_health(&engine.state);
        info!("Engine ready");
        Ok(engine)
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably, for host-side repaints.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Returns the committed move awaiting finalization.
    pub fn pending(&self) -> Option<&PendingResolution> {
        self.pending.as_ref()
    }

    /// Returns true while the deck viewer is shown.
    pub fn is_deck_viewer_open(&self) -> bool {
        self.deck_viewer_open
    }

    /// Repaints the board, hand, and stats.
    pub fn redraw(&mut self) {
        self.renderer.render_board(&self.state);
        self.renderer.render_player_hand(&self.state);
        self.renderer.render_health(&self.state);
    }

    // ─────────────────────────────────────────────────────────────
    //  Turn/action state machine
    // ─────────────────────────────────────────────────────────────

    /// Selects a card from the hand and highlights its destinations.
    ///
    /// When the turn has no actions left, the attempt first starts a fresh
    /// turn with the configured starting actions, then proceeds as a normal
    /// selection. This stands in for an opponent phase that does not exist
    /// yet, so the reset happens even if the id turns out not to be in hand.
    /// Repeated attempts never grant more than the starting allotment.
    #[instrument(skip(self), fields(phase = %self.state.phase(), actions = self.state.actions_remaining()))]
    pub fn select_card(&mut self, card: CardId) -> Result<(), Rejection> {
        NotResolving::check(&self.state).inspect_err(|e| debug!(error = %e, "Selection refused"))?;

        if self.state.actions_remaining() == 0 {
            // TODO: replace with an opposing-turn phase once enemies act.
            self.state.start_fresh_turn(*self.config.starting_actions());
        }

        let action = SelectCard { card };
        let before = self.state.clone();
        SelectContract::pre(&self.state, &action)
            .inspect_err(|e| debug!(error = %e, "Selection refused"))?;

        let Some(selected) = self.state.zones().hand_card(card) else {
            return Err(Rejection::NotInHand(card));
        };
        let highlights = valid_moves(Some(self.state.player()), selected, self.state.board());
        debug!(card = %selected, destinations = highlights.len(), "Card selected");
        self.state.set_selection(card, highlights);

        enforce_post("select_card", SelectContract::post(&before, &self.state));
        self.renderer.render_board(&self.state);
        Ok(())
    }

    /// Drops the selection and its highlights.
    #[instrument(skip(self))]
    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
        self.renderer.render_board(&self.state);
    }

    /// Commits the selected card's move to `destination`.
    ///
    /// The player moves immediately. Returns how long the host should let
    /// the move settle before calling [`Engine::finalize`]; until then the
    /// engine refuses new selections and commits.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn commit_move(&mut self, destination: Position) -> Result<Duration, Rejection> {
        let action = CommitMove { destination };
        CommitContract::pre(&self.state, &action)
            .inspect_err(|e| debug!(error = %e, "Commit refused"))?;

        let Some(card) = self.state.selected_card() else {
            return Err(Rejection::NoSelection);
        };
        let settle = self.config.settle().for_card(card);
        let pending = PendingResolution::new(self.state.player(), destination, card, settle);

        let before = self.state.clone();
        self.state.begin_resolving(destination);
        self.renderer.render_board(&self.state);
        self.renderer.update_game_object_positions(&self.state);
        enforce_post("commit_move", CommitContract::post(&before, &self.state));

        info!(
            card_id = %pending.card,
            from = %pending.origin,
            to = %destination,
            settle_ms = settle.as_millis() as u64,
            "Move committed"
        );
        self.pending = Some(pending);
        Ok(settle)
    }

    /// Runs the rest of a committed move.
    ///
    /// Returns `None` when nothing is pending.
    #[instrument(skip(self))]
    pub fn finalize(&mut self) -> Option<ResolutionReport> {
        let pending = self.pending.take()?;
        if let Err(e) = FinalizeContract::pre(&self.state, &pending.card) {
            warn!(error = %e, "Pending move found outside resolution");
        }

        let before = self.state.clone();
        let report = resolution::finalize(&mut self.state, &pending, &self.config);
        if report.reversed {
            self.renderer.update_game_object_positions(&self.state);
        }
        enforce_post("finalize", FinalizeContract::post(&before, &self.state));

        self.renderer.render_player_hand(&self.state);
        self.renderer.render_health(&self.state);
        self.renderer.render_board(&self.state);
        info!(
            actions = report.actions_remaining,
            phase = %report.phase,
            captured = report.captured.is_some(),
            "Move resolved"
        );
        Some(report)
    }

    /// Commits and finalizes in one step, skipping the settle delay.
    pub fn play(&mut self, destination: Position) -> Result<ResolutionReport, Rejection> {
        self.commit_move(destination)?;
        self.finalize().ok_or(Rejection::NothingPending)
    }

    // ─────────────────────────────────────────────────────────────
    //  Deck viewer
    // ─────────────────────────────────────────────────────────────

    /// Shows every owned card grouped by name.
    #[instrument(skip(self))]
    pub fn open_deck_viewer(&mut self) -> DeckView {
        let view = DeckView::from_state(&self.state);
        self.deck_viewer_open = true;
        self.renderer.render_deck_viewer(&view);
        view
    }

    /// Hides the deck viewer.
    pub fn close_deck_viewer(&mut self) {
        self.deck_viewer_open = false;
    }
}
