//! The game state record shared by the turn machine and the resolution pipeline.

use crate::card::{Card, CardId};
use crate::phases::TurnPhase;
use crate::types::{BoardSize, Position};
use crate::zones::Zones;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Complete state of one game session.
///
/// Read access is public. Mutation is crate-private and only reached
/// through [`Engine`](crate::Engine) operations, so the action count and
/// the zones cannot be changed from outside the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: BoardSize,
    zones: Zones,
    player: Position,
    enemies: BTreeSet<Position>,
    selected: Option<CardId>,
    highlights: BTreeSet<Position>,
    actions_remaining: u32,
    armor: u32,
    phase: TurnPhase,
    turn: u32,
    captures: u32,
}

impl GameState {
    /// Creates a state at the start of the first turn.
    #[instrument(skip(zones, enemies))]
    pub(crate) fn new(
        board: BoardSize,
        player: Position,
        enemies: BTreeSet<Position>,
        zones: Zones,
        starting_actions: u32,
    ) -> Self {
        Self {
            board,
            zones,
            player,
            enemies,
            selected: None,
            highlights: BTreeSet::new(),
            actions_remaining: starting_actions,
            armor: 0,
            phase: TurnPhase::AwaitingSelection,
            turn: 1,
            captures: 0,
        }
    }

    /// Returns the board bounds.
    pub fn board(&self) -> BoardSize {
        self.board
    }

    /// Returns the card zones.
    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    /// Cards available for selection.
    pub fn hand(&self) -> &[Card] {
        self.zones.hand()
    }

    /// Spent cards.
    pub fn discard(&self) -> &[Card] {
        self.zones.discard()
    }

    /// Returns the player's square.
    pub fn player(&self) -> Position {
        self.player
    }

    /// Returns the squares holding enemies.
    pub fn enemies(&self) -> &BTreeSet<Position> {
        &self.enemies
    }

    /// Returns the selected card's instance id.
    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    /// Returns the selected card if it is still in hand.
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.and_then(|id| self.zones.hand_card(id))
    }

    /// Returns the squares offered as destinations.
    pub fn highlights(&self) -> &BTreeSet<Position> {
        &self.highlights
    }

    /// Checks whether a square is offered as a destination.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlights.contains(&pos)
    }

    /// Actions left in the current turn.
    pub fn actions_remaining(&self) -> u32 {
        self.actions_remaining
    }

    /// Armor accumulated this session.
    pub fn armor(&self) -> u32 {
        self.armor
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Turn counter, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Enemies captured this session.
    pub fn captures(&self) -> u32 {
        self.captures
    }

    // ─────────────────────────────────────────────────────────────
    //  Turn machine mutators
    // ─────────────────────────────────────────────────────────────

    /// Grants a fresh allotment of actions.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub(crate) fn start_fresh_turn(&mut self, starting_actions: u32) {
        self.actions_remaining = starting_actions;
        self.turn += 1;
        if self.phase == TurnPhase::TurnEnded {
            self.phase = TurnPhase::AwaitingSelection;
        }
        info!(turn = self.turn, actions = starting_actions, "Starting new turn");
    }

    pub(crate) fn set_selection(&mut self, id: CardId, highlights: BTreeSet<Position>) {
        self.selected = Some(id);
        self.highlights = highlights;
        self.phase = TurnPhase::AwaitingDestination;
    }

    /// Clears selection and highlights. Safe to call repeatedly.
    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
        self.highlights.clear();
        if !self.phase.is_resolving() {
            self.phase = TurnPhase::AwaitingSelection;
        }
    }

    pub(crate) fn begin_resolving(&mut self, destination: Position) {
        self.highlights.clear();
        self.player = destination;
        self.phase = TurnPhase::Resolving;
    }

    /// Spends one action and, with a stamina bonus, refunds it.
    #[instrument(skip(self), fields(before = self.actions_remaining))]
    pub(crate) fn spend_action(&mut self, bonus: u32) {
        self.actions_remaining = self.actions_remaining.saturating_sub(1) + bonus;
    }

    /// Picks the phase that follows a finished resolution.
    pub(crate) fn settle_turn(&mut self) -> TurnPhase {
        self.phase = if self.actions_remaining > 0 {
            debug!(actions = self.actions_remaining, "Player has actions remaining");
            TurnPhase::AwaitingSelection
        } else {
            info!(turn = self.turn, "Player turn ended");
            TurnPhase::TurnEnded
        };
        self.phase
    }

    // ─────────────────────────────────────────────────────────────
    //  Board and zone mutators
    // ─────────────────────────────────────────────────────────────

    pub(crate) fn set_player(&mut self, pos: Position) {
        self.player = pos;
    }

    /// Removes the enemy on `pos`, if any.
    pub(crate) fn capture_at(&mut self, pos: Position) -> bool {
        let captured = self.enemies.remove(&pos);
        if captured {
            self.captures += 1;
            info!(position = %pos, remaining = self.enemies.len(), "Enemy captured");
        }
        captured
    }

    pub(crate) fn zones_mut(&mut self) -> &mut Zones {
        &mut self.zones
    }

    pub(crate) fn gain_armor(&mut self, amount: u32) {
        self.armor += amount;
        info!(armor = self.armor, "Armor gained");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(actions: u32) -> GameState {
        GameState::new(
            BoardSize::STANDARD,
            Position::new(0, 0),
            BTreeSet::new(),
            Zones::default(),
            actions,
        )
    }

    #[test]
    fn test_spend_action_saturates() {
        let mut s = state(0);
        s.spend_action(0);
        assert_eq!(s.actions_remaining(), 0);
    }

    #[test]
    fn test_stamina_bonus_cancels_spend() {
        let mut s = state(1);
        s.spend_action(1);
        assert_eq!(s.actions_remaining(), 1);
        assert_eq!(s.settle_turn(), TurnPhase::AwaitingSelection);
    }

    #[test]
    fn test_clear_leaves_turn_ended() {
        let mut s = state(1);
        s.spend_action(0);
        s.settle_turn();
        s.clear_selection();
        assert_eq!(s.phase(), TurnPhase::AwaitingSelection);
        assert_eq!(s.actions_remaining(), 0);
    }

    #[test]
    fn test_clear_keeps_resolving() {
        let mut s = state(1);
        s.begin_resolving(Position::new(1, 2));
        s.clear_selection();
        assert_eq!(s.phase(), TurnPhase::Resolving);
    }

    #[test]
    fn test_capture_counts() {
        let mut s = state(1);
        s.enemies.insert(Position::new(1, 2));
        assert!(s.capture_at(Position::new(1, 2)));
        assert!(!s.capture_at(Position::new(1, 2)));
        assert_eq!(s.captures(), 1);
    }
}
