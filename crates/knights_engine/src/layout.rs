//! Opening layouts: where the player and enemies start and what the deck holds.

use crate::card::{Card, CardId, MovementPattern};
use crate::config::EngineConfig;
use crate::state::GameState;
use crate::types::{Offset, Position};
use crate::upgrade::Upgrade;
use crate::zones::Zones;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// A card as written in a layout, before it receives an instance id.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CardSpec {
    /// Pattern name shown to the player.
    name: String,
    /// Movement rule.
    #[serde(default = "default_pattern")]
    pattern: MovementPattern,
    /// Attached upgrades, by id.
    #[serde(default)]
    upgrades: Vec<Upgrade>,
}

fn default_pattern() -> MovementPattern {
    MovementPattern::Knight
}

impl CardSpec {
    /// Creates a card spec.
    pub fn new(
        name: impl Into<String>,
        pattern: MovementPattern,
        upgrades: impl IntoIterator<Item = Upgrade>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern,
            upgrades: upgrades.into_iter().collect(),
        }
    }

    /// A plain knight card.
    pub fn knight(upgrades: impl IntoIterator<Item = Upgrade>) -> Self {
        Self::new("Knight", MovementPattern::Knight, upgrades)
    }

    fn instantiate(&self, id: CardId) -> Card {
        Card::new(id, &self.name, self.pattern.clone(), self.upgrades.iter().copied())
    }
}

/// Starting position of a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Layout {
    /// Player's starting square.
    player: Position,
    /// Enemy squares.
    #[serde(default)]
    enemies: Vec<Position>,
    /// Deck contents, top card first.
    deck: Vec<CardSpec>,
}

impl Layout {
    /// Creates a layout.
    pub fn new(player: Position, enemies: Vec<Position>, deck: Vec<CardSpec>) -> Self {
        Self {
            player,
            enemies,
            deck,
        }
    }

    /// Checks the layout against the configured board.
    #[instrument(skip(self, config))]
    pub fn validate(&self, config: &EngineConfig) -> Result<(), LayoutError> {
        let board = *config.board_size();
        if board.as_coordinate().is_none() {
            return Err(LayoutError::new(format!(
                "Board size {} exceeds the coordinate range",
                board
            )));
        }
        if *config.starting_actions() == 0 {
            return Err(LayoutError::new(
                "Starting actions must be at least 1".to_string(),
            ));
        }
        if !board.contains(self.player) {
            return Err(LayoutError::new(format!(
                "Player start {} is outside a {}x{} board",
                self.player, board, board
            )));
        }

        let mut seen = BTreeSet::new();
        for enemy in &self.enemies {
            if !board.contains(*enemy) {
                return Err(LayoutError::new(format!(
                    "Enemy at {} is outside a {}x{} board",
                    enemy, board, board
                )));
            }
            if *enemy == self.player {
                return Err(LayoutError::new(format!(
                    "Enemy at {} shares the player's square",
                    enemy
                )));
            }
            if !seen.insert(*enemy) {
                return Err(LayoutError::new(format!("Two enemies share square {}", enemy)));
            }
        }

        for spec in &self.deck {
            if let MovementPattern::Offsets(steps) = spec.pattern() {
                if steps.iter().all(|step| step.is_zero()) {
                    return Err(LayoutError::new(format!(
                        "Card '{}' has no movement steps",
                        spec.name()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Builds the opening game state.
    ///
    /// Cards receive instance ids 1, 2, 3, ... in deck order, then the
    /// opening hand is drawn from the top of the deck.
    #[instrument(skip(self, config), fields(deck = self.deck.len(), enemies = self.enemies.len()))]
    pub fn build(&self, config: &EngineConfig) -> Result<GameState, LayoutError> {
        self.validate(config)?;

        let cards = self
            .deck
            .iter()
            .zip(1u32..)
            .map(|(spec, id)| spec.instantiate(CardId::from(id)));
        let mut zones = Zones::from_deck(cards);
        for _ in 0..*config.hand_size() {
            if zones.draw().is_none() {
                debug!("Deck ran out while drawing the opening hand");
                break;
            }
        }

        let state = GameState::new(
            *config.board_size(),
            self.player,
            self.enemies.iter().copied().collect(),
            zones,
            *config.starting_actions(),
        );
        info!(
            player = %state.player(),
            hand = state.hand().len(),
            "Game state built from layout"
        );
        Ok(state)
    }
}

impl Default for Layout {
    /// An 8x8 opening with five enemies and a ten-card knight deck.
    fn default() -> Self {
        let hook = MovementPattern::Offsets(vec![Offset::new(-1, -2), Offset::new(-1, 2)]);
        Self {
            player: Position::new(7, 4),
            enemies: vec![
                Position::new(5, 3),
                Position::new(4, 5),
                Position::new(2, 2),
                Position::new(2, 6),
                Position::new(0, 4),
            ],
            deck: vec![
                CardSpec::knight([]),
                CardSpec::knight([Upgrade::Stamina]),
                CardSpec::new("Hook", hook.clone(), []),
                CardSpec::knight([Upgrade::Armor]),
                CardSpec::knight([]),
                CardSpec::knight([Upgrade::Reverse, Upgrade::Armor]),
                CardSpec::new("Hook", hook, [Upgrade::Stamina]),
                CardSpec::knight([]),
                CardSpec::knight([Upgrade::Reverse]),
                CardSpec::knight([Upgrade::Stamina, Upgrade::Armor]),
            ],
        }
    }
}

/// Layout error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Layout error: {} at {}:{}", message, file, line)]
pub struct LayoutError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LayoutError {
    /// Creates a new layout error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
