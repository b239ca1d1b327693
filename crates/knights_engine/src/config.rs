//! Engine configuration: board size, action economy, refill, settle delays.

use crate::card::Card;
use crate::types::BoardSize;
use crate::upgrade::Upgrade;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// What happens to the hand after a card is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RefillPolicy {
    /// Never draw.
    None,
    /// Draw one replacement card.
    #[default]
    DrawOne,
    /// Draw until the hand is back at `hand_size`.
    DrawToSize,
}

/// How long the host waits between committing a move and finalizing it.
///
/// Delays exist for animation only; resolution produces the same state
/// whatever they are set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SettleDelays {
    /// Delay for cards carrying `reverse_1`, in milliseconds.
    #[serde(default = "default_reverse_ms")]
    reverse_ms: u64,
    /// Delay for cards with other upgrades, in milliseconds.
    #[serde(default = "default_upgraded_ms")]
    upgraded_ms: u64,
    /// Delay for cards with no upgrades, in milliseconds.
    #[serde(default = "default_plain_ms")]
    plain_ms: u64,
}

fn default_reverse_ms() -> u64 {
    300
}

fn default_upgraded_ms() -> u64 {
    30
}

fn default_plain_ms() -> u64 {
    300
}

impl SettleDelays {
    /// Creates delays from millisecond values.
    pub fn new(reverse_ms: u64, upgraded_ms: u64, plain_ms: u64) -> Self {
        Self {
            reverse_ms,
            upgraded_ms,
            plain_ms,
        }
    }

    /// Delays of zero for headless play.
    pub fn immediate() -> Self {
        Self::new(0, 0, 0)
    }

    /// Picks the delay for a committed card.
    #[instrument(skip(card), fields(card_id = %card.id()))]
    pub fn for_card(&self, card: &Card) -> Duration {
        let ms = if card.has_upgrade(Upgrade::Reverse) {
            self.reverse_ms
        } else if !card.upgrades().is_empty() {
            self.upgraded_ms
        } else {
            self.plain_ms
        };
        Duration::from_millis(ms)
    }
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self::new(default_reverse_ms(), default_upgraded_ms(), default_plain_ms())
    }
}

/// Rules configuration for one session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of the board.
    #[serde(default)]
    board_size: BoardSize,

    /// Actions granted at session start and on each fresh turn.
    #[serde(default = "default_starting_actions")]
    starting_actions: u32,

    /// Opening hand size, also the target of [`RefillPolicy::DrawToSize`].
    #[serde(default = "default_hand_size")]
    hand_size: usize,

    /// Refill behavior after consumption.
    #[serde(default)]
    refill: RefillPolicy,

    /// Settle delays between commit and finalize.
    #[serde(default)]
    settle: SettleDelays,
}

fn default_starting_actions() -> u32 {
    1
}

fn default_hand_size() -> usize {
    3
}

impl EngineConfig {
    /// Creates the default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the board size.
    pub fn with_board_size(mut self, board_size: BoardSize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Replaces the starting action count.
    pub fn with_starting_actions(mut self, starting_actions: u32) -> Self {
        self.starting_actions = starting_actions;
        self
    }

    /// Replaces the hand size.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Replaces the refill policy.
    pub fn with_refill(mut self, refill: RefillPolicy) -> Self {
        self.refill = refill;
        self
    }

    /// Replaces the settle delays.
    pub fn with_settle(mut self, settle: SettleDelays) -> Self {
        self.settle = settle;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            starting_actions: default_starting_actions(),
            hand_size: default_hand_size(),
            refill: RefillPolicy::default(),
            settle: SettleDelays::default(),
        }
    }
}
