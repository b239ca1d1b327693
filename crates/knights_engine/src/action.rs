//! First-class input actions and the reasons an input can be refused.
//!
//! Inputs are inert when refused: a [`Rejection`] means no transition
//! happened and no rules state changed.

use crate::card::CardId;
use crate::types::Position;
use serde::{Deserialize, Serialize};

/// Select a card from the hand by instance id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("select card #{}", card)]
pub struct SelectCard {
    /// Instance id of the card to select.
    pub card: CardId,
}

/// Commit the selected card's move to a destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("commit move to {}", destination)]
pub struct CommitMove {
    /// Square the player moves to.
    pub destination: Position,
}

/// Why an input produced no transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// A committed move is still waiting to be finalized.
    #[display("A move is still resolving")]
    Resolving,

    /// No card with this instance id is in the hand.
    #[display("Card #{} is not in hand", _0)]
    NotInHand(CardId),

    /// A destination was committed with no card selected.
    #[display("No card is selected")]
    NoSelection,

    /// The destination is not one of the highlighted squares.
    #[display("Square {} is not a legal destination", _0)]
    NotHighlighted(Position),

    /// The turn has no actions left.
    #[display("No actions remaining")]
    NoActionsRemaining,

    /// Finalization was requested with no committed move.
    #[display("No move is waiting to be finalized")]
    NothingPending,
}

impl std::error::Error for Rejection {}
