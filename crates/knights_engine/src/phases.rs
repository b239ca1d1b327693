//! Turn phases of the action state machine.

use serde::{Deserialize, Serialize};

/// Where the player is within the current turn.
///
/// ```text
/// AwaitingSelection --select--> AwaitingDestination --commit--> Resolving
///        ^                          |                              |
///        +------clear---------------+                              |
///        +<------------ actions left ------------------------------+
/// TurnEnded <---------- no actions left ---------------------------+
/// TurnEnded --select (fresh turn)--> AwaitingDestination
/// TurnEnded --clear--> AwaitingSelection
/// ```
///
/// Clearing leaves only `Resolving` in place. A fresh turn is keyed on
/// the action count, not the phase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    /// No card selected.
    #[default]
    AwaitingSelection,
    /// A card is selected and its destinations are highlighted.
    AwaitingDestination,
    /// A move was committed and is waiting to be finalized.
    Resolving,
    /// No actions remain; the next selection starts a fresh turn.
    TurnEnded,
}

impl TurnPhase {
    /// Returns true while a committed move is pending.
    pub fn is_resolving(self) -> bool {
        matches!(self, TurnPhase::Resolving)
    }
}
