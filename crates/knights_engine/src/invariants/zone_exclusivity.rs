//! Zone exclusivity invariant: each card instance lives in exactly one zone.

use super::Invariant;
use crate::state::GameState;
use std::collections::HashSet;

/// Invariant: instance ids are unique across deck, hand, and discard pile.
///
/// Because a card value can only be stored once, a duplicated id means the
/// same instance was copied into two zones (or twice into one).
pub struct ZoneExclusivityInvariant;

impl Invariant<GameState> for ZoneExclusivityInvariant {
    fn holds(state: &GameState) -> bool {
        let mut seen = HashSet::new();
        state.zones().all_cards().all(|card| seen.insert(card.id()))
    }

    fn description() -> &'static str {
        "Each card instance occupies exactly one zone"
    }
}
