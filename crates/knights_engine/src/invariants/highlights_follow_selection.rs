//! Highlights are derived from the selection and vanish without one.

use super::Invariant;
use crate::state::GameState;

/// Invariant: no squares are highlighted while no card is selected.
pub struct HighlightsFollowSelectionInvariant;

impl Invariant<GameState> for HighlightsFollowSelectionInvariant {
    fn holds(state: &GameState) -> bool {
        state.selected().is_some() || state.highlights().is_empty()
    }

    fn description() -> &'static str {
        "Highlights are empty whenever no card is selected"
    }
}
