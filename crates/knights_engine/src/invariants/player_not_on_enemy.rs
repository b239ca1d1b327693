//! The player never shares a square with an enemy once a move has settled.

use super::Invariant;
use crate::state::GameState;

/// Invariant: outside of resolution, no enemy stands on the player's square.
///
/// While a move is resolving the player may stand on an enemy that has not
/// been captured yet; finalization removes it.
pub struct PlayerNotOnEnemyInvariant;

impl Invariant<GameState> for PlayerNotOnEnemyInvariant {
    fn holds(state: &GameState) -> bool {
        state.phase().is_resolving() || !state.enemies().contains(&state.player())
    }

    fn description() -> &'static str {
        "No enemy occupies the player's square at rest"
    }
}
