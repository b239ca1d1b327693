//! Move resolution: everything that happens after a destination is committed.
//!
//! Resolution runs in two phases. The commit phase (in
//! [`Engine::commit_move`](crate::Engine::commit_move)) moves the player at
//! once so the renderer can animate. The finalize phase below runs the
//! remaining steps in a fixed order:
//!
//! 1. capture the enemy on the destination, if any
//! 2. move the card from hand to discard, then refill the hand
//! 3. [`HookPoint::AfterConsume`] upgrades (reverse)
//! 4. [`HookPoint::Final`] upgrades (armor)
//! 5. clear the selection
//! 6. spend the action, applying [`HookPoint::EndAction`] upgrades (stamina),
//!    then settle the turn phase
//!
//! Each step is a no-op when its subject is missing; the pipeline never
//! stops partway.

use crate::card::{Card, CardId};
use crate::config::EngineConfig;
use crate::phases::TurnPhase;
use crate::rules::refill;
use crate::state::GameState;
use crate::types::Position;
use crate::upgrade::{HookPoint, Upgrade};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// A committed move waiting to be finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    /// Square the player moved from.
    pub origin: Position,
    /// Square the player moved to.
    pub destination: Position,
    /// Instance id of the committed card.
    pub card: CardId,
    /// Upgrades the card carried at commit time.
    pub upgrades: Vec<Upgrade>,
    /// How long the host should wait before finalizing.
    pub settle: Duration,
}

impl PendingResolution {
    /// Captures what finalization needs to know about a committed card.
    pub fn new(origin: Position, destination: Position, card: &Card, settle: Duration) -> Self {
        Self {
            origin,
            destination,
            card: card.id(),
            upgrades: card.upgrades().to_vec(),
            settle,
        }
    }

    fn upgrades_at(&self, hook: HookPoint) -> impl Iterator<Item = Upgrade> + '_ {
        self.upgrades.iter().copied().filter(move |u| u.hook() == hook)
    }
}

/// What a finalized move did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Square of the captured enemy.
    pub captured: Option<Position>,
    /// Whether the card reached the discard pile.
    pub discarded: bool,
    /// Cards drawn by the refill policy.
    pub drawn: Vec<CardId>,
    /// Whether the player was returned to the origin.
    pub reversed: bool,
    /// Armor granted by upgrades.
    pub armor_gained: u32,
    /// Actions refunded by upgrades.
    pub actions_refunded: u32,
    /// Actions left after the move.
    pub actions_remaining: u32,
    /// Phase after the move.
    pub phase: TurnPhase,
}

#[derive(Debug, Default)]
struct Effects {
    reversed: bool,
    armor: u32,
    refund: u32,
}

/// Applies one upgrade's effect.
fn apply_upgrade(
    upgrade: Upgrade,
    pending: &PendingResolution,
    state: &mut GameState,
    effects: &mut Effects,
) {
    match upgrade {
        Upgrade::Reverse => {
            state.set_player(pending.origin);
            effects.reversed = true;
            info!(origin = %pending.origin, "Reverse upgrade returned player to start");
        }
        Upgrade::Armor => {
            state.gain_armor(1);
            effects.armor += 1;
        }
        Upgrade::Stamina => {
            effects.refund += 1;
            debug!("Stamina upgrade refunds the action");
        }
    }
}

/// Runs the finalize phase of a committed move.
#[instrument(skip_all, fields(card_id = %pending.card, destination = %pending.destination))]
pub(crate) fn finalize(
    state: &mut GameState,
    pending: &PendingResolution,
    config: &EngineConfig,
) -> ResolutionReport {
    let mut report = ResolutionReport::default();
    let mut effects = Effects::default();

    if state.capture_at(pending.destination) {
        report.captured = Some(pending.destination);
    }

    report.discarded = state.zones_mut().discard_from_hand(pending.card);
    if report.discarded {
        report.drawn = refill(state.zones_mut(), *config.refill(), *config.hand_size());
    } else {
        debug!("Committed card already left the hand");
    }

    for hook in [HookPoint::AfterConsume, HookPoint::Final] {
        for upgrade in pending.upgrades_at(hook) {
            apply_upgrade(upgrade, pending, state, &mut effects);
        }
    }

    state.clear_selection();

    for upgrade in pending.upgrades_at(HookPoint::EndAction) {
        apply_upgrade(upgrade, pending, state, &mut effects);
    }
    state.spend_action(effects.refund);
    let phase = state.settle_turn();

    report.reversed = effects.reversed;
    report.armor_gained = effects.armor;
    report.actions_refunded = effects.refund;
    report.actions_remaining = state.actions_remaining();
    report.phase = phase;
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::MovementPattern;
    use crate::types::{BoardSize, Offset};
    use crate::zones::Zones;

    fn setup(upgrades: &[Upgrade]) -> (GameState, PendingResolution) {
        let card = Card::new(
            CardId::from(1),
            "Hook",
            MovementPattern::Offsets(vec![Offset::new(1, -2)]),
            upgrades.iter().copied(),
        );
        let mut zones = Zones::from_deck([card.clone()]);
        zones.draw();
        let mut state = GameState::new(
            BoardSize::STANDARD,
            Position::new(2, 2),
            [Position::new(3, 0)].into(),
            zones,
            1,
        );
        let pending =
            PendingResolution::new(Position::new(2, 2), Position::new(3, 0), &card, Duration::ZERO);
        state.begin_resolving(pending.destination);
        (state, pending)
    }

    #[test]
    fn test_plain_finalize() {
        let (mut state, pending) = setup(&[]);
        let report = finalize(&mut state, &pending, &EngineConfig::default());
        assert_eq!(report.captured, Some(Position::new(3, 0)));
        assert!(report.discarded);
        assert!(!report.reversed);
        assert_eq!(state.player(), Position::new(3, 0));
        assert_eq!(state.phase(), TurnPhase::TurnEnded);
    }

    #[test]
    fn test_reverse_then_armor() {
        let (mut state, pending) = setup(&[Upgrade::Armor, Upgrade::Reverse]);
        let report = finalize(&mut state, &pending, &EngineConfig::default());
        assert!(report.reversed);
        assert_eq!(report.armor_gained, 1);
        assert_eq!(state.player(), Position::new(2, 2));
        assert!(state.enemies().is_empty());
    }

    #[test]
    fn test_missing_card_still_spends_action() {
        let (mut state, pending) = setup(&[]);
        state.zones_mut().discard_from_hand(pending.card);
        let report = finalize(&mut state, &pending, &EngineConfig::default());
        assert!(!report.discarded);
        assert_eq!(state.actions_remaining(), 0);
        assert_eq!(state.discard().len(), 1);
    }
}
