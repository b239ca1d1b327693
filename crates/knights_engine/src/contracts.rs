//! Contract-based validation for engine actions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. Preconditions decide whether an
//! input is accepted; postconditions re-check state in debug builds.

use crate::action::{CommitMove, Rejection, SelectCard};
use crate::card::CardId;
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::phases::TurnPhase;
use crate::rules::valid_moves;
use crate::state::GameState;
use crate::types::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no committed move is waiting to be finalized.
pub struct NotResolving;

impl NotResolving {
    /// Rejects while the phase is `Resolving`.
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        if state.phase().is_resolving() {
            Err(Rejection::Resolving)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the turn has at least one action left.
pub struct ActionsAvailable;

impl ActionsAvailable {
    /// Rejects when no actions remain.
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        if state.actions_remaining() == 0 {
            Err(Rejection::NoActionsRemaining)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the card instance is in the hand.
pub struct CardInHand;

impl CardInHand {
    /// Rejects ids that are not in hand, whatever their name.
    #[instrument(skip(state))]
    pub fn check(card: CardId, state: &GameState) -> Result<(), Rejection> {
        match state.zones().hand_card(card) {
            Some(_) => Ok(()),
            None => Err(Rejection::NotInHand(card)),
        }
    }
}

/// Precondition: a card is selected and awaiting a destination.
pub struct AwaitingDestination;

impl AwaitingDestination {
    /// Rejects unless the phase is `AwaitingDestination`.
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        NotResolving::check(state)?;
        if state.phase() != TurnPhase::AwaitingDestination || state.selected().is_none() {
            return Err(Rejection::NoSelection);
        }
        Ok(())
    }
}

/// Precondition: the destination is highlighted.
pub struct SquareHighlighted;

impl SquareHighlighted {
    /// Rejects squares outside the current highlights.
    #[instrument(skip(state))]
    pub fn check(destination: Position, state: &GameState) -> Result<(), Rejection> {
        if state.is_highlighted(destination) {
            Ok(())
        } else {
            Err(Rejection::NotHighlighted(destination))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Action Contracts
// ─────────────────────────────────────────────────────────────

fn invariants_hold(after: &GameState) -> Result<(), Vec<InvariantViolation>> {
    EngineInvariants::check_all(after)
}

/// Contract for card selection.
///
/// Preconditions (checked after any fresh-turn reset):
/// - No move is resolving
/// - Actions remain
/// - The card is in hand
///
/// Postconditions:
/// - Engine invariants hold
/// - Highlights equal the evaluator's result for the selected card
pub struct SelectContract;

impl Contract<GameState, SelectCard> for SelectContract {
    fn pre(state: &GameState, action: &SelectCard) -> Result<(), Rejection> {
        NotResolving::check(state)?;
        ActionsAvailable::check(state)?;
        CardInHand::check(action.card, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        invariants_hold(after)?;
        let Some(card) = after.selected_card() else {
            return Err(vec![InvariantViolation::new("Selected card is in hand")]);
        };
        if valid_moves(Some(after.player()), card, after.board()) != *after.highlights() {
            return Err(vec![InvariantViolation::new(
                "Highlights match the selected card's legal moves",
            )]);
        }
        Ok(())
    }
}

/// Contract for committing a destination.
///
/// Preconditions:
/// - A card is selected and awaiting a destination
/// - The destination is highlighted
/// - Actions remain
///
/// Postconditions:
/// - Engine invariants hold
/// - Highlights are cleared and the phase is `Resolving`
/// - The action count is untouched until finalization
pub struct CommitContract;

impl Contract<GameState, CommitMove> for CommitContract {
    fn pre(state: &GameState, action: &CommitMove) -> Result<(), Rejection> {
        AwaitingDestination::check(state)?;
        SquareHighlighted::check(action.destination, state)?;
        ActionsAvailable::check(state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        invariants_hold(after)?;
        let mut violations = Vec::new();
        if !after.highlights().is_empty() || !after.phase().is_resolving() {
            violations.push(InvariantViolation::new(
                "Commit clears highlights and enters resolution",
            ));
        }
        if after.actions_remaining() != before.actions_remaining() {
            violations.push(InvariantViolation::new("Commit does not spend the action"));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Contract for finalizing a committed move.
///
/// Postconditions:
/// - Engine invariants hold
/// - Exactly one more card sits in the discard pile
/// - Nothing is selected and the phase has left `Resolving`
pub struct FinalizeContract;

impl Contract<GameState, CardId> for FinalizeContract {
    fn pre(state: &GameState, _card: &CardId) -> Result<(), Rejection> {
        if state.phase().is_resolving() {
            Ok(())
        } else {
            Err(Rejection::NothingPending)
        }
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        invariants_hold(after)?;
        let mut violations = Vec::new();
        if after.discard().len() != before.discard().len() + 1 {
            violations.push(InvariantViolation::new(
                "Finalization discards exactly the committed card",
            ));
        }
        if after.selected().is_some() || after.phase().is_resolving() {
            violations.push(InvariantViolation::new(
                "Finalization clears the selection and leaves resolution",
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Logs and, in debug builds, asserts on postcondition failures.
#[instrument(skip(result))]
pub(crate) fn enforce_post(action: &str, result: Result<(), Vec<InvariantViolation>>) {
    if let Err(violations) = result {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(action, violations = %descriptions, "Postcondition failed");
        debug_assert!(false, "Postcondition failed after {action}: {descriptions}");
    }
}
