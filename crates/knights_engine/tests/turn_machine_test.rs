//! Tests for the turn/action state machine.

use knights_engine::{
    CardId, CardSpec, Engine, EngineConfig, Layout, MovementPattern, Offset, Position, Rejection,
    TurnPhase, Upgrade,
};
use std::collections::BTreeSet;

fn engine() -> Engine {
    Engine::headless(EngineConfig::default(), &Layout::default()).expect("default layout builds")
}

/// Spends the single starting action with the first hand card.
fn exhaust(engine: &mut Engine) {
    let card = engine.state().hand()[0].id();
    engine.select_card(card).expect("card in hand");
    engine.play(Position::new(5, 3)).expect("legal destination");
    assert_eq!(engine.state().phase(), TurnPhase::TurnEnded);
    assert_eq!(engine.state().actions_remaining(), 0);
}

#[test]
fn test_initial_state() {
    let engine = engine();
    assert_eq!(engine.state().phase(), TurnPhase::AwaitingSelection);
    assert_eq!(engine.state().actions_remaining(), 1);
    assert_eq!(engine.state().turn(), 1);
    assert!(engine.state().selected().is_none());
    assert!(engine.state().highlights().is_empty());
}

#[test]
fn test_select_after_exhaustion_starts_fresh_turn() {
    let mut engine = engine();
    exhaust(&mut engine);

    let card = engine.state().hand()[0].id();
    engine.select_card(card).expect("fresh turn allows selection");
    assert_eq!(engine.state().actions_remaining(), 1);
    assert_eq!(engine.state().turn(), 2);
    assert_eq!(engine.state().phase(), TurnPhase::AwaitingDestination);
}

#[test]
fn test_repeated_fresh_turn_selections_do_not_accumulate() {
    let mut engine = engine();
    exhaust(&mut engine);

    let first = engine.state().hand()[0].id();
    let second = engine.state().hand()[1].id();
    engine.select_card(first).expect("card in hand");
    engine.select_card(second).expect("card in hand");
    engine.select_card(first).expect("card in hand");
    assert_eq!(engine.state().actions_remaining(), 1);
    assert_eq!(engine.state().turn(), 2);
}

#[test]
fn test_unknown_card_after_exhaustion_still_resets() {
    let mut engine = engine();
    exhaust(&mut engine);

    let result = engine.select_card(CardId::from(999));
    assert_eq!(result, Err(Rejection::NotInHand(CardId::from(999))));
    assert_eq!(engine.state().actions_remaining(), 1);
    assert!(engine.state().selected().is_none());
    assert!(engine.state().highlights().is_empty());
}

#[test]
fn test_zero_starting_actions_is_refused() {
    let config = EngineConfig::default().with_starting_actions(0);
    let err = Engine::headless(config, &Layout::default()).expect_err("unplayable config");
    assert!(err.message.contains("Starting actions"));
}

#[test]
fn test_overflowing_offset_is_not_a_destination() {
    let layout = Layout::new(
        Position::new(1, 0),
        vec![],
        vec![CardSpec::new(
            "Leap",
            MovementPattern::Offsets(vec![Offset::new(i32::MAX, 0), Offset::new(1, 0)]),
            [],
        )],
    );
    let mut engine = Engine::headless(EngineConfig::default(), &layout).expect("layout builds");
    let card = engine.state().hand()[0].id();

    engine.select_card(card).expect("card in hand");
    let expected: BTreeSet<Position> = [Position::new(2, 0)].into();
    assert_eq!(*engine.state().highlights(), expected);
}

#[test]
fn test_clear_after_turn_end_awaits_selection() {
    let mut engine = engine();
    exhaust(&mut engine);

    engine.clear_selection();
    assert_eq!(engine.state().phase(), TurnPhase::AwaitingSelection);
    assert_eq!(engine.state().actions_remaining(), 0);

    // The next selection still opens a fresh turn.
    let card = engine.state().hand()[0].id();
    engine.select_card(card).expect("fresh turn allows selection");
    assert_eq!(engine.state().actions_remaining(), 1);
    assert_eq!(engine.state().turn(), 2);
}

#[test]
fn test_select_absent_card_leaves_selection() {
    let mut engine = engine();
    let card = engine.state().hand()[0].id();
    engine.select_card(card).expect("card in hand");
    let highlights = engine.state().highlights().clone();

    let in_deck = engine.state().zones().deck()[0].id();
    assert_eq!(engine.select_card(in_deck), Err(Rejection::NotInHand(in_deck)));
    assert_eq!(engine.state().selected(), Some(card));
    assert_eq!(*engine.state().highlights(), highlights);
}

#[test]
fn test_commit_to_unhighlighted_square_is_inert() {
    let mut engine = engine();
    let card = engine.state().hand()[0].id();
    engine.select_card(card).expect("card in hand");
    let before = engine.state().clone();

    let result = engine.commit_move(Position::new(0, 0));
    assert_eq!(result, Err(Rejection::NotHighlighted(Position::new(0, 0))));
    assert_eq!(*engine.state(), before);
    assert!(engine.pending().is_none());
}

#[test]
fn test_commit_without_selection_is_inert() {
    let mut engine = engine();
    let before = engine.state().clone();
    assert_eq!(
        engine.commit_move(Position::new(5, 3)),
        Err(Rejection::NoSelection)
    );
    assert_eq!(*engine.state(), before);
}

#[test]
fn test_clear_selection_is_idempotent() {
    let mut engine = engine();
    let card = engine.state().hand()[0].id();
    engine.select_card(card).expect("card in hand");

    engine.clear_selection();
    engine.clear_selection();
    assert_eq!(engine.state().phase(), TurnPhase::AwaitingSelection);
    assert!(engine.state().selected().is_none());
    assert!(engine.state().highlights().is_empty());
}

#[test]
fn test_reselect_replaces_highlights() {
    let mut engine = engine();
    let knight = engine.state().hand()[0].id();
    let hook = engine.state().hand()[2].id();

    engine.select_card(knight).expect("card in hand");
    engine.select_card(hook).expect("card in hand");
    assert_eq!(engine.state().selected(), Some(hook));
    let expected: BTreeSet<Position> = [Position::new(6, 2), Position::new(6, 6)].into();
    assert_eq!(*engine.state().highlights(), expected);
}

#[test]
fn test_same_name_cards_selected_independently() {
    let layout = Layout::new(
        Position::new(4, 4),
        vec![],
        vec![
            CardSpec::new("Hop", MovementPattern::Offsets(vec![Offset::new(1, 2)]), []),
            CardSpec::new(
                "Hop",
                MovementPattern::Offsets(vec![Offset::new(1, 2)]),
                [Upgrade::Stamina],
            ),
        ],
    );
    let mut engine = Engine::headless(EngineConfig::default(), &layout).expect("layout builds");
    let plain = engine.state().hand()[0].id();
    let stamina = engine.state().hand()[1].id();
    assert_ne!(plain, stamina);

    engine.select_card(stamina).expect("card in hand");
    engine.play(Position::new(5, 6)).expect("legal destination");

    // Only the stamina instance was consumed; the plain one stays in hand.
    assert_eq!(engine.state().hand().len(), 1);
    assert_eq!(engine.state().hand()[0].id(), plain);
    assert_eq!(engine.state().actions_remaining(), 1);
}

#[test]
fn test_consumed_card_never_returns_to_hand() {
    let mut engine = engine();
    let mut consumed = Vec::new();
    for _ in 0..4 {
        let card = engine.state().hand()[0].id();
        engine.select_card(card).expect("card in hand");
        let Some(dest) = engine.state().highlights().iter().next().copied() else {
            panic!("knight cards always have a destination on 8x8");
        };
        engine.play(dest).expect("legal destination");
        consumed.push(card);
        for id in &consumed {
            assert!(engine.state().hand().iter().all(|c| c.id() != *id));
            assert!(engine.state().discard().iter().any(|c| c.id() == *id));
        }
    }
}
