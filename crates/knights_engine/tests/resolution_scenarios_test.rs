//! End-to-end move resolution scenarios.

use knights_engine::{
    CardSpec, Engine, EngineConfig, Layout, MovementPattern, Offset, Position, RefillPolicy,
    TurnPhase, Upgrade, Zone,
};

fn single_card_engine(
    player: Position,
    enemies: Vec<Position>,
    step: Offset,
    upgrades: &[Upgrade],
) -> Engine {
    let layout = Layout::new(
        player,
        enemies,
        vec![CardSpec::new(
            "Hook",
            MovementPattern::Offsets(vec![step]),
            upgrades.iter().copied(),
        )],
    );
    Engine::headless(EngineConfig::default(), &layout).expect("layout builds")
}

#[test]
fn test_reverse_armor_capture_scenario() {
    let mut engine = single_card_engine(
        Position::new(2, 2),
        vec![Position::new(3, 0)],
        Offset::new(1, -2),
        &[Upgrade::Reverse, Upgrade::Armor],
    );
    let card = engine.state().hand()[0].id();
    let actions_before = engine.state().actions_remaining();

    engine.select_card(card).expect("card in hand");
    assert!(engine.state().is_highlighted(Position::new(3, 0)));

    engine.commit_move(Position::new(3, 0)).expect("legal destination");
    // Player stands on the destination until the move is finalized.
    assert_eq!(engine.state().player(), Position::new(3, 0));
    assert_eq!(engine.state().phase(), TurnPhase::Resolving);
    assert!(engine.state().highlights().is_empty());

    let report = engine.finalize().expect("move pending");
    assert!(report.reversed);
    assert_eq!(report.captured, Some(Position::new(3, 0)));

    let state = engine.state();
    assert_eq!(state.player(), Position::new(2, 2));
    assert!(state.enemies().is_empty());
    assert_eq!(state.zones().zone_of(card), Some(Zone::Discard));
    assert_eq!(state.armor(), 1);
    assert_eq!(state.actions_remaining(), actions_before - 1);
    assert_eq!(state.phase(), TurnPhase::TurnEnded);
}

#[test]
fn test_stamina_refunds_action() {
    let mut engine = single_card_engine(
        Position::new(4, 4),
        vec![],
        Offset::new(2, 1),
        &[Upgrade::Stamina],
    );
    let card = engine.state().hand()[0].id();
    assert_eq!(engine.state().actions_remaining(), 1);

    engine.select_card(card).expect("card in hand");
    engine.play(Position::new(6, 5)).expect("legal destination");

    assert_eq!(engine.state().actions_remaining(), 1);
    assert_eq!(engine.state().phase(), TurnPhase::AwaitingSelection);
}

#[test]
fn test_plain_capture_scenario() {
    let mut engine = single_card_engine(
        Position::new(0, 0),
        vec![Position::new(1, 2)],
        Offset::new(1, 2),
        &[],
    );
    let card = engine.state().hand()[0].id();

    engine.select_card(card).expect("card in hand");
    let report = engine.play(Position::new(1, 2)).expect("legal destination");

    let state = engine.state();
    assert!(!report.reversed);
    assert!(state.enemies().is_empty());
    assert_eq!(state.player(), Position::new(1, 2));
    assert!(state.discard().iter().any(|c| c.id() == card));
    assert!(state.hand().iter().all(|c| c.id() != card));
    assert_eq!(state.armor(), 0);
    assert_eq!(state.actions_remaining(), 0);
    assert_eq!(state.captures(), 1);
}

#[test]
fn test_move_to_empty_square_captures_nothing() {
    let mut engine = single_card_engine(
        Position::new(0, 0),
        vec![Position::new(5, 5)],
        Offset::new(1, 2),
        &[Upgrade::Armor],
    );
    let card = engine.state().hand()[0].id();
    engine.select_card(card).expect("card in hand");
    let report = engine.play(Position::new(1, 2)).expect("legal destination");

    assert_eq!(report.captured, None);
    assert_eq!(report.armor_gained, 1);
    assert_eq!(engine.state().enemies().len(), 1);
}

#[test]
fn test_all_three_upgrades_together() {
    let mut engine = single_card_engine(
        Position::new(2, 2),
        vec![Position::new(3, 0)],
        Offset::new(1, -2),
        &[Upgrade::Stamina, Upgrade::Reverse, Upgrade::Armor],
    );
    let card = engine.state().hand()[0].id();
    engine.select_card(card).expect("card in hand");
    let report = engine.play(Position::new(3, 0)).expect("legal destination");

    assert!(report.reversed);
    assert_eq!(report.armor_gained, 1);
    assert_eq!(report.actions_refunded, 1);
    assert_eq!(engine.state().player(), Position::new(2, 2));
    assert_eq!(engine.state().actions_remaining(), 1);
    assert_eq!(engine.state().phase(), TurnPhase::AwaitingSelection);
}

#[test]
fn test_draw_one_refills_hand() {
    let layout = Layout::default();
    let mut engine = Engine::headless(EngineConfig::default(), &layout).expect("layout builds");
    let hand_before = engine.state().hand().len();
    let deck_before = engine.state().zones().deck().len();
    let card = engine.state().hand()[0].id();

    engine.select_card(card).expect("card in hand");
    let report = engine.play(Position::new(5, 3)).expect("legal destination");

    assert_eq!(report.drawn.len(), 1);
    assert_eq!(engine.state().hand().len(), hand_before);
    assert_eq!(engine.state().zones().deck().len(), deck_before - 1);
    // The replacement is appended to the end of the hand.
    assert_eq!(engine.state().hand().last().map(|c| c.id()), report.drawn.first().copied());
}

#[test]
fn test_no_refill_shrinks_hand() {
    let config = EngineConfig::default().with_refill(RefillPolicy::None);
    let mut engine = Engine::headless(config, &Layout::default()).expect("layout builds");
    let card = engine.state().hand()[0].id();

    engine.select_card(card).expect("card in hand");
    let report = engine.play(Position::new(5, 3)).expect("legal destination");

    assert!(report.drawn.is_empty());
    assert_eq!(engine.state().hand().len(), 2);
    assert_eq!(engine.state().zones().len(), 10);
}

#[test]
fn test_settle_delay_reported_at_commit() {
    let mut engine = single_card_engine(
        Position::new(2, 2),
        vec![],
        Offset::new(1, -2),
        &[Upgrade::Armor],
    );
    let card = engine.state().hand()[0].id();
    engine.select_card(card).expect("card in hand");
    let settle = engine.commit_move(Position::new(3, 0)).expect("legal destination");
    assert_eq!(settle.as_millis(), 30);
    assert_eq!(engine.pending().map(|p| p.settle), Some(settle));
}
