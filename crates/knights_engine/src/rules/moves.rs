//! Legal destination squares for a card.

use crate::card::Card;
use crate::types::{BoardSize, Position};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns every square the card can reach from `origin`.
///
/// Steps that leave the board, or overflow the coordinate range, are
/// dropped. Occupancy is not consulted:
/// a square holding an enemy is a legal destination (capture by moving
/// onto it). With no origin, that is, no player on the board, the result
/// is empty.
#[instrument(skip(card), fields(card_id = %card.id(), card = card.name()))]
pub fn valid_moves(origin: Option<Position>, card: &Card, board: BoardSize) -> BTreeSet<Position> {
    let Some(origin) = origin else {
        return BTreeSet::new();
    };

    card.pattern()
        .offsets()
        .into_iter()
        .filter_map(|step| origin.checked_offset(step))
        .filter(|dest| board.contains(*dest))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardId, MovementPattern};
    use crate::types::Offset;

    fn card(pattern: MovementPattern) -> Card {
        Card::new(CardId::from(1), "Test", pattern, [])
    }

    #[test]
    fn test_knight_from_center_has_eight() {
        let moves = valid_moves(
            Some(Position::new(4, 4)),
            &card(MovementPattern::Knight),
            BoardSize::STANDARD,
        );
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_knight_from_corner_has_two() {
        let moves = valid_moves(
            Some(Position::new(0, 0)),
            &card(MovementPattern::Knight),
            BoardSize::STANDARD,
        );
        let expected: BTreeSet<_> = [Position::new(1, 2), Position::new(2, 1)].into();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_no_origin_no_moves() {
        let moves = valid_moves(None, &card(MovementPattern::Knight), BoardSize::STANDARD);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_single_offset_pattern() {
        let pattern = MovementPattern::Offsets(vec![Offset::new(1, -2)]);
        let moves = valid_moves(Some(Position::new(2, 2)), &card(pattern), BoardSize::STANDARD);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![Position::new(3, 0)]);
    }

    #[test]
    fn test_every_square_stays_in_bounds_and_moves() {
        let board = BoardSize::new(5);
        let knight = card(MovementPattern::Knight);
        for origin in board.squares() {
            let moves = valid_moves(Some(origin), &knight, board);
            assert!(moves.iter().all(|m| board.contains(*m)));
            assert!(!moves.contains(&origin));
        }
    }

    #[test]
    fn test_overflowing_step_is_dropped() {
        let pattern = MovementPattern::Offsets(vec![Offset::new(i32::MAX, 0), Offset::new(1, 0)]);
        let moves = valid_moves(Some(Position::new(1, 0)), &card(pattern), BoardSize::STANDARD);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![Position::new(2, 0)]);
    }

    #[test]
    fn test_null_step_never_yields_origin() {
        let pattern = MovementPattern::Offsets(vec![Offset::new(0, 0), Offset::new(0, 1)]);
        let origin = Position::new(3, 3);
        let moves = valid_moves(Some(origin), &card(pattern), BoardSize::STANDARD);
        assert!(!moves.contains(&origin));
        assert_eq!(moves.len(), 1);
    }
}
