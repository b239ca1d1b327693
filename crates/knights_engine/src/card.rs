//! Movement cards: patterns, instance ids, and attached upgrades.

use crate::types::Offset;
use crate::upgrade::Upgrade;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Unique id of one physical card instance.
///
/// Stable while the card moves between deck, hand, and discard pile.
/// Several instances may share a name; they never share an id.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    /// Returns the raw id.
    pub fn get(self) -> u32 {
        self.0
    }
}

/// The eight L-shaped knight steps.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(-1, -2),
    Offset::new(-1, 2),
    Offset::new(1, -2),
    Offset::new(1, 2),
    Offset::new(2, -1),
    Offset::new(2, 1),
];

/// Geometric rule a card moves by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    /// All eight knight steps.
    Knight,
    /// An explicit list of relative steps.
    Offsets(Vec<Offset>),
}

impl MovementPattern {
    /// Returns the steps this pattern allows, never including `(0, 0)`.
    pub fn offsets(&self) -> Vec<Offset> {
        match self {
            MovementPattern::Knight => KNIGHT_OFFSETS.to_vec(),
            MovementPattern::Offsets(steps) => {
                steps.iter().copied().filter(|step| !step.is_zero()).collect()
            }
        }
    }
}

/// A card instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    name: String,
    pattern: MovementPattern,
    upgrades: Vec<Upgrade>,
}

impl Card {
    /// Creates a card instance.
    ///
    /// Repeated upgrades collapse to their first occurrence.
    #[instrument(skip_all, fields(card_id = %id, name = %name.as_ref()))]
    pub fn new(
        id: CardId,
        name: impl AsRef<str>,
        pattern: MovementPattern,
        upgrades: impl IntoIterator<Item = Upgrade>,
    ) -> Self {
        let mut unique = Vec::new();
        for upgrade in upgrades {
            if !unique.contains(&upgrade) {
                unique.push(upgrade);
            }
        }
        Self {
            id,
            name: name.as_ref().to_string(),
            pattern,
            upgrades: unique,
        }
    }

    /// Returns the instance id.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the pattern name shared by every instance of this card.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the movement pattern.
    pub fn pattern(&self) -> &MovementPattern {
        &self.pattern
    }

    /// Returns the attached upgrades in attachment order.
    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    /// Checks whether the card carries the given upgrade.
    pub fn has_upgrade(&self, upgrade: Upgrade) -> bool {
        self.upgrades.contains(&upgrade)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.name)?;
        if !self.upgrades.is_empty() {
            let ids: Vec<_> = self.upgrades.iter().map(|u| u.id()).collect();
            write!(f, " [{}]", ids.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_upgrades_collapse() {
        let card = Card::new(
            CardId::from(1),
            "Knight",
            MovementPattern::Knight,
            [Upgrade::Armor, Upgrade::Reverse, Upgrade::Armor],
        );
        assert_eq!(card.upgrades(), &[Upgrade::Armor, Upgrade::Reverse]);
    }

    #[test]
    fn test_offsets_drop_null_step() {
        let pattern = MovementPattern::Offsets(vec![Offset::new(0, 0), Offset::new(1, 2)]);
        assert_eq!(pattern.offsets(), vec![Offset::new(1, 2)]);
    }

    #[test]
    fn test_display_lists_upgrade_ids() {
        let card = Card::new(
            CardId::from(4),
            "Knight",
            MovementPattern::Knight,
            [Upgrade::Stamina],
        );
        assert_eq!(card.to_string(), "#4 Knight [stamina_1]");
    }
}
