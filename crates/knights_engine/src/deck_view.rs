//! Read-only projection of every card the player owns, grouped by name.

use crate::card::Card;
use crate::state::GameState;
use crate::zones::Zone;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::instrument;

/// One card in the deck viewer, tagged with the zone it sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckEntry {
    /// The card instance.
    pub card: Card,
    /// Where the card currently is.
    pub zone: Zone,
}

/// Cards from deck, hand, and discard pile grouped by pattern name.
///
/// There is no notion of a "next card" preview; deck order is not exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckView {
    groups: BTreeMap<String, Vec<DeckEntry>>,
}

impl DeckView {
    /// Builds the projection from the current state.
    #[instrument(skip(state), fields(cards = state.zones().len()))]
    pub fn from_state(state: &GameState) -> Self {
        let zones = state.zones();
        let tagged = zones
            .deck()
            .iter()
            .map(|card| (card, Zone::Deck))
            .chain(zones.hand().iter().map(|card| (card, Zone::Hand)))
            .chain(zones.discard().iter().map(|card| (card, Zone::Discard)));

        let mut groups: BTreeMap<String, Vec<DeckEntry>> = BTreeMap::new();
        for (card, zone) in tagged {
            groups
                .entry(card.name().to_string())
                .or_default()
                .push(DeckEntry {
                    card: card.clone(),
                    zone,
                });
        }
        Self { groups }
    }

    /// Returns the groups keyed by card name.
    pub fn groups(&self) -> &BTreeMap<String, Vec<DeckEntry>> {
        &self.groups
    }

    /// Number of cards sharing a name.
    pub fn count(&self, name: &str) -> usize {
        self.groups.get(name).map_or(0, Vec::len)
    }

    /// Number of cards in every group.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
