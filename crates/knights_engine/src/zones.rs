//! The three card zones: deck, hand, and discard pile.

use crate::card::{Card, CardId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Which zone a card instance currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Zone {
    /// Not yet drawn.
    Deck,
    /// Available for selection.
    Hand,
    /// Spent.
    Discard,
}

/// Card storage for one session.
///
/// Every card instance sits in exactly one zone. Cards only change zone
/// through [`Zones::draw`] and [`Zones::discard_from_hand`], both of which
/// remove before they insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zones {
    deck: VecDeque<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
}

impl Zones {
    /// Creates zones with every card in the deck, in the given order.
    pub fn from_deck(deck: impl IntoIterator<Item = Card>) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            hand: Vec::new(),
            discard: Vec::new(),
        }
    }

    /// Cards not yet drawn; the front is drawn next.
    pub fn deck(&self) -> &VecDeque<Card> {
        &self.deck
    }

    /// Cards available for selection.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Spent cards, oldest first.
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Looks up a card in the hand by instance id.
    pub fn hand_card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|card| card.id() == id)
    }

    /// Returns the zone holding the given instance.
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        if self.hand.iter().any(|c| c.id() == id) {
            Some(Zone::Hand)
        } else if self.deck.iter().any(|c| c.id() == id) {
            Some(Zone::Deck)
        } else if self.discard.iter().any(|c| c.id() == id) {
            Some(Zone::Discard)
        } else {
            None
        }
    }

    /// Iterates every card: deck, then hand, then discard pile.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter().chain(self.hand.iter()).chain(self.discard.iter())
    }

    /// Total number of card instances across all zones.
    pub fn len(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Returns true if no cards exist in any zone.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draws the front card of the deck into the end of the hand.
    ///
    /// Returns the drawn id, or `None` if the deck is empty.
    #[instrument(skip(self), fields(deck = self.deck.len(), hand = self.hand.len()))]
    pub(crate) fn draw(&mut self) -> Option<CardId> {
        let card = self.deck.pop_front()?;
        let id = card.id();
        self.hand.push(card);
        debug!(card_id = %id, "Drew card");
        Some(id)
    }

    /// Moves a card from the hand to the top of the discard pile.
    ///
    /// Returns false, leaving every zone untouched, if the card is not in hand.
    #[instrument(skip(self))]
    pub(crate) fn discard_from_hand(&mut self, id: CardId) -> bool {
        let Some(index) = self.hand.iter().position(|card| card.id() == id) else {
            debug!("Card not in hand, nothing to discard");
            return false;
        };
        let card = self.hand.remove(index);
        self.discard.push(card);
        true
    }
}
