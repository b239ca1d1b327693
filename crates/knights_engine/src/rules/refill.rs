//! Hand refill after a card is consumed.

use crate::card::CardId;
use crate::config::RefillPolicy;
use crate::zones::Zones;
use tracing::{debug, instrument};

/// Draws cards from the deck into the hand according to `policy`.
///
/// An empty deck simply stops the draw; the discard pile is never
/// recycled. Returns the ids drawn, in draw order.
#[instrument(skip(zones))]
pub fn refill(zones: &mut Zones, policy: RefillPolicy, hand_size: usize) -> Vec<CardId> {
    let mut drawn = Vec::new();
    match policy {
        RefillPolicy::None => {}
        RefillPolicy::DrawOne => drawn.extend(zones.draw()),
        RefillPolicy::DrawToSize => {
            while zones.hand().len() < hand_size {
                match zones.draw() {
                    Some(id) => drawn.push(id),
                    None => break,
                }
            }
        }
    }
    debug!(drawn = drawn.len(), hand = zones.hand().len(), "Refill complete");
    drawn
}
