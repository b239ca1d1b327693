//! Card upgrades and the hook points where they fire during resolution.

use serde::{Deserialize, Serialize};

/// A modifier attached to a card instance.
///
/// The serialized form is the stable upgrade id (`stamina_1`, `reverse_1`,
/// `armor_1`), which is also what [`Upgrade::id`] returns.
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
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Upgrade {
    /// Refunds the action spent on the move.
    #[serde(rename = "stamina_1")]
    #[strum(serialize = "stamina_1")]
    Stamina,
    /// Returns the player to the square the move started from.
    #[serde(rename = "reverse_1")]
    #[strum(serialize = "reverse_1")]
    Reverse,
    /// Grants one point of armor.
    #[serde(rename = "armor_1")]
    #[strum(serialize = "armor_1")]
    Armor,
}

/// Point in the resolution pipeline where an upgrade's effect runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    /// After capture and card consumption.
    AfterConsume,
    /// After every positional effect; the player is at their resting square.
    Final,
    /// Inside end-of-action bookkeeping, after the action is spent.
    EndAction,
}

impl Upgrade {
    /// Returns the stable id used in configuration files.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Returns the hook point this upgrade fires at.
    pub fn hook(self) -> HookPoint {
        match self {
            Upgrade::Reverse => HookPoint::AfterConsume,
            Upgrade::Armor => HookPoint::Final,
            Upgrade::Stamina => HookPoint::EndAction,
        }
    }
}
