//! Card-driven movement and turn rules for Knight's Journey.
//!
//! A knight-like piece moves on a square board using a hand of movement
//! cards. This crate holds the rules only; rendering and input live in the
//! host application.
//!
//! # Architecture
//!
//! - **Rules**: pure move evaluation and hand refill ([`rules`])
//! - **Cards**: movement patterns, instance ids, upgrades
//! - **State**: one [`GameState`] record per session
//! - **Engine**: the turn/action state machine and the two-phase
//!   commit/finalize resolution of moves
//! - **Contracts & invariants**: pre/postconditions checked around each action
//!
//! # Example
//!
//! ```
//! use knights_engine::{Engine, EngineConfig, Layout, Position};
//!
//! let mut engine = Engine::headless(EngineConfig::default(), &Layout::default())?;
//! let card = engine.state().hand()[0].id();
//! engine.select_card(card)?;
//! let report = engine.play(Position::new(5, 3))?;
//! assert_eq!(report.captured, Some(Position::new(5, 3)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod card;
mod config;
mod contracts;
mod deck_view;
mod engine;
mod layout;
mod phases;
mod render;
mod resolution;
mod state;
mod types;
mod upgrade;
mod zones;

pub mod invariants;
pub mod rules;

// Crate-level exports - Geometry
pub use types::{BoardSize, Offset, Position};

// Crate-level exports - Cards
pub use card::{Card, CardId, MovementPattern, KNIGHT_OFFSETS};
pub use upgrade::{HookPoint, Upgrade};
pub use zones::{Zone, Zones};

// Crate-level exports - State and configuration
pub use config::{EngineConfig, RefillPolicy, SettleDelays};
pub use layout::{CardSpec, Layout, LayoutError};
pub use phases::TurnPhase;
pub use state::GameState;

// Crate-level exports - Actions and contracts
pub use action::{CommitMove, Rejection, SelectCard};
pub use contracts::{
    ActionsAvailable, AwaitingDestination, CardInHand, CommitContract, Contract,
    FinalizeContract, NotResolving, SelectContract, SquareHighlighted,
};

// Crate-level exports - Engine
pub use deck_view::{DeckEntry, DeckView};
pub use engine::Engine;
pub use render::{NullRenderer, Renderer};
pub use resolution::{PendingResolution, ResolutionReport};
