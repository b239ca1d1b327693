//! Pure game rules.
//!
//! Functions here compute results from state without owning it, so the
//! turn machine and the resolution pipeline can compose them freely.

pub mod moves;
pub mod refill;

pub use moves::valid_moves;
pub use refill::refill;
