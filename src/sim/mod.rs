//! Tick-driven simulation module
//!
//! All gameplay logic lives here:
//! - Fixed tick only; the round clock never reads wall time
//! - Randomness only at lane generation
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod lane;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod token;

pub use lane::{Lane, LaneSet, cell_overlaps_car};
pub use rng::UnitRng;
pub use rules::Outcome;
pub use snapshot::{FrogView, GameOverSummary, LaneView, Snapshot};
pub use state::{GameEvent, Round, RoundPhase};
pub use tick::{TickInput, tick};
pub use token::{Direction, Frog, FrogPhase};
