//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Externally ticked with elapsed time; no internal clocks or timers
//! - Seeded RNG only
//! - Stable resolution order (radius descending, then entity ID)
//! - No rendering or platform dependencies

pub mod absorb;
pub mod camera;
pub mod spawn;
pub mod state;
pub mod tick;

pub use camera::ScaleTransition;
pub use state::{Entity, EntityState, GameState, Phase, Player};
pub use tick::tick;
