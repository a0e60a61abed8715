//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{coin_within_reach, obstacle_strikes_runner};
pub use spawn::{build_scenery, roll_spawns};
pub use state::{Entity, EntityKind, GamePhase, RunnerState, SimState, StatsSnapshot};
pub use tick::tick;
