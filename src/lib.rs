//! Lane Dash - an endless three-lane runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (runner physics, spawning, collisions)
//! - `game`: The `Simulation` handle a host drives once per frame
//! - `audio`: Sound-effect routing to an injected backend
//! - `tuning`: Data-driven game balance
//!
//! The crate is headless: rendering and audio playback are external
//! collaborators. A host owns a [`game::Simulation`], forwards player input
//! to its action methods, calls [`game::Simulation::advance`] from its frame
//! callback, and draws from the read accessors afterwards.

pub mod audio;
pub mod game;
pub mod sim;
pub mod tuning;

pub use audio::{AudioSink, NullAudio, Sound};
pub use game::{EventSink, NullEvents, Simulation};
pub use sim::{Entity, EntityKind, GamePhase, RunnerState, SimState, StatsSnapshot};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (nominal 60 Hz frame cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Lane geometry - three lanes indexed -1, 0, 1
    pub const LANE_MIN: i8 = -1;
    pub const LANE_MAX: i8 = 1;
    pub const LANE_WIDTH: f32 = 4.0;

    /// World scrolling - entities spawn far ahead (negative z) and scroll
    /// toward and past the camera (positive z)
    pub const SPAWN_DEPTH: f32 = -150.0;
    pub const ENTITY_CULL_Z: f32 = 10.0;
    pub const SCENERY_RECYCLE_Z: f32 = 20.0;
    pub const SCENERY_HORIZON_Z: f32 = -1000.0;

    /// Scenery strip
    pub const SCENERY_COUNT: usize = 50;
    pub const SCENERY_SIDE_OFFSET: f32 = 10.0;

    /// Obstacle box center height (2x2x2 box resting on the ground)
    pub const OBSTACLE_HEIGHT: f32 = 1.0;
    /// Coins hover slightly above the track
    pub const COIN_HEIGHT: f32 = 1.0;
    /// Render-only coin spin per tick (radians)
    pub const COIN_SPIN_RATE: f32 = 0.05;
}

/// Clamp a lane index to the three-lane track
#[inline]
pub fn clamp_lane(lane: i8) -> i8 {
    lane.clamp(consts::LANE_MIN, consts::LANE_MAX)
}

/// World-space x coordinate of a lane center
#[inline]
pub fn lane_center(lane: i8) -> f32 {
    f32::from(lane) * consts::LANE_WIDTH
}
