//! Game state and core simulation types
//!
//! Everything that must survive a tick boundary lives here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;
use crate::{clamp_lane, lane_center};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-start or between sessions, waiting for `start`
    Idle,
    /// Active gameplay
    Running,
    /// Run ended by a crash; terminal until restart
    GameOver,
}

/// Entity discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Crashes the runner unless cleared by a jump
    Obstacle,
    /// Consumed for score
    Coin,
    /// Trackside dressing; recycled, never destroyed
    Scenery,
}

/// A transient world object
///
/// Obstacles and coins sit on lane centers; scenery takes free x positions.
/// Positions are world space: x lateral, y up, z along the track with the
/// runner near the origin and the horizon at negative z.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec3,
    /// Coin spin angle for rendering; no gameplay effect
    #[serde(skip)]
    pub spin: f32,
}

impl Entity {
    pub fn new(id: u32, kind: EntityKind, pos: Vec3) -> Self {
        Self {
            id,
            kind,
            pos,
            spin: 0.0,
        }
    }
}

/// The player's runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerState {
    /// Discrete lane index in [-1, 1]
    pub lane: i8,
    /// Continuous lateral position, smoothed toward the lane center
    pub lateral_pos: f32,
    /// Height above the track; never negative
    pub vertical_pos: f32,
    /// Upward velocity while airborne
    pub vertical_vel: f32,
    /// Set by `begin_jump`, cleared on landing
    pub jumping: bool,
}

impl Default for RunnerState {
    fn default() -> Self {
        Self {
            lane: 0,
            lateral_pos: 0.0,
            vertical_pos: 0.0,
            vertical_vel: 0.0,
            jumping: false,
        }
    }
}

impl RunnerState {
    /// Shift lanes by `delta`, clamped to the track edges
    pub fn shift_lane(&mut self, delta: i8) {
        self.lane = clamp_lane(self.lane + delta);
    }

    /// Start a jump arc; returns false if already airborne
    pub fn begin_jump(&mut self, tuning: &Tuning) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        self.vertical_vel = tuning.jump_impulse;
        true
    }

    /// Exponential approach toward the current lane center
    pub fn glide_toward_lane(&mut self, tuning: &Tuning) {
        let target = lane_center(self.lane);
        self.lateral_pos += (target - self.lateral_pos) * tuning.lateral_smoothing;
    }

    /// Integrate the jump arc; clamps to the ground and clears `jumping`
    /// when the runner lands
    pub fn integrate_jump(&mut self, tuning: &Tuning) {
        if !self.jumping {
            return;
        }
        self.vertical_pos += self.vertical_vel;
        self.vertical_vel -= tuning.gravity;
        if self.vertical_pos <= 0.0 {
            self.vertical_pos = 0.0;
            self.vertical_vel = 0.0;
            self.jumping = false;
        }
    }
}

/// Per-tick stats published to the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub score: u32,
    pub speed: f32,
    pub distance: f32,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player runner
    pub runner: RunnerState,
    /// Forward scroll speed, ramping up to the cap while running
    pub speed: f32,
    /// Total distance scrolled this run
    pub distance: f32,
    /// Coins collected this run
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Live obstacles (sorted by id for determinism)
    pub obstacles: Vec<Entity>,
    /// Live coins (sorted by id for determinism)
    pub coins: Vec<Entity>,
    /// Trackside dressing; constant population, recycled in place
    pub scenery: Vec<Entity>,
    /// Next entity ID
    next_id: u32,
}

impl SimState {
    /// Create a fresh state with the given seed, idle and empty
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            runner: RunnerState::default(),
            speed: tuning.base_speed,
            distance: 0.0,
            score: 0,
            time_ticks: 0,
            obstacles: Vec::new(),
            coins: Vec::new(),
            scenery: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reinitialize for a new run: counters to base, runner grounded at
    /// lane 0, obstacles and coins cleared. Scenery is rebuilt by the
    /// caller (it needs the RNG).
    pub fn reset_run(&mut self, tuning: &Tuning) {
        self.phase = GamePhase::Running;
        self.runner = RunnerState::default();
        self.speed = tuning.base_speed;
        self.distance = 0.0;
        self.score = 0;
        self.time_ticks = 0;
        self.obstacles.clear();
        self.coins.clear();
        self.scenery.clear();
    }

    /// Stats for the current tick
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            score: self.score,
            speed: self.speed,
            distance: self.distance,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
