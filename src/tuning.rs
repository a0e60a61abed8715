//! Data-driven game balance
//!
//! Every gameplay constant that was hand-tuned for arcade feel lives here,
//! so a host can reload balance tweaks without touching simulation code.
//! The collision bands and clearance height are deliberately forgiving
//! approximations of the real box geometry; treat them as feel constants,
//! not physics.

use serde::{Deserialize, Serialize};

/// Gameplay balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Runner physics ===
    /// Upward velocity applied when a jump starts (units/tick)
    pub jump_impulse: f32,
    /// Downward acceleration while airborne (units/tick^2)
    pub gravity: f32,
    /// Fraction of the remaining lane offset closed per tick
    pub lateral_smoothing: f32,

    // === Difficulty ramp ===
    /// Scroll speed at the start of a run (units/tick)
    pub base_speed: f32,
    /// Speed gained per tick while running
    pub speed_ramp: f32,
    /// Scroll speed cap
    pub max_speed: f32,

    // === Spawning ===
    /// Per-tick probability of spawning an obstacle
    pub obstacle_rate: f64,
    /// Per-tick probability of spawning a coin
    pub coin_rate: f64,

    // === Collision bands ===
    /// Longitudinal half-band within which an obstacle can strike
    pub obstacle_reach_z: f32,
    /// Lateral distance under which an obstacle strikes
    pub obstacle_reach_x: f32,
    /// Runner height at or above which an obstacle is cleared
    pub clearance_height: f32,
    /// Longitudinal half-band within which a coin can be taken
    pub coin_reach_z: f32,
    /// Lateral distance under which a coin is taken
    pub coin_reach_x: f32,
    /// Vertical distance (about the hover point) under which a coin is taken
    pub coin_reach_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            // Runner physics
            jump_impulse: 0.4,
            gravity: 0.02,
            lateral_smoothing: 0.15,

            // Difficulty ramp
            base_speed: 0.5,
            speed_ramp: 0.0001,
            max_speed: 1.2,

            // Spawning
            obstacle_rate: 0.02,
            coin_rate: 0.03,

            // Collision bands
            obstacle_reach_z: 2.0,
            obstacle_reach_x: 2.0,
            clearance_height: 1.8,
            coin_reach_z: 1.5,
            coin_reach_x: 1.5,
            coin_reach_y: 2.5,
        }
    }
}

impl Tuning {
    /// Parse a balance table from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a balance table, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("Malformed tuning table ({err}); using defaults");
                Self::default()
            }
        }
    }

    /// Serialize the table to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
