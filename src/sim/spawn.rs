//! Procedural entity spawning
//!
//! Obstacles and coins arrive as independent per-tick Bernoulli trials so
//! spacing stays memoryless; there is no fairness scheduling across lanes.
//! The scenery strip is laid down once per run and recycled by the tick
//! loop instead of being respawned.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Entity, EntityKind, SimState};
use crate::consts::*;
use crate::lane_center;
use crate::tuning::Tuning;

/// Run the per-tick spawn trials
///
/// Each kind rolls independently: at most one obstacle and one coin appear
/// per tick, each on a uniformly random lane at the spawn horizon.
pub fn roll_spawns(state: &mut SimState, rng: &mut Pcg32, tuning: &Tuning) {
    if rng.random_bool(tuning.obstacle_rate) {
        let lane = rng.random_range(LANE_MIN..=LANE_MAX);
        spawn_obstacle(state, lane);
    }
    if rng.random_bool(tuning.coin_rate) {
        let lane = rng.random_range(LANE_MIN..=LANE_MAX);
        spawn_coin(state, lane);
    }
}

/// Spawn one obstacle on `lane` at the spawn horizon
pub fn spawn_obstacle(state: &mut SimState, lane: i8) {
    let id = state.next_entity_id();
    let pos = Vec3::new(lane_center(lane), OBSTACLE_HEIGHT, SPAWN_DEPTH);
    state.obstacles.push(Entity::new(id, EntityKind::Obstacle, pos));
    log::debug!("obstacle {id} spawned on lane {lane}");
}

/// Spawn one coin on `lane` at the spawn horizon
pub fn spawn_coin(state: &mut SimState, lane: i8) {
    let id = state.next_entity_id();
    let pos = Vec3::new(lane_center(lane), COIN_HEIGHT, SPAWN_DEPTH);
    state.coins.push(Entity::new(id, EntityKind::Coin, pos));
    log::debug!("coin {id} spawned on lane {lane}");
}

/// Lay down the trackside scenery strip for a fresh run
///
/// Segments alternate sides of the track with seeded lateral jitter and are
/// spaced evenly from just behind the camera out to the recycle horizon, so
/// the world is populated before the first tick scrolls it.
pub fn build_scenery(state: &mut SimState, rng: &mut Pcg32) {
    debug_assert!(state.scenery.is_empty());

    let span = SCENERY_RECYCLE_Z - SCENERY_HORIZON_Z;
    let spacing = span / SCENERY_COUNT as f32;

    for i in 0..SCENERY_COUNT {
        let side = if i % 2 == 0 { -1.0 } else { 1.0 };
        let jitter: f32 = rng.random_range(0.0..6.0);
        let x = side * (SCENERY_SIDE_OFFSET + jitter);
        let z = SCENERY_RECYCLE_Z - spacing * i as f32;
        let id = state.next_entity_id();
        state
            .scenery
            .push(Entity::new(id, EntityKind::Scenery, Vec3::new(x, 0.0, z)));
    }
}
