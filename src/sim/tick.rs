//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one notional frame. Step order is
//! load-bearing: runner physics first, then collision against each entity's
//! pre-translation pose, then translation and culling, so a tick's stats
//! always describe a fully settled world.

use rand_pcg::Pcg32;

use super::collision::{coin_within_reach, obstacle_strikes_runner};
use super::spawn::roll_spawns;
use super::state::{GamePhase, SimState};
use crate::audio::{AudioSink, Sound};
use crate::consts::*;
use crate::game::EventSink;
use crate::tuning::Tuning;

/// Advance the simulation by one fixed timestep
///
/// Does nothing unless the phase is `Running`. On a crash the tick ends
/// immediately after reporting game over; the stats callback is skipped for
/// that tick and every tick after it until a restart.
pub fn tick(
    state: &mut SimState,
    rng: &mut Pcg32,
    tuning: &Tuning,
    audio: &mut dyn AudioSink,
    events: &mut dyn EventSink,
) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Runner physics; collision below uses this updated pose
    state.runner.glide_toward_lane(tuning);
    state.runner.integrate_jump(tuning);

    let speed = state.speed;
    let runner_x = state.runner.lateral_pos;
    let runner_y = state.runner.vertical_pos;

    // Scenery scrolls forever: segments passing the camera teleport back to
    // the horizon instead of being destroyed
    for segment in &mut state.scenery {
        segment.pos.z += speed;
        if segment.pos.z > SCENERY_RECYCLE_Z {
            segment.pos.z = SCENERY_HORIZON_Z;
        }
    }

    roll_spawns(state, rng, tuning);

    // Obstacles: check against the pre-translation pose, then scroll
    for obstacle in &state.obstacles {
        if obstacle_strikes_runner(obstacle.pos, runner_x, runner_y, tuning) {
            audio.play(Sound::Crash);
            state.phase = GamePhase::GameOver;
            log::info!(
                "run over: score {} distance {:.0} after {} ticks",
                state.score,
                state.distance,
                state.time_ticks
            );
            events.on_game_over(state.score);
            return;
        }
    }
    for obstacle in &mut state.obstacles {
        obstacle.pos.z += speed;
    }
    state.obstacles.retain(|o| o.pos.z <= ENTITY_CULL_Z);

    // Coins: consume in place so a lingering overlap can't double-count
    let mut collected = 0u32;
    state.coins.retain(|coin| {
        if coin_within_reach(coin.pos, runner_x, runner_y, tuning) {
            collected += 1;
            false
        } else {
            true
        }
    });
    for _ in 0..collected {
        audio.play(Sound::Coin);
    }
    state.score += collected;
    for coin in &mut state.coins {
        coin.pos.z += speed;
        coin.spin += COIN_SPIN_RATE;
    }
    state.coins.retain(|c| c.pos.z <= ENTITY_CULL_Z);

    // Distance accrues at this tick's speed; the ramp lands afterwards so
    // the total stays the exact sum of per-tick speeds
    state.distance += state.speed;
    state.speed = (state.speed + tuning.speed_ramp).min(tuning.max_speed);

    events.on_stats(state.stats());
}
