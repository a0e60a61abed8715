//! Collision detection between the runner and scrolling entities
//!
//! All checks are axis-aligned proximity bands, evaluated against the
//! runner's post-physics pose for the tick and the entity's pose before it
//! is translated for the next tick. The bands are wider or narrower than
//! the drawn geometry on purpose: gameplay forgiveness beats exact AABB
//! overlap here.

use glam::Vec3;

use crate::tuning::Tuning;

/// True if an obstacle at `pos` strikes a runner at (`runner_x`,
/// `runner_y`)
///
/// An obstacle can only strike once its z has scrolled into the band around
/// the runner's depth, the lateral gap is inside the strike width, and the
/// runner has not jumped above the clearance height.
pub fn obstacle_strikes_runner(pos: Vec3, runner_x: f32, runner_y: f32, tuning: &Tuning) -> bool {
    pos.z.abs() <= tuning.obstacle_reach_z
        && (pos.x - runner_x).abs() < tuning.obstacle_reach_x
        && runner_y < tuning.clearance_height
}

/// True if a coin at `pos` is within the runner's reach
///
/// Coins hover above the track, so the vertical band is measured about a
/// point one unit above the runner's feet.
pub fn coin_within_reach(pos: Vec3, runner_x: f32, runner_y: f32, tuning: &Tuning) -> bool {
    pos.z.abs() <= tuning.coin_reach_z
        && (pos.x - runner_x).abs() < tuning.coin_reach_x
        && (pos.y - runner_y - 1.0).abs() < tuning.coin_reach_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_strike_same_lane_grounded() {
        let tuning = Tuning::default();
        let pos = Vec3::new(0.0, 1.0, 0.0);
        assert!(obstacle_strikes_runner(pos, 0.0, 0.0, &tuning));
    }

    #[test]
    fn test_obstacle_miss_outside_depth_band() {
        let tuning = Tuning::default();
        // Still far up the track
        let pos = Vec3::new(0.0, 1.0, -50.0);
        assert!(!obstacle_strikes_runner(pos, 0.0, 0.0, &tuning));
        // Already behind the runner
        let pos = Vec3::new(0.0, 1.0, 5.0);
        assert!(!obstacle_strikes_runner(pos, 0.0, 0.0, &tuning));
    }

    #[test]
    fn test_obstacle_miss_adjacent_lane() {
        let tuning = Tuning::default();
        // Obstacle on lane 1 (x = 4), runner centered on lane 0
        let pos = Vec3::new(4.0, 1.0, 0.0);
        assert!(!obstacle_strikes_runner(pos, 0.0, 0.0, &tuning));
    }

    #[test]
    fn test_obstacle_cleared_by_jump() {
        let tuning = Tuning::default();
        let pos = Vec3::new(0.0, 1.0, 0.0);
        assert!(!obstacle_strikes_runner(pos, 0.0, tuning.clearance_height, &tuning));
        // Just below the threshold still counts as a hit
        assert!(obstacle_strikes_runner(
            pos,
            0.0,
            tuning.clearance_height - 0.01,
            &tuning
        ));
    }

    #[test]
    fn test_obstacle_strike_mid_lane_change() {
        let tuning = Tuning::default();
        // Runner sliding between lanes is still hittable while inside the band
        let pos = Vec3::new(4.0, 1.0, 0.0);
        assert!(obstacle_strikes_runner(pos, 2.5, 0.0, &tuning));
    }

    #[test]
    fn test_coin_reach_hovering() {
        let tuning = Tuning::default();
        let pos = Vec3::new(0.0, 1.0, 0.0);
        assert!(coin_within_reach(pos, 0.0, 0.0, &tuning));
        // Reachable mid-jump too: band is generous vertically
        assert!(coin_within_reach(pos, 0.0, 2.0, &tuning));
    }

    #[test]
    fn test_coin_miss_wrong_lane() {
        let tuning = Tuning::default();
        let pos = Vec3::new(-4.0, 1.0, 0.0);
        assert!(!coin_within_reach(pos, 0.0, 0.0, &tuning));
    }

    #[test]
    fn test_coin_band_narrower_than_obstacle_band() {
        let tuning = Tuning::default();
        let pos = Vec3::new(0.0, 1.0, 1.8);
        // Inside the obstacle band but past the coin band
        assert!(pos.z.abs() <= tuning.obstacle_reach_z);
        assert!(!coin_within_reach(pos, 0.0, 0.0, &tuning));
    }
}
