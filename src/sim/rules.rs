//! Collision and scoring rules
//!
//! Evaluated once per active tick, after traffic has moved.

use super::lane::LaneSet;
use super::token::Frog;
use crate::config::GameConfig;
use crate::consts::GOAL_POINTS;

/// What the rules decided this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    /// Hit by a car
    Squashed,
    /// Reached the goal row
    ReachedGoal,
}

/// Apply car collision and goal scoring to the frog.
///
/// Both branches cost a life; reaching the goal also awards points.
pub fn apply(
    frog: &mut Frog,
    lanes: &LaneSet,
    lives: &mut u32,
    score: &mut u64,
    config: &GameConfig,
) -> Outcome {
    if *lives == 0 || frog.is_frozen() {
        return Outcome::None;
    }

    let (x, y) = frog.position();
    let on_lane = y > 0 && y < config.home_row();

    if on_lane && lanes.is_occupied((y - 1) as usize, x) {
        frog.kill(config.death_anim_ticks);
        *lives -= 1;
        return Outcome::Squashed;
    }

    if y == 0 {
        frog.celebrate(config.celebrate_anim_ticks);
        *score += GOAL_POINTS;
        *lives -= 1;
        return Outcome::ReachedGoal;
    }

    Outcome::None
}
