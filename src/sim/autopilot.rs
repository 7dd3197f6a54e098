//! Idle/demo mode - a simple frog AI
//!
//! Looks ahead by projecting lane offsets over one hop's worth of ticks and
//! only lands on cells that stay clear that long.

use super::state::Round;
use super::token::Direction;

/// Pick this tick's input for the frog, if any
pub fn choose(round: &Round) -> Option<Direction> {
    if !round.frog.accepts_input() || round.is_game_over() {
        return None;
    }

    let config = round.config();
    // Ticks the frog will sit on its landing cell before it can hop again
    let horizon = config.jump_delay + 1;
    let (x, y) = round.frog.position();

    let safe = |cx: i32, cy: i32| -> bool {
        if !(0..config.grid_width).contains(&cx) || !(0..config.grid_height).contains(&cy) {
            return false;
        }
        if cy == 0 || cy == config.home_row() {
            return true;
        }
        round.lanes.clear_for((cy - 1) as usize, cx, horizon)
    };

    if safe(x, y - 1) {
        return Some(Direction::Up);
    }
    if safe(x, y) {
        return None;
    }

    // Sidestep toward the middle first so the frog doesn't pin itself to a wall
    let toward_center = if x <= config.grid_width / 2 {
        [Direction::Right, Direction::Left]
    } else {
        [Direction::Left, Direction::Right]
    };
    toward_center
        .into_iter()
        .chain([Direction::Down])
        .find(|dir| {
            let (dx, dy) = dir.delta();
            safe(x + dx, y + dy)
        })
}
