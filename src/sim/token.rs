//! The frog: grid position, facing and its timed sub-states

use serde::{Deserialize, Serialize};

/// Cardinal facing / input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid step for one hop (y grows downward, toward home)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Derived frog state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrogPhase {
    /// Waiting for input
    Idle,
    /// Mid-hop; position already updated
    Jumping,
    /// Squashed, waiting to respawn
    Dying,
    /// Made it home, waiting to respawn
    Celebrating,
}

/// The player-controlled token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frog {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
    /// Ticks before the next hop is accepted
    pub jump_cooldown: u32,
    /// Ticks left in the death animation (0 = alive)
    pub death_cooldown: u32,
    /// Ticks left in the goal pause
    pub score_cooldown: u32,
}

impl Frog {
    /// Fresh frog at `start`, facing up
    pub fn new(start: (i32, i32)) -> Self {
        Self {
            x: start.0,
            y: start.1,
            facing: Direction::Up,
            jump_cooldown: 0,
            death_cooldown: 0,
            score_cooldown: 0,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn phase(&self) -> FrogPhase {
        if self.death_cooldown > 0 {
            FrogPhase::Dying
        } else if self.score_cooldown > 0 {
            FrogPhase::Celebrating
        } else if self.jump_cooldown > 0 {
            FrogPhase::Jumping
        } else {
            FrogPhase::Idle
        }
    }

    /// Cooldown driving the current phase (0 when idle)
    pub fn active_cooldown(&self) -> u32 {
        match self.phase() {
            FrogPhase::Dying => self.death_cooldown,
            FrogPhase::Celebrating => self.score_cooldown,
            FrogPhase::Jumping => self.jump_cooldown,
            FrogPhase::Idle => 0,
        }
    }

    /// Death or goal pause in progress; the frog is frozen
    pub fn is_frozen(&self) -> bool {
        self.death_cooldown > 0 || self.score_cooldown > 0
    }

    pub fn accepts_input(&self) -> bool {
        self.jump_cooldown == 0 && !self.is_frozen()
    }

    /// Try to hop one cell. Facing changes even when the edge blocks the hop.
    /// Returns true if the frog moved.
    pub fn handle_input(&mut self, dir: Direction, width: i32, height: i32, jump_delay: u32) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.facing = dir;

        let (dx, dy) = dir.delta();
        let nx = self.x + dx;
        let ny = self.y + dy;
        if !(0..width).contains(&nx) || !(0..height).contains(&ny) {
            return false;
        }

        self.x = nx;
        self.y = ny;
        self.jump_cooldown = jump_delay;
        true
    }

    /// Squash the frog. No-op while already dying.
    pub fn kill(&mut self, anim_ticks: u32) -> bool {
        if self.death_cooldown > 0 {
            return false;
        }
        self.death_cooldown = anim_ticks;
        self.check_invariants();
        true
    }

    /// Start the goal pause. No-op while already celebrating.
    pub fn celebrate(&mut self, anim_ticks: u32) -> bool {
        if self.score_cooldown > 0 {
            return false;
        }
        self.score_cooldown = anim_ticks;
        self.check_invariants();
        true
    }

    /// Count down cooldowns. Returns true if the frog respawned at `start`.
    pub fn tick(&mut self, start: (i32, i32)) -> bool {
        self.jump_cooldown = self.jump_cooldown.saturating_sub(1);

        let mut respawn = false;
        if self.death_cooldown > 0 {
            self.death_cooldown -= 1;
            respawn |= self.death_cooldown == 0;
        }
        if self.score_cooldown > 0 {
            self.score_cooldown -= 1;
            respawn |= self.score_cooldown == 0;
        }

        if respawn {
            self.facing = Direction::Up;
            self.x = start.0;
            self.y = start.1;
        }
        self.check_invariants();
        respawn
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(
            self.death_cooldown == 0 || self.score_cooldown == 0,
            "frog cannot be dying and celebrating at once"
        );
    }
}
