//! Frog Crossing - a single-screen lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (lanes, frog, collisions, round lifecycle)
//! - `config`: Data-driven game tuning
//! - `render`: Snapshot to sprite/HUD conversion for a presentation layer

pub mod config;
pub mod render;
pub mod sim;

pub use config::{CollisionModel, ConfigError, GameConfig};
pub use sim::{Direction, GameEvent, Round, RoundPhase, Snapshot, TickInput, tick};

/// Default game constants (arcade cabinet values)
pub mod consts {
    /// Nominal simulation rate
    pub const FPS: u32 = 60;
    /// Milliseconds added to the round clock per tick.
    /// Deliberately longer than 1000 / FPS; the clock runs fast.
    pub const TICK_MS: u32 = 20;

    /// Playfield grid
    pub const GRID_WIDTH: i32 = 11;
    pub const GRID_HEIGHT: i32 = 7;
    /// Cell edge length in world units
    pub const GRID_SIZE: i32 = 16;

    pub const CARS_PER_LANE: usize = 4;
    /// Car speed in world units per tick
    pub const CAR_SPEED_MIN: f32 = 20.0 / FPS as f32;
    pub const CAR_SPEED_RANGE: f32 = 40.0 / FPS as f32;
    /// Distance between successive cars in a lane
    pub const CAR_SPACE_MIN: f32 = GRID_SIZE as f32 * 3.0;
    pub const CAR_SPACE_RANGE: f32 = GRID_SIZE as f32 * 3.0;

    pub const FROGS_NUM: u32 = 5;
    /// Points per frog brought home
    pub const GOAL_POINTS: u64 = 100;

    /// Cooldowns, in ticks
    pub const FROG_JUMP_DELAY: u32 = (1000 / FPS) / 2;
    pub const FROG_ANIM_DELAY: u32 = (1000 / FPS) * 2;
    pub const RESET_DELAY: u32 = 20;

    /// Time bonus ceiling in seconds
    pub const TIME_BONUS_MAX: u64 = 120;
}
