//! Game tuning and configuration
//!
//! Every constant the simulation consumes flows through `GameConfig`, so a
//! JSON file can retune a session without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How a frog cell is tested against a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CollisionModel {
    /// Arcade behavior: the frog's leading half-cell against the car's
    /// leading half-cell. Asymmetric on purpose.
    #[default]
    #[serde(rename = "half-cell", alias = "HalfCell", alias = "halfcell", alias = "half")]
    HalfCell,
    /// Symmetric overlap of the full cell span and the full car span
    #[serde(rename = "aabb", alias = "Aabb", alias = "box")]
    Aabb,
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Grid ===
    pub grid_width: i32,
    pub grid_height: i32,
    /// Cell edge length in world units
    pub cell_size: i32,

    // === Traffic ===
    pub cars_per_lane: usize,
    /// World units per tick
    pub speed_min: f32,
    pub speed_range: f32,
    pub space_min: f32,
    pub space_range: f32,
    pub collision: CollisionModel,

    // === Frog ===
    pub lives: u32,
    pub jump_delay: u32,
    pub death_anim_ticks: u32,
    pub celebrate_anim_ticks: u32,

    // === Round ===
    pub reset_debounce_ticks: u32,
    /// Milliseconds credited to the round clock per tick
    pub tick_ms: u32,
    /// Nominal pacing for drivers; the simulation itself never reads a clock
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: GRID_SIZE,

            cars_per_lane: CARS_PER_LANE,
            speed_min: CAR_SPEED_MIN,
            speed_range: CAR_SPEED_RANGE,
            space_min: CAR_SPACE_MIN,
            space_range: CAR_SPACE_RANGE,
            collision: CollisionModel::default(),

            lives: FROGS_NUM,
            jump_delay: FROG_JUMP_DELAY,
            death_anim_ticks: FROG_ANIM_DELAY,
            celebrate_anim_ticks: FROG_ANIM_DELAY,

            reset_debounce_ticks: RESET_DELAY,
            tick_ms: TICK_MS,
            ticks_per_second: FPS,
        }
    }
}

impl GameConfig {
    /// Number of obstacle lanes (every row except goal and home)
    pub fn lanes(&self) -> usize {
        (self.grid_height - 2).max(0) as usize
    }

    /// Row the frog starts on and respawns to
    pub fn home_row(&self) -> i32 {
        self.grid_height - 1
    }

    /// Frog spawn cell: bottom row, horizontally centered
    pub fn start_position(&self) -> (i32, i32) {
        (self.grid_width / 2, self.home_row())
    }

    /// Playfield size in world units
    pub fn world_size(&self) -> (f32, f32) {
        (
            (self.grid_width * self.cell_size) as f32,
            (self.grid_height * self.cell_size) as f32,
        )
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.grid_width < 1 {
            return invalid("grid_width must be at least 1");
        }
        if self.grid_height < 3 {
            return invalid("grid_height must leave room for goal, lane and home rows");
        }
        if self.cell_size < 2 {
            return invalid("cell_size must be at least 2");
        }
        if self.cars_per_lane == 0 {
            return invalid("cars_per_lane must be positive");
        }
        if self.speed_min <= 0.0 || self.speed_range < 0.0 {
            return invalid("car speed must be positive");
        }
        if self.speed_min + self.speed_range >= self.cell_size as f32 {
            return invalid("cars must move less than one cell per tick");
        }
        if self.space_min <= self.cell_size as f32 || self.space_range < 0.0 {
            return invalid("car spacing must exceed cell_size");
        }
        if self.lives == 0 {
            return invalid("lives must be positive");
        }
        if self.death_anim_ticks == 0 || self.celebrate_anim_ticks == 0 {
            return invalid("animation cooldowns must be at least one tick");
        }
        if self.tick_ms == 0 || self.ticks_per_second == 0 {
            return invalid("tick timing must be positive");
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load a config, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
