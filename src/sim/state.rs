//! Round state
//!
//! `Round` is the single aggregate the simulation mutates: lives, score, the
//! round clock, the frog and the full lane set.

use serde::{Deserialize, Serialize};

use super::lane::LaneSet;
use super::rng::UnitRng;
use super::token::Frog;
use crate::config::GameConfig;
use crate::consts::TIME_BONUS_MAX;

/// Session-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Frogs remaining, traffic moving
    Active,
    /// Out of frogs; everything frozen until reset
    GameOver,
}

/// Things that happened during the last tick, for audio/presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Frog hopped one cell
    Hop,
    /// Frog turned against the playfield edge
    Bump,
    /// Frog hit by a car
    Squashed,
    /// Frog reached the goal row
    ReachedGoal,
    /// Frog placed back on the home row
    Respawned,
    /// Last frog spent
    GameOver,
    /// Round restarted
    Reset,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct Round {
    config: GameConfig,
    rng: UnitRng,
    /// Frogs left
    pub lives: u32,
    pub score: u64,
    /// Round clock in milliseconds
    pub elapsed_ms: u64,
    /// Ticks before another reset is accepted
    pub reset_cooldown: u32,
    pub frog: Frog,
    pub lanes: LaneSet,
    /// Ticks processed since construction
    pub tick_count: u64,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl Round {
    /// New round with a wall-clock seeded RNG
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, UnitRng::from_time())
    }

    /// New round with a fixed seed
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, UnitRng::seeded(seed))
    }

    /// Callers own validation; `GameConfig::from_json` and `load` already do it
    fn with_rng(config: GameConfig, mut rng: UnitRng) -> Self {
        debug_assert!(config.validate().is_ok(), "round built from an invalid config");
        let lanes = LaneSet::generate(&config, &mut rng);
        Self {
            lives: config.lives,
            score: 0,
            elapsed_ms: 0,
            reset_cooldown: 0,
            frog: Frog::new(config.start_position()),
            lanes,
            tick_count: 0,
            events: Vec::new(),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn phase(&self) -> RoundPhase {
        if self.lives > 0 {
            RoundPhase::Active
        } else {
            RoundPhase::GameOver
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase() == RoundPhase::GameOver
    }

    /// Seconds under the two-minute mark, never negative
    pub fn time_bonus(&self) -> u64 {
        TIME_BONUS_MAX.saturating_sub(self.elapsed_ms / 1000)
    }

    /// Final tally shown on the game-over panel
    pub fn total(&self) -> u64 {
        self.score + self.time_bonus()
    }

    /// Restart the round: fresh counters, fresh traffic, fresh frog
    pub fn reset(&mut self) {
        self.lives = self.config.lives;
        self.score = 0;
        self.elapsed_ms = 0;
        self.lanes = LaneSet::generate(&self.config, &mut self.rng);
        self.frog = Frog::new(self.config.start_position());
        self.reset_cooldown = self.config.reset_debounce_ticks;
        self.events.push(GameEvent::Reset);
        log::info!("Round reset ({} frogs)", self.lives);
    }

    /// Check the invariants in debug builds
    pub(crate) fn check_invariants(&self) {
        debug_assert!(
            (0..self.config.grid_width).contains(&self.frog.x)
                && (0..self.config.grid_height).contains(&self.frog.y),
            "frog left the grid at ({}, {})",
            self.frog.x,
            self.frog.y
        );
        debug_assert!(self.frog.death_cooldown == 0 || self.frog.score_cooldown == 0);
        debug_assert!(self.lives <= self.config.lives);
    }
}
