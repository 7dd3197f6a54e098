//! Read-only view of a round for presentation and audio

use serde::Serialize;

use super::state::{GameEvent, Round, RoundPhase};
use super::token::{Direction, FrogPhase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrogView {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
    pub phase: FrogPhase,
    /// Ticks left in the current phase (0 when idle)
    pub cooldown: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneView {
    /// Grid row the lane occupies
    pub row: i32,
    /// World x of each car
    pub cars: Vec<f32>,
}

/// Game-over tally (display only; the bonus never feeds back into `score`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverSummary {
    pub score: u64,
    pub time_secs: u64,
    pub time_bonus: u64,
    pub total: u64,
}

/// Everything a renderer or audio layer may read after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: RoundPhase,
    pub lives: u32,
    pub score: u64,
    pub elapsed_ms: u64,
    pub frog: FrogView,
    pub lanes: Vec<LaneView>,
    pub game_over: Option<GameOverSummary>,
    pub events: Vec<GameEvent>,
}

impl Round {
    pub fn snapshot(&self) -> Snapshot {
        let frog = FrogView {
            x: self.frog.x,
            y: self.frog.y,
            facing: self.frog.facing,
            phase: self.frog.phase(),
            cooldown: self.frog.active_cooldown(),
        };

        let lanes = self
            .lanes
            .car_positions()
            .into_iter()
            .zip(1..)
            .map(|(cars, row)| LaneView { row, cars })
            .collect();

        let game_over = self.is_game_over().then(|| GameOverSummary {
            score: self.score,
            time_secs: self.elapsed_ms / 1000,
            time_bonus: self.time_bonus(),
            total: self.total(),
        });

        Snapshot {
            tick: self.tick_count,
            phase: self.phase(),
            lives: self.lives,
            score: self.score,
            elapsed_ms: self.elapsed_ms,
            frog,
            lanes,
            game_over,
            events: self.events.clone(),
        }
    }
}
