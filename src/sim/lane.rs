//! Traffic lanes
//!
//! Each obstacle row carries an evenly spaced train of cars. The train is
//! described by a single scalar `offset`: car `k` sits at
//! `offset + k * spacing`. Advancing a lane slides the train right and, once
//! the first car has moved a full gap minus one cell, pulls the whole train
//! back by one gap so the pattern repeats without ever running out of cars.

use serde::{Deserialize, Serialize};

use super::rng::UnitRng;
use crate::config::{CollisionModel, GameConfig};

/// A single obstacle lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    /// World units per tick (always positive)
    pub speed: f32,
    /// Gap between successive cars
    pub spacing: f32,
    /// World x of the first car
    pub offset: f32,
}

impl Lane {
    pub fn new(speed: f32, spacing: f32, offset: f32) -> Self {
        debug_assert!(speed > 0.0 && spacing > 0.0);
        Self {
            speed,
            spacing,
            offset,
        }
    }

    /// Draw a lane from the configured ranges
    pub fn random(config: &GameConfig, rng: &mut UnitRng) -> Self {
        let speed = config.speed_min + config.speed_range * rng.uniform_unit();
        let spacing = config.space_min + config.space_range * rng.uniform_unit();
        let offset = spacing * rng.uniform_unit();
        Self::new(speed, spacing, offset)
    }

    /// Slide the car train one tick
    pub fn advance(&mut self, cell_size: f32) {
        self.offset = Self::step(self.offset, self.speed, self.spacing, cell_size);
        debug_assert!(self.offset < self.spacing, "lane offset escaped its period");
    }

    #[inline]
    fn step(offset: f32, speed: f32, spacing: f32, cell_size: f32) -> f32 {
        let offset = offset + speed;
        if offset >= spacing - cell_size {
            offset - spacing
        } else {
            offset
        }
    }

    /// World x of each car in the lane
    pub fn car_positions(&self, cars: usize) -> Vec<f32> {
        Self::positions_at(self.offset, self.spacing, cars).collect()
    }

    fn positions_at(offset: f32, spacing: f32, cars: usize) -> impl Iterator<Item = f32> {
        (0..cars).map(move |k| offset + spacing * k as f32)
    }

    /// Whether any car covers `cell_x` when the train sits at `offset`
    pub fn hits_at(
        &self,
        offset: f32,
        cell_x: i32,
        cars: usize,
        cell_size: i32,
        model: CollisionModel,
    ) -> bool {
        Self::positions_at(offset, self.spacing, cars)
            .any(|car_x| cell_overlaps_car(cell_x, car_x, cell_size, model))
    }
}

/// Test one grid cell against one car
pub fn cell_overlaps_car(cell_x: i32, car_x: f32, cell_size: i32, model: CollisionModel) -> bool {
    let left = (cell_x * cell_size) as f32;
    match model {
        CollisionModel::HalfCell => {
            let half = (cell_size / 2) as f32;
            left + half >= car_x && left <= car_x + half
        }
        CollisionModel::Aabb => {
            let size = cell_size as f32;
            left < car_x + size && car_x < left + size
        }
    }
}

/// The full set of lanes for a round, replaced wholesale on reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneSet {
    lanes: Vec<Lane>,
    cars_per_lane: usize,
    cell_size: i32,
    collision: CollisionModel,
}

impl LaneSet {
    /// Generate one randomized lane per obstacle row
    pub fn generate(config: &GameConfig, rng: &mut UnitRng) -> Self {
        let lanes = (0..config.lanes())
            .map(|_| Lane::random(config, rng))
            .collect();
        Self::from_lanes(lanes, config)
    }

    /// Build from explicit lanes (scripted scenarios, tests)
    pub fn from_lanes(lanes: Vec<Lane>, config: &GameConfig) -> Self {
        Self {
            lanes,
            cars_per_lane: config.cars_per_lane,
            cell_size: config.cell_size,
            collision: config.collision,
        }
    }

    /// Move every lane; traffic never waits for the frog
    pub fn advance(&mut self) {
        let cell_size = self.cell_size as f32;
        for lane in &mut self.lanes {
            lane.advance(cell_size);
        }
    }

    /// Whether a car covers `cell_x` in lane `lane_index` right now.
    /// Out-of-range lanes are never occupied.
    pub fn is_occupied(&self, lane_index: usize, cell_x: i32) -> bool {
        self.lanes.get(lane_index).is_some_and(|lane| {
            lane.hits_at(
                lane.offset,
                cell_x,
                self.cars_per_lane,
                self.cell_size,
                self.collision,
            )
        })
    }

    /// Whether `cell_x` in `lane_index` is clear for each of the next `ticks`
    /// ticks (inclusive of now). Used by the autopilot.
    pub fn clear_for(&self, lane_index: usize, cell_x: i32, ticks: u32) -> bool {
        let Some(lane) = self.lanes.get(lane_index) else {
            return true;
        };
        let cell_size = self.cell_size as f32;
        let mut offset = lane.offset;
        for _ in 0..=ticks {
            if lane.hits_at(offset, cell_x, self.cars_per_lane, self.cell_size, self.collision) {
                return false;
            }
            offset = Lane::step(offset, lane.speed, lane.spacing, cell_size);
        }
        true
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Car positions per lane, top lane first
    pub fn car_positions(&self) -> Vec<Vec<f32>> {
        self.lanes
            .iter()
            .map(|lane| lane.car_positions(self.cars_per_lane))
            .collect()
    }
}
