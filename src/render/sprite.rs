//! Sprite instances for a 2D presentation layer
//!
//! Positions are sprite top-left corners in playfield world units, ready to
//! upload as an instance buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::config::GameConfig;
use crate::sim::{Direction, FrogPhase, Snapshot};

/// Which bitmap to draw
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Car = 0,
    /// Alternate car art, used on every other lane
    CarAlt = 1,
    Frog = 2,
    DeadFrog = 3,
}

/// One sprite to draw
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    /// Clockwise rotation in radians
    pub rotation: f32,
    pub kind: u32,
}

impl SpriteInstance {
    pub fn new(position: Vec2, rotation: f32, kind: SpriteKind) -> Self {
        Self {
            position: position.to_array(),
            rotation,
            kind: kind as u32,
        }
    }

    pub fn kind(&self) -> SpriteKind {
        match self.kind {
            0 => SpriteKind::Car,
            1 => SpriteKind::CarAlt,
            3 => SpriteKind::DeadFrog,
            _ => SpriteKind::Frog,
        }
    }
}

/// Sprite rotation for a facing; the frog art points up
pub fn facing_rotation(facing: Direction) -> f32 {
    match facing {
        Direction::Up => 0.0,
        Direction::Right => FRAC_PI_2,
        Direction::Down => PI,
        Direction::Left => PI + FRAC_PI_2,
    }
}

/// Where the frog is drawn mid-hop: slides from the previous cell into the
/// current one as the jump cooldown runs out.
pub fn frog_draw_offset(facing: Direction, jump_cooldown: u32, jump_delay: u32, cell_size: f32) -> Vec2 {
    if jump_cooldown == 0 || jump_delay == 0 {
        return Vec2::ZERO;
    }
    let t = jump_cooldown as f32 / jump_delay as f32 * cell_size;
    let (dx, dy) = facing.delta();
    Vec2::new(-dx as f32, -dy as f32) * t
}

/// Build the draw list for a snapshot: cars first, frog on top
pub fn sprites(snapshot: &Snapshot, config: &GameConfig) -> Vec<SpriteInstance> {
    let cell = config.cell_size as f32;
    let mut out = Vec::with_capacity(snapshot.lanes.iter().map(|l| l.cars.len()).sum::<usize>() + 1);

    for (i, lane) in snapshot.lanes.iter().enumerate() {
        let kind = if i % 2 == 0 {
            SpriteKind::Car
        } else {
            SpriteKind::CarAlt
        };
        let y = lane.row as f32 * cell;
        out.extend(
            lane.cars
                .iter()
                .map(|&x| SpriteInstance::new(Vec2::new(x, y), 0.0, kind)),
        );
    }

    if snapshot.game_over.is_some() {
        return out;
    }

    let frog = &snapshot.frog;
    let cell_pos = Vec2::new(frog.x as f32, frog.y as f32) * cell;
    let sprite = match frog.phase {
        FrogPhase::Dying => SpriteInstance::new(cell_pos, 0.0, SpriteKind::DeadFrog),
        FrogPhase::Jumping => SpriteInstance::new(
            cell_pos + frog_draw_offset(frog.facing, frog.cooldown, config.jump_delay, cell),
            facing_rotation(frog.facing),
            SpriteKind::Frog,
        ),
        FrogPhase::Idle | FrogPhase::Celebrating => {
            SpriteInstance::new(cell_pos, facing_rotation(frog.facing), SpriteKind::Frog)
        }
    };
    out.push(sprite);
    out
}
