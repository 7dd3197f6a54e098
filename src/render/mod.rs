//! Presentation bridge
//!
//! Turns a `Snapshot` into things a renderer can draw without knowing any
//! game rules: sprite instances and HUD text.

pub mod hud;
pub mod sprite;

pub use hud::{CONTROLS_HINT, hud_lines, status_line};
pub use sprite::{SpriteInstance, SpriteKind, facing_rotation, frog_draw_offset, sprites};
