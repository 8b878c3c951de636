//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - State is an explicit `GameState` value, mutated only by `tick`
//! - Bricks are scanned in index order
//! - Time comes in as a measured delta, never read from a clock here

pub mod bricks;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use bricks::{Brick, brick_bounds, create_bricks};
pub use collision::has_collision;
pub use rect::Rect;
pub use state::{Ball, GameEvent, GameState, Paddle, Rules, ToggleMode};
pub use tick::{TickInput, tick};
