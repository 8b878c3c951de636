//! Brick field layout
//!
//! The field is generated once per game: 8 rows of 14 bricks, row-major, so
//! brick `row * 14 + column` always sits at the same place.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub bounds: Rect,
    /// Hidden and skipped by collision once set; never cleared
    pub destroyed: bool,
}

impl Brick {
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            destroyed: false,
        }
    }
}

/// Bounds of the brick at a grid cell
pub fn brick_bounds(row: usize, column: usize) -> Rect {
    Rect::new(
        BRICK_LEFT_MARGIN + BRICK_COLUMN_PITCH * column as f32,
        BRICK_TOP + BRICK_ROW_PITCH * row as f32,
        BRICK_WIDTH,
        BRICK_HEIGHT,
    )
}

/// Build the full brick field, all bricks intact
pub fn create_bricks() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_COUNT);
    for row in 0..BRICK_ROWS {
        for column in 0..BRICK_COLUMNS {
            bricks.push(Brick::new(brick_bounds(row, column)));
        }
    }
    bricks
}
