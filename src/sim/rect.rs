//! Axis-aligned rectangles in screen space
//!
//! Screen space has its origin at the top-left corner, x to the right and
//! y downward. Coordinates are `f32` so sub-unit motion accumulates across
//! frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Move by an offset
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Corners clockwise from the top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.right(), self.y),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.x, self.bottom()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(2.0, 20.0, 32.0, 8.0);
        assert_eq!(r.right(), 34.0);
        assert_eq!(r.bottom(), 28.0);
        assert_eq!(r.pos(), Vec2::new(2.0, 20.0));
    }

    #[test]
    fn test_translate() {
        let mut r = Rect::new(236.0, 130.0, 8.0, 8.0);
        r.translate(Vec2::new(22.5, 22.5));
        assert!((r.x - 258.5).abs() < 1e-4);
        assert!((r.y - 152.5).abs() < 1e-4);
    }
}
