//! Collision detection between rectangles
//!
//! Plain AABB overlap. There is no contact normal or penetration depth:
//! the simulation only flips velocity signs and never pushes bodies apart.

use super::rect::Rect;

/// Check whether two rectangles overlap
///
/// Uses strict inequalities on both axes, so rectangles that only share an
/// edge do not collide.
#[inline]
pub fn has_collision(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
