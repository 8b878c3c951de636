//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

/// Convert screen coordinates to normalized device coordinates
///
/// Screen space is the fixed 480x272 playfield with y down; NDC is -1 to 1
/// with y up. The window size never enters here, so a scaled window just
/// stretches the same picture.
#[inline]
pub fn screen_to_ndc(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x / SCREEN_WIDTH * 2.0 - 1.0,
        1.0 - p.y / SCREEN_HEIGHT * 2.0,
    )
}

/// Generate vertices for a filled rectangle (two triangles, screen space)
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let [tl, tr, br, bl] = r.corners();
    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}
