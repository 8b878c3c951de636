//! Drawing surface abstraction
//!
//! Presentation only ever needs three operations, so the GPU backend and the
//! software framebuffer both sit behind this trait.

use crate::sim::Rect;

pub trait Canvas {
    /// Fill the whole frame with one color
    fn clear(&mut self, color: [f32; 4]);

    /// Fill a screen-space rectangle
    fn fill_rect(&mut self, rect: &Rect, color: [f32; 4]);

    /// Show the finished frame
    fn present(&mut self);
}
