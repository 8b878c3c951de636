//! Software framebuffer
//!
//! An RGBA pixel grid implementing `Canvas`. Used for headless runs and for
//! checking what a frame looks like without a GPU.

use super::canvas::Canvas;
use super::vertex::to_rgba8;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    frames_presented: u64,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; (width * height) as usize],
            frames_presented: 0,
        }
    }

    /// Framebuffer matching the game screen
    pub fn screen() -> Self {
        Self::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Number of pixels with exactly this color
    pub fn count(&self, color: [f32; 4]) -> usize {
        let rgba = to_rgba8(color);
        self.pixels.iter().filter(|&&p| p == rgba).count()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    /// Pixel span covered by `[start, start + len)`, clipped to `0..limit`
    fn span(start: f32, len: f32, limit: u32) -> std::ops::Range<u32> {
        let lo = start.round().clamp(0.0, limit as f32) as u32;
        let hi = (start + len).round().clamp(0.0, limit as f32) as u32;
        lo..hi.max(lo)
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(to_rgba8(color));
    }

    fn fill_rect(&mut self, rect: &Rect, color: [f32; 4]) {
        let rgba = to_rgba8(color);
        let xs = Self::span(rect.x, rect.w, self.width);
        for y in Self::span(rect.y, rect.h, self.height) {
            let row = (y * self.width) as usize;
            self.pixels[row + xs.start as usize..row + xs.end as usize].fill(rgba);
        }
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_fill_rect() {
        let mut fb = Framebuffer::screen();
        fb.clear(colors::BACKGROUND);
        fb.fill_rect(&Rect::new(2.0, 20.0, 32.0, 8.0), colors::BRICK);

        assert_eq!(fb.count(colors::BRICK), 32 * 8);
        assert_eq!(fb.pixel(2, 20), Some([0, 255, 255, 255]));
        assert_eq!(fb.pixel(33, 27), Some([0, 255, 255, 255]));
        assert_eq!(fb.pixel(34, 20), Some([0, 0, 0, 255]));
        assert_eq!(fb.pixel(1, 20), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_clipping() {
        let mut fb = Framebuffer::new(10, 10);
        fb.fill_rect(&Rect::new(-5.0, 8.0, 8.0, 8.0), colors::FOREGROUND);
        // x 0..3, y 8..10
        assert_eq!(fb.count(colors::FOREGROUND), 3 * 2);

        // Entirely off screen
        fb.fill_rect(&Rect::new(20.0, 20.0, 8.0, 8.0), colors::BRICK);
        assert_eq!(fb.count(colors::BRICK), 0);
    }

    #[test]
    fn test_present_counts_frames() {
        let mut fb = Framebuffer::new(4, 4);
        assert_eq!((fb.width(), fb.height()), (4, 4));
        fb.present();
        fb.present();
        assert_eq!(fb.frames_presented(), 2);
        assert_eq!(fb.as_bytes().len(), 4 * 4 * 4);
        assert_eq!(fb.pixel(4, 0), None);
    }
}
