//! Rendering module
//!
//! Presentation draws through the `Canvas` trait. The wgpu `RenderState`
//! shows frames in a window; `Framebuffer` keeps them in memory.

pub mod canvas;
pub mod draw;
pub mod framebuffer;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::Canvas;
pub use draw::draw;
pub use framebuffer::Framebuffer;
pub use pipeline::{RenderInitError, RenderState};
pub use vertex::{Vertex, colors};
