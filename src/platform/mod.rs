//! Platform abstraction layer
//!
//! Handles the parts of the host the game touches:
//! - Controller buttons (mapped from keyboard input)
//! - The exit signal raised outside the game loop

pub mod exit;
pub mod input;

pub use exit::ExitSignal;
pub use input::{Button, Controller};
