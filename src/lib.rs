//! Handheld Breakout - a single-screen brick breaker for a 480x272 display
//!
//! Core modules:
//! - `sim`: Simulation (rectangles, brick field, per-frame step)
//! - `renderer`: Presentation through the `Canvas` trait (wgpu and software backends)
//! - `platform`: Controller state and the exit signal
//! - `game_loop`: Frame timing and the update/render cycle
//! - `settings`: Rule variants and display preferences

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{FrameClock, GameLoop, LoopStatus};
pub use settings::{Settings, SettingsError, ToggleMode, Variant};

/// Game configuration constants
pub mod consts {
    /// Logical screen size
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 272.0;

    /// Paddle defaults
    pub const PLAYER_SPEED: f32 = 400.0;
    pub const PADDLE_HEIGHT: f32 = 8.0;
    pub const PADDLE_WIDTH_WIDE: f32 = 36.0;
    pub const PADDLE_WIDTH_NARROW: f32 = 32.0;
    /// Distance from the paddle top to the bottom of the screen
    pub const PADDLE_BOTTOM_OFFSET: f32 = 16.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 8.0;
    /// Initial speed on each axis, units per second
    pub const BALL_SPEED: f32 = 225.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 8;
    pub const BRICK_COLUMNS: usize = 14;
    pub const BRICK_COUNT: usize = BRICK_ROWS * BRICK_COLUMNS;
    pub const BRICK_WIDTH: f32 = 32.0;
    pub const BRICK_HEIGHT: f32 = 8.0;
    pub const BRICK_LEFT_MARGIN: f32 = 2.0;
    pub const BRICK_COLUMN_PITCH: f32 = 34.0;
    pub const BRICK_TOP: f32 = 20.0;
    pub const BRICK_ROW_PITCH: f32 = 10.0;
}
