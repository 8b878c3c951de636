//! Game state and core simulation types
//!
//! Everything the simulation step reads or writes lives in `GameState`, so a
//! step can be driven without a display or controller attached.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::{Brick, create_bricks};
use super::rect::Rect;
use crate::consts::*;

/// How the start button toggles auto-play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToggleMode {
    /// Toggle once per press (button down now, up on the previous step)
    #[default]
    RisingEdge,
    /// Toggle on every step the button is down, so holding it flickers
    EveryPress,
}

/// Rule knobs that differ between builds of the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub paddle_width: f32,
    pub toggle_mode: ToggleMode,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH_WIDE,
            toggle_mode: ToggleMode::RisingEdge,
        }
    }
}

/// Something that happened during a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Auto-play switched, carrying the new mode
    AutoPlayToggled(bool),
    /// Ball fell below the screen and was put back in the middle
    BallReset,
    /// Ball outside the side walls, horizontal velocity flipped
    WallBounce,
    /// Ball touched the paddle, vertical velocity flipped
    PaddleBounce,
    /// Ball above the top edge, vertical velocity flipped
    CeilingBounce,
    BrickDestroyed { index: usize },
    /// Last brick went down
    FieldCleared,
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub bounds: Rect,
}

impl Paddle {
    /// Paddle at its start position, left edge at the screen center
    pub fn new(width: f32) -> Self {
        Self {
            bounds: Rect::new(
                SCREEN_WIDTH / 2.0,
                SCREEN_HEIGHT - PADDLE_BOTTOM_OFFSET,
                width,
                PADDLE_HEIGHT,
            ),
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub bounds: Rect,
    /// Units per second
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            bounds: Rect::new(
                SCREEN_WIDTH / 2.0 - BALL_SIZE,
                SCREEN_HEIGHT / 2.0 - BALL_SIZE,
                BALL_SIZE,
                BALL_SIZE,
            ),
            vel: Vec2::new(BALL_SPEED, BALL_SPEED),
        }
    }
}

impl Ball {
    /// Where the ball goes back to after falling off the bottom
    pub fn respawn_pos(&self) -> Vec2 {
        Vec2::new(
            SCREEN_WIDTH / 2.0 - self.bounds.w,
            SCREEN_HEIGHT / 2.0 - self.bounds.h,
        )
    }

    /// Put the ball back in the middle and send it the other way horizontally
    ///
    /// Vertical velocity is left untouched.
    pub fn reset(&mut self) {
        let pos = self.respawn_pos();
        self.bounds.x = pos.x;
        self.bounds.y = pos.y;
        self.vel.x = -self.vel.x;
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub rules: Rules,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major brick field, never shrinks
    pub bricks: Vec<Brick>,
    /// Paddle follows the ball
    pub auto_play: bool,
    /// Start button state on the previous step
    pub start_was_held: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl GameState {
    /// Fresh game: full brick field, paddle and ball at their start positions
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            paddle: Paddle::new(rules.paddle_width),
            ball: Ball::default(),
            bricks: create_bricks(),
            auto_play: false,
            start_was_held: false,
        }
    }

    /// Bricks still standing
    pub fn remaining_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining_bricks() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert_eq!(state.paddle.bounds, Rect::new(240.0, 256.0, 36.0, 8.0));
        assert_eq!(state.ball.bounds, Rect::new(232.0, 128.0, 8.0, 8.0));
        assert_eq!(state.ball.vel, Vec2::new(225.0, 225.0));
        assert_eq!(state.remaining_bricks(), BRICK_COUNT);
        assert!(!state.auto_play);
        assert!(!state.is_cleared());
    }

    #[test]
    fn test_narrow_paddle() {
        let state = GameState::new(Rules {
            paddle_width: PADDLE_WIDTH_NARROW,
            ..Default::default()
        });
        assert_eq!(state.paddle.bounds.w, 32.0);
    }

    #[test]
    fn test_ball_reset_keeps_vertical_velocity() {
        let mut ball = Ball::default();
        ball.bounds.x = 100.0;
        ball.bounds.y = 300.0;
        ball.vel = Vec2::new(-225.0, 225.0);
        ball.reset();
        assert_eq!(ball.bounds.pos(), Vec2::new(232.0, 128.0));
        assert_eq!(ball.vel, Vec2::new(225.0, 225.0));
    }

    #[test]
    fn test_cleared() {
        let mut state = GameState::default();
        for brick in &mut state.bricks {
            brick.destroyed = true;
        }
        assert_eq!(state.remaining_bricks(), 0);
        assert!(state.is_cleared());
        // Destroyed bricks stay in the field
        assert_eq!(state.bricks.len(), BRICK_COUNT);
    }
}
