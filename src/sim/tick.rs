//! Per-frame simulation step
//!
//! The order of the checks matters: the ball is tested against the floor,
//! walls, paddle/ceiling and bricks using its position from the previous
//! frame, and only then integrated. Collisions flip velocity signs and never
//! move the ball out of an overlap, so a slow ball can stay in contact for
//! several frames.

use super::collision::has_collision;
use super::state::{GameEvent, GameState, ToggleMode};
use crate::consts::*;

/// Controller snapshot for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Auto-play toggle button
    pub start: bool,
}

/// Advance the game by `dt` seconds
///
/// Returns what happened during the step, in the order it happened.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let toggle = match state.rules.toggle_mode {
        ToggleMode::RisingEdge => input.start && !state.start_was_held,
        ToggleMode::EveryPress => input.start,
    };
    state.start_was_held = input.start;
    if toggle {
        state.auto_play = !state.auto_play;
        events.push(GameEvent::AutoPlayToggled(state.auto_play));
    }

    move_paddle(state, input, dt);

    let ball = &mut state.ball;

    // Fell past the paddle
    if ball.bounds.y > SCREEN_HEIGHT + ball.bounds.h {
        ball.reset();
        events.push(GameEvent::BallReset);
    }

    // No clamp: the ball may sit outside the wall for one more frame
    if ball.bounds.x < 0.0 || ball.bounds.x > SCREEN_WIDTH - ball.bounds.w {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }

    let hit_paddle = has_collision(&state.paddle.bounds, &ball.bounds);
    if hit_paddle || ball.bounds.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.push(if hit_paddle {
            GameEvent::PaddleBounce
        } else {
            GameEvent::CeilingBounce
        });
    }

    // Every overlapping brick flips the ball, so two bricks hit in the same
    // frame cancel each other out.
    let mut destroyed_any = false;
    for (index, brick) in state.bricks.iter_mut().enumerate() {
        if !brick.destroyed && has_collision(&brick.bounds, &ball.bounds) {
            ball.vel.y = -ball.vel.y;
            brick.destroyed = true;
            destroyed_any = true;
            events.push(GameEvent::BrickDestroyed { index });
        }
    }

    let delta = ball.vel * dt;
    ball.bounds.translate(delta);

    if destroyed_any && state.is_cleared() {
        events.push(GameEvent::FieldCleared);
    }

    events
}

/// Auto-play snap, or manual movement when auto-play can't act
fn move_paddle(state: &mut GameState, input: &TickInput, dt: f32) {
    let ball_x = state.ball.bounds.x;
    let paddle = &mut state.paddle.bounds;

    if state.auto_play && ball_x < SCREEN_WIDTH - paddle.w {
        paddle.x = ball_x;
    } else if input.left && paddle.x > 0.0 {
        // Bounds are checked before the move, so this can overshoot by one step
        paddle.x -= PLAYER_SPEED * dt;
    } else if input.right && paddle.x < SCREEN_WIDTH - paddle.w {
        paddle.x += PLAYER_SPEED * dt;
    }
}
