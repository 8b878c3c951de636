//! Frame composition
//!
//! Draw order is fixed: background, surviving bricks, paddle, ball.

use super::canvas::Canvas;
use super::vertex::colors;
use crate::sim::GameState;

/// Draw one frame of the game and present it
pub fn draw(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(colors::BACKGROUND);

    for brick in state.bricks.iter().filter(|b| !b.destroyed) {
        canvas.fill_rect(&brick.bounds, colors::BRICK);
    }

    canvas.fill_rect(&state.paddle.bounds, colors::FOREGROUND);
    canvas.fill_rect(&state.ball.bounds, colors::FOREGROUND);

    canvas.present();
}
