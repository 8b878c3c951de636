//! Drives the full update/render loop against the software framebuffer

use std::time::{Duration, Instant};

use breakout::consts::BRICK_COUNT;
use breakout::platform::ExitSignal;
use breakout::renderer::{Framebuffer, colors};
use breakout::sim::TickInput;
use breakout::{GameLoop, LoopStatus, Settings, ToggleMode, Variant};

const DT: f32 = 1.0 / 60.0;

#[test]
fn auto_play_breaks_bricks() {
    let mut game = GameLoop::new(&Settings::default(), ExitSignal::new());
    let mut fb = Framebuffer::screen();

    // One press of start turns auto-play on
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    game.step(DT, &start, &mut fb);
    assert!(game.state.auto_play);

    for _ in 0..3000 {
        game.step(DT, &TickInput::default(), &mut fb);
    }

    let remaining = game.state.remaining_bricks();
    assert!(remaining < BRICK_COUNT);
    assert_eq!(game.frames(), 3001);
    assert_eq!(fb.frames_presented(), 3001);

    // The ball may cover part of one live brick
    let cyan = fb.count(colors::BRICK);
    assert!(cyan <= remaining * 32 * 8);
    assert!(cyan + 64 >= remaining * 32 * 8);
}

#[test]
fn auto_play_keeps_the_ball_in_play() {
    let mut game = GameLoop::new(&Settings::default(), ExitSignal::new());
    game.state.auto_play = true;
    let mut fb = Framebuffer::screen();

    for _ in 0..2000 {
        game.step(DT, &TickInput::default(), &mut fb);
        assert!(game.state.ball.bounds.y <= 272.0);
    }
}

#[test]
fn narrow_variant_every_press() {
    let settings = Settings {
        variant: Variant::Narrow,
        toggle_mode: ToggleMode::EveryPress,
        ..Default::default()
    };
    let mut game = GameLoop::new(&settings, ExitSignal::new());
    let mut fb = Framebuffer::screen();
    assert_eq!(game.state.paddle.bounds.w, 32.0);

    let start = TickInput {
        start: true,
        ..Default::default()
    };
    game.step(DT, &start, &mut fb);
    game.step(DT, &start, &mut fb);
    game.step(DT, &start, &mut fb);
    assert!(game.state.auto_play);
}

#[test]
fn exit_from_another_thread_stops_the_loop() {
    let exit = ExitSignal::new();
    let mut game = GameLoop::new(&Settings::default(), exit.clone());
    let mut fb = Framebuffer::screen();
    let start = Instant::now();

    let status = game.frame_at(start, &TickInput::default(), &mut fb);
    assert_eq!(status, LoopStatus::Continue);

    let watcher = exit.clone();
    std::thread::spawn(move || watcher.trigger()).join().unwrap();

    let status = game.frame_at(
        start + Duration::from_millis(16),
        &TickInput::default(),
        &mut fb,
    );
    assert_eq!(status, LoopStatus::Quit);
    assert_eq!(game.frames(), 1);
}

#[test]
fn capped_frames_take_at_least_the_budget() {
    let settings = Settings {
        frame_cap: Some(100),
        ..Default::default()
    };
    let mut game = GameLoop::new(&settings, ExitSignal::new());
    let mut fb = Framebuffer::screen();

    let begin = Instant::now();
    for _ in 0..3 {
        assert_eq!(game.frame(&TickInput::default(), &mut fb), LoopStatus::Continue);
    }
    assert!(begin.elapsed() >= Duration::from_millis(30));
}
