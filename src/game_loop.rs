//! Frame timing and the update/render cycle
//!
//! Each frame: check the exit signal, measure the time since the previous
//! frame, run one simulation step with that delta, then draw. Frames are
//! uncapped unless the settings ask for a frame rate, in which case the
//! loop sleeps off whatever is left of the frame budget.

use std::time::{Duration, Instant};

use crate::platform::ExitSignal;
use crate::renderer::{Canvas, draw};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Continue,
    Quit,
}

/// Measures frame deltas and optionally paces frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    budget: Option<Duration>,
}

impl FrameClock {
    pub fn new(budget: Option<Duration>) -> Self {
        Self::starting_at(Instant::now(), budget)
    }

    pub fn starting_at(start: Instant, budget: Option<Duration>) -> Self {
        Self {
            last: start,
            budget,
        }
    }

    /// Seconds since the previous call; never negative
    pub fn delta(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32()
    }

    /// Sleep still owed for a frame that started at `frame_start`
    pub fn remaining(&self, frame_start: Instant, now: Instant) -> Option<Duration> {
        let budget = self.budget?;
        let spent = now.saturating_duration_since(frame_start);
        budget.checked_sub(spent).filter(|d| !d.is_zero())
    }

    /// Block until the frame budget is used up (no-op when uncapped)
    pub fn pace(&self, frame_start: Instant) {
        if let Some(rest) = self.remaining(frame_start, Instant::now()) {
            std::thread::sleep(rest);
        }
    }
}

/// Owns the game state and runs frames against a canvas
pub struct GameLoop {
    pub state: GameState,
    clock: FrameClock,
    exit: ExitSignal,
    frames: u64,
}

impl GameLoop {
    pub fn new(settings: &Settings, exit: ExitSignal) -> Self {
        Self {
            state: GameState::new(settings.rules()),
            clock: FrameClock::new(settings.frame_budget()),
            exit,
            frames: 0,
        }
    }

    pub fn exit_signal(&self) -> &ExitSignal {
        &self.exit
    }

    /// Start timing from now, so setup time doesn't land in the first delta
    pub fn restart_clock(&mut self) {
        self.clock.last = Instant::now();
    }

    /// Frames simulated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame on the wall clock, pacing afterwards if capped
    pub fn frame(&mut self, input: &TickInput, canvas: &mut impl Canvas) -> LoopStatus {
        let frame_start = Instant::now();
        let status = self.frame_at(frame_start, input, canvas);
        if status == LoopStatus::Continue {
            self.clock.pace(frame_start);
        }
        status
    }

    /// Run one frame as if the current time were `now`
    pub fn frame_at(
        &mut self,
        now: Instant,
        input: &TickInput,
        canvas: &mut impl Canvas,
    ) -> LoopStatus {
        if self.exit.is_triggered() {
            return LoopStatus::Quit;
        }
        let dt = self.clock.delta(now);
        self.step(dt, input, canvas);
        LoopStatus::Continue
    }

    /// Simulate `dt` seconds and draw the result
    pub fn step(&mut self, dt: f32, input: &TickInput, canvas: &mut impl Canvas) {
        for event in tick(&mut self.state, input, dt) {
            self.log_event(event);
        }
        draw(&self.state, canvas);
        self.frames += 1;
    }

    fn log_event(&self, event: GameEvent) {
        match event {
            GameEvent::AutoPlayToggled(on) => {
                log::info!("Auto-play {}", if on { "on" } else { "off" })
            }
            GameEvent::BallReset => log::debug!("Ball lost, respawning"),
            GameEvent::BrickDestroyed { index } => log::debug!(
                "Brick {} destroyed, {} left",
                index,
                self.state.remaining_bricks()
            ),
            GameEvent::FieldCleared => {
                log::info!("All bricks cleared after {} frames", self.frames)
            }
            GameEvent::WallBounce | GameEvent::PaddleBounce | GameEvent::CeilingBounce => {
                log::trace!("{:?}", event)
            }
        }
    }
}
