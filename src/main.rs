//! Breakout entry point
//!
//! Handles startup (settings, window, GPU) and drives the game loop from the
//! winit event loop.
//!
//! Usage: `breakout [SETTINGS.json] [--variant wide|narrow] [--headless FRAMES]`

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, bail};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use breakout::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use breakout::platform::{Button, Controller, ExitSignal};
use breakout::renderer::{Framebuffer, RenderInitError, RenderState};
use breakout::sim::TickInput;
use breakout::{GameLoop, LoopStatus, Settings, Variant};

/// Fixed step used when running without a window
const HEADLESS_DT: f32 = 1.0 / 60.0;

/// Failure while bringing up the window or GPU
#[derive(Debug)]
enum StartupError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Renderer(RenderInitError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::EventLoop(e) => write!(f, "unable to start event loop: {e}"),
            StartupError::Window(e) => write!(f, "unable to create window: {e}"),
            StartupError::Renderer(e) => write!(f, "unable to create renderer: {e}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::EventLoop(e) => Some(e),
            StartupError::Window(e) => Some(e),
            StartupError::Renderer(e) => Some(e),
        }
    }
}

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct Options {
    settings_path: Option<PathBuf>,
    variant: Option<Variant>,
    headless_frames: Option<u64>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--variant" => {
                let name = args.next().context("--variant needs a value")?;
                let variant = Variant::from_str(&name)
                    .with_context(|| format!("unknown variant '{name}'"))?;
                options.variant = Some(variant);
            }
            "--headless" => {
                let frames = args.next().context("--headless needs a frame count")?;
                options.headless_frames = Some(
                    frames
                        .parse()
                        .with_context(|| format!("invalid frame count '{frames}'"))?,
                );
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            path => {
                if options.settings_path.is_some() {
                    bail!("more than one settings file given");
                }
                options.settings_path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

struct App {
    settings: Settings,
    game: GameLoop,
    controller: Controller,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    startup_error: Option<StartupError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let game = GameLoop::new(&settings, ExitSignal::new());
        Self {
            settings,
            game,
            controller: Controller::new(),
            window: None,
            render_state: None,
            startup_error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StartupError> {
        let scale = self.settings.effective_window_scale();
        let attrs = Window::default_attributes()
            .with_title("Breakout")
            .with_inner_size(PhysicalSize::new(
                SCREEN_WIDTH as u32 * scale,
                SCREEN_HEIGHT as u32 * scale,
            ))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs).map_err(StartupError::Window)?);

        let render_state = pollster::block_on(RenderState::new(window.clone(), self.settings.vsync))
            .map_err(StartupError::Renderer)?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.game.restart_clock();
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(()) => log::info!("Breakout running!"),
            Err(e) => {
                log::error!("{e}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.game.exit_signal().is_triggered() {
            event_loop.exit();
        } else if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.game.exit_signal().trigger(),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.controller.release_all(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    self.controller.handle_key(code, pressed);
                    if self.controller.is_held(Button::Quit) {
                        self.game.exit_signal().trigger();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(render_state) = self.render_state.as_mut() else {
                    return;
                };
                let input = self.controller.sample();
                if self.game.frame(&input, render_state) == LoopStatus::Quit {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

/// Simulate without a window, with the paddle on auto-play
fn run_headless(settings: &Settings, frames: u64) {
    let mut game = GameLoop::new(settings, ExitSignal::new());
    game.state.auto_play = true;
    let mut framebuffer = Framebuffer::screen();

    for _ in 0..frames {
        game.step(HEADLESS_DT, &TickInput::default(), &mut framebuffer);
    }

    let remaining = game.state.remaining_bricks();
    log::info!("Headless run finished: {} frames, {} bricks left", game.frames(), remaining);
    println!(
        "frames={} bricks_left={} ball=({:.1}, {:.1})",
        game.frames(),
        remaining,
        game.state.ball.bounds.x,
        game.state.ball.bounds.y
    );
}

fn run() -> anyhow::Result<()> {
    let options = parse_args(std::env::args().skip(1))?;

    let mut settings = match &options.settings_path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    if let Some(variant) = options.variant {
        settings.variant = variant;
    }
    log::info!("Settings: {}", settings.to_json());

    if let Some(frames) = options.headless_frames {
        run_headless(&settings, frames);
        return Ok(());
    }

    let event_loop = EventLoop::new().map_err(StartupError::EventLoop)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop
        .run_app(&mut app)
        .map_err(StartupError::EventLoop)?;

    if let Some(e) = app.startup_error.take() {
        return Err(e.into());
    }

    log::info!("Breakout exited after {} frames", app.game.frames());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Breakout starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
