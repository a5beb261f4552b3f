#![forbid(unsafe_code)]

pub mod config;
pub mod input;
pub mod life;
pub mod render;
pub mod schedule;

use std::time::Instant;

use error_iter::ErrorIter as _;
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowBuilder};
use winit_input_helper::WinitInputHelper;

use crate::config::{Config, ConfigError};
use crate::input::{Action, Simulation};
use crate::life::{GridError, LifeGrid};
use crate::schedule::FrameClock;

/// Physical keys and the characters they type for [`Action::from_char`].
const KEYS: [(KeyCode, char); 4] = [
    (KeyCode::KeyP, 'p'),
    (KeyCode::Space, ' '),
    (KeyCode::KeyC, 'c'),
    (KeyCode::KeyD, 'd'),
];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration")]
    Config(#[from] ConfigError),
    #[error("Failed to allocate the grid")]
    Grid(#[from] GridError),
    #[error("Failed to create the window")]
    Window(#[from] winit::error::OsError),
    #[error("Event loop failed")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Pixel surface failed")]
    Pixels(#[from] pixels::Error),
}

/// Opens the window and runs the simulation until it is closed.
pub fn run(config: Config) -> Result<(), Error> {
    env_logger::init();
    config.validate()?;

    let (columns, rows) = config.grid_size();
    let canvas = config.canvas_size();
    let mut grid = LifeGrid::new(columns, rows)?;
    grid.randomize();
    info!(
        "{columns}x{rows} grid on a {}x{} canvas at {} fps",
        canvas.0, canvas.1, config.frame_rate
    );

    let event_loop = EventLoop::new()?;
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(canvas.0 as f64, canvas.1 as f64);
        WindowBuilder::new()
            .with_title(render::TITLE)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)?
    };

    let mut state = State::new(window, Simulation::new(grid, config.cell_size, canvas))?;
    let mut clock = FrameClock::new(config.frame_rate, Instant::now());

    event_loop.run(move |event, elwt| {
        // The one event winit_input_helper doesn't handle for us.
        if let Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } = event
        {
            if let Err(err) = state.render() {
                log_error("pixels.render", err);
                elwt.exit();
                return;
            }
        }

        // `update` returns true once the pending events have been collected.
        if input.update(&event) {
            if input.key_pressed(KeyCode::Escape) || input.close_requested() {
                info!("exiting after {} generations", state.sim.grid().generation());
                elwt.exit();
                return;
            }

            let mut dirty = false;
            for (key, ch) in KEYS {
                if input.key_pressed(key) {
                    if let Some(action) = Action::from_char(ch) {
                        dirty |= state.sim.handle(action);
                    }
                }
            }

            if let Some(size) = input.window_resized() {
                if let Err(err) = state.pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    elwt.exit();
                    return;
                }
            }

            if input.mouse_pressed(0) {
                dirty |= state.pointer(input.cursor());
            }
            let cursor = input
                .cursor()
                .map(|position| canvas_position(state.pixels.window_pos_to_pixel(position)));
            if state.sim.is_debug() && cursor != state.cursor {
                dirty = true;
            }
            state.cursor = cursor;

            if clock.ready(Instant::now()) {
                state.sim.tick();
                dirty = true;
            }
            if dirty {
                state.window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(clock.deadline()));
        }
    })?;
    Ok(())
}

/// Window, pixel surface and the simulation they present.
struct State {
    window: Window,
    pixels: Pixels,
    sim: Simulation,
    /// Last cursor position in canvas pixels.
    cursor: Option<(f32, f32)>,
    title: String,
}

impl State {
    fn new(window: Window, sim: Simulation) -> Result<Self, Error> {
        let (width, height) = sim.canvas_size();
        let pixels = {
            let window_size = window.inner_size();
            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, &window);
            Pixels::new(width, height, surface_texture)?
        };
        Ok(Self {
            window,
            pixels,
            sim,
            cursor: None,
            title: render::TITLE.to_string(),
        })
    }

    /// Feeds a pointer press through to the simulation in canvas coordinates.
    fn pointer(&mut self, cursor: Option<(f32, f32)>) -> bool {
        let Some(position) = cursor else {
            return false;
        };
        match self.pixels.window_pos_to_pixel(position) {
            Ok((x, y)) => self.sim.handle(Action::Pointer {
                x: x as f32,
                y: y as f32,
            }),
            Err(_) => {
                debug!("click at {position:?} is outside the canvas");
                false
            }
        }
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        let (width, _) = self.sim.canvas_size();
        render::draw(
            self.sim.grid(),
            self.sim.cell_size(),
            self.pixels.frame_mut(),
            width,
        );

        let title = render::overlay(&self.sim, self.cursor);
        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }

        self.pixels.render()
    }
}

/// Canvas pixel coordinates of a window position mapped through the pixels surface.
/// Positions off the canvas keep their unclamped coordinates.
fn canvas_position(mapped: Result<(usize, usize), (isize, isize)>) -> (f32, f32) {
    match mapped {
        Ok((x, y)) => (x as f32, y as f32),
        Err((x, y)) => (x as f32, y as f32),
    }
}

pub fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
