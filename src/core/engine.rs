//! # Engine Loop
//!
//! Fixed-timestep driver over the macroquad frame loop. Input and update
//! run at the target UPS; rendering runs once per displayed frame with an
//! interpolation alpha.

use crate::core::{Application, Keyboard, Mouse, Time};
use crate::LoamResult;
use log::{info, warn};
use macroquad::window::{next_frame, screen_height, screen_width};

/// The fixed-timestep engine.
///
/// ```no_run
/// use loam::{Application, Engine, Keyboard, LoamResult, Mouse};
///
/// struct Demo;
///
/// impl Application for Demo {
///     fn input(&mut self, _: &Keyboard, _: &Mouse, _: f32) -> LoamResult<()> { Ok(()) }
///     fn update(&mut self, _delta: f32) -> LoamResult<()> { Ok(()) }
///     fn render(&mut self, _alpha: f32, _ft: f32) -> LoamResult<()> { Ok(()) }
/// }
///
/// #[macroquad::main("demo")]
/// async fn main() -> LoamResult<()> {
///     Engine::new().run(&mut Demo).await
/// }
/// ```
pub struct Engine {
    time: Time,
    keyboard: Keyboard,
    mouse: Mouse,
    target_ups: u32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with the default target UPS.
    pub fn new() -> Self {
        Self {
            time: Time::new(),
            keyboard: Keyboard::new(),
            mouse: Mouse::new(),
            target_ups: crate::config::DEFAULT_TARGET_UPS,
        }
    }

    /// Sets the fixed update rate; clamped to at least 1.
    pub fn set_target_ups(&mut self, ups: u32) {
        self.target_ups = ups.max(1);
    }

    /// The fixed update rate.
    pub fn target_ups(&self) -> u32 {
        self.target_ups
    }

    /// Time accounting for the current run.
    pub fn time(&self) -> &Time {
        &self.time
    }

    /// The keyboard snapshot of the current fixed step.
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// The mouse snapshot of the current fixed step.
    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    /// Runs `app` until [`Application::finished`] reports true.
    ///
    /// `on_start` errors abort before the loop; errors from the step
    /// callbacks end the run after `on_exit`.
    pub async fn run<A: Application>(&mut self, app: &mut A) -> LoamResult<()> {
        info!("starting application");
        app.on_start()?;
        self.time.init();

        let delta = 1.0 / self.target_ups as f32;
        let mut accumulator = 0.0f32;
        let mut last_size = (screen_width(), screen_height());
        let mut outcome = Ok(());

        info!("running at {} ups", self.target_ups);
        while !app.finished() {
            let frame_time = self.time.frame_time();
            accumulator += frame_time;

            let size = (screen_width(), screen_height());
            if size != last_size {
                last_size = size;
                app.on_resize(size.0 as i32, size.1 as i32);
            }

            while accumulator >= delta {
                self.keyboard.collect();
                self.mouse.collect();
                if let Err(e) = self.step(app, delta) {
                    outcome = Err(e);
                    break;
                }
                accumulator -= delta;
            }
            if outcome.is_err() {
                break;
            }

            let alpha = accumulator / delta;
            if let Err(e) = app.render(alpha, frame_time) {
                outcome = Err(e);
                break;
            }
            self.time.inc_fps_count();
            self.time.update();
            next_frame().await;
        }

        if let Err(e) = &outcome {
            warn!("run ended with error: {}", e);
        }
        info!("exiting application");
        app.on_exit();
        outcome
    }

    fn step<A: Application>(&mut self, app: &mut A, delta: f32) -> LoamResult<()> {
        app.input(&self.keyboard, &self.mouse, delta)?;
        app.update(delta)?;
        self.time.inc_ups_count();
        Ok(())
    }
}
