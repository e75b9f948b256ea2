//! # Application Lifecycle
//!
//! The [`Application`] trait the engine drives, plus [`WindowConfig`].

use crate::core::{Keyboard, Mouse};
use crate::LoamResult;
use macroquad::window::Conf;
use serde::{Deserialize, Serialize};

/// An application driven by the [`crate::core::Engine`].
///
/// `input` and `update` run on the fixed timestep (`delta = 1 / UPS`);
/// `render` runs once per displayed frame with an interpolation `alpha`
/// (`accumulator / delta`) and the real frame time.
pub trait Application {
    /// Called once before the loop starts. Initialize scenes, renderers
    /// and load assets here; errors abort the run cleanly.
    fn on_start(&mut self) -> LoamResult<()> {
        Ok(())
    }

    /// Collect and query user input. Called right before `update` on each
    /// fixed step.
    fn input(&mut self, keyboard: &Keyboard, mouse: &Mouse, delta: f32) -> LoamResult<()>;

    /// Advance application logic by one fixed step.
    fn update(&mut self, delta: f32) -> LoamResult<()>;

    /// Draw a frame. `alpha` is how far the loop is into the next fixed
    /// step; interpolate with
    /// `state = current * alpha + previous * (1.0 - alpha)`.
    /// `frame_time` is the real seconds between frames, for shader-style
    /// effects.
    fn render(&mut self, alpha: f32, frame_time: f32) -> LoamResult<()>;

    /// Called when the window framebuffer changes size.
    fn on_resize(&mut self, _width: i32, _height: i32) {}

    /// Called once after the loop ends, before the window goes away.
    fn on_exit(&mut self) {}

    /// The engine stops looping once this returns true.
    fn finished(&self) -> bool {
        false
    }
}

/// Window configuration, convertible to a macroquad [`Conf`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Target resolution width in pixels
    pub width: i32,
    /// Target resolution height in pixels
    pub height: i32,
    /// Windowed (true) or fullscreen (false)
    pub windowed: bool,
    /// 4x MSAA
    pub antialiasing: bool,
    /// Allow resizing in windowed mode
    pub resizable: bool,
    /// Sync presentation to the display
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Loam".to_string(),
            width: crate::config::DEFAULT_WINDOW_WIDTH,
            height: crate::config::DEFAULT_WINDOW_HEIGHT,
            windowed: true,
            antialiasing: false,
            resizable: true,
            vsync: true,
        }
    }
}

impl From<WindowConfig> for Conf {
    fn from(config: WindowConfig) -> Self {
        Conf {
            window_title: config.title,
            window_width: config.width,
            window_height: config.height,
            fullscreen: !config.windowed,
            sample_count: if config.antialiasing { 4 } else { 1 },
            window_resizable: config.resizable,
            ..Default::default()
        }
    }
}
