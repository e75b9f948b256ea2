//! # Time Accounting
//!
//! Frame timing and per-second UPS/FPS counters for the engine loop.

use std::time::Instant;

/// Tracks frame deltas and rolls update/frame counters once per second.
#[derive(Debug)]
pub struct Time {
    init_time: Instant,
    last_frame: Instant,
    timer: f64,
    ups_count: u32,
    fps_count: u32,
    ups: u32,
    fps: u32,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Creates a timer starting now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            init_time: now,
            last_frame: now,
            timer: 0.0,
            ups_count: 0,
            fps_count: 0,
            ups: 0,
            fps: 0,
        }
    }

    /// Resets the timer baseline; call right before entering the loop.
    pub fn init(&mut self) {
        let now = Instant::now();
        self.init_time = now;
        self.last_frame = now;
        self.timer = 0.0;
    }

    /// Seconds since the previous call (the frame delta). Clamped below
    /// 0.25s so a stall cannot flood the fixed-step accumulator.
    pub fn frame_time(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.timer += delta;
        (delta as f32).min(0.25)
    }

    /// Counts one fixed update.
    pub fn inc_ups_count(&mut self) {
        self.ups_count += 1;
    }

    /// Counts one rendered frame.
    pub fn inc_fps_count(&mut self) {
        self.fps_count += 1;
    }

    /// Rolls the per-second windows when a second has elapsed.
    pub fn update(&mut self) {
        if self.timer >= 1.0 {
            self.ups = self.ups_count;
            self.fps = self.fps_count;
            self.ups_count = 0;
            self.fps_count = 0;
            self.timer -= 1.0;
        }
    }

    /// Updates per second over the last rolled window.
    pub fn ups(&self) -> u32 {
        self.ups
    }

    /// Frames per second over the last rolled window.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Seconds since `init`.
    pub fn runtime(&self) -> f64 {
        self.init_time.elapsed().as_secs_f64()
    }
}
