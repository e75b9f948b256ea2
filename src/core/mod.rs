//! # Core Module
//!
//! The fixed-timestep engine loop, the application lifecycle trait, window
//! configuration, time accounting, and input snapshots.

pub mod app;
pub mod engine;
pub mod input;
pub mod time;

pub use app::*;
pub use engine::*;
pub use input::*;
pub use time::*;
