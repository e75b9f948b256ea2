//! # Math Module
//!
//! Noise functions, sampled noise maps, and interpolation helpers used by
//! terrain generation and rendering.

pub mod ease;
pub mod noise_map;

pub use ease::*;
pub use noise_map::*;
