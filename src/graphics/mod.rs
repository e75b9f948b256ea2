//! # Graphics Module
//!
//! Batching and surface helpers over macroquad: a sprite batch with
//! draw-call accounting, an instanced terrain-chunk batch, and 8-bit
//! depth maps built from noise fields or images.

pub mod depth_map;
pub mod sprite_batch;
pub mod terrain_batch;

pub use depth_map::*;
pub use sprite_batch::*;
pub use terrain_batch::*;
