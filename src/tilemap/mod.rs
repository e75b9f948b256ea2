//! # Tilemap Module
//!
//! Terrain layers for square power-of-two maps: RGBA4 layer masks per
//! tile, brush-based editing with dirty-region tracking, view culling,
//! and blending of the layer masks into a displayable color map.

pub mod map_size;
pub mod terrain;
pub mod terrain_type;

pub use map_size::*;
pub use terrain::*;
pub use terrain_type::*;
