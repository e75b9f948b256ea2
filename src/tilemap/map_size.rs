//! # Map Sizes
//!
//! Square power-of-two map sizes, from 64 to 2048 tiles per edge.

use serde::{Deserialize, Serialize};

/// Edge length of a square tile map, always a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl MapSize {
    /// All sizes, smallest first.
    pub const ALL: [MapSize; 6] = [
        MapSize::Tiny,
        MapSize::Small,
        MapSize::Medium,
        MapSize::Large,
        MapSize::Huge,
        MapSize::Gargantuan,
    ];

    /// Base-2 logarithm of the edge length.
    pub fn log2(self) -> u32 {
        match self {
            MapSize::Tiny => 6,
            MapSize::Small => 7,
            MapSize::Medium => 8,
            MapSize::Large => 9,
            MapSize::Huge => 10,
            MapSize::Gargantuan => 11,
        }
    }

    /// Tiles per edge.
    pub fn tiles(self) -> u32 {
        1 << self.log2()
    }
}
