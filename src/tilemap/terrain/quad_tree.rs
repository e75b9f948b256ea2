//! # Terrain Quadtree
//!
//! View culling for terrain chunks. Leaves are 32x32 tile chunks; queries
//! hand each visible chunk's coordinate and center to the visitor, which
//! typically forwards to a [`crate::graphics::TerrainBatch`].

use crate::common::log2;
use crate::tilemap::MapSize;
use crate::utility::{QuadTree, QuadTreeLeaf};

/// Tiles per chunk edge.
pub const CHUNK_TILES: u32 = 32;

/// Quadtree over a terrain map, culling 32-tile chunks.
#[derive(Debug, Clone)]
pub struct TerrainQuadTree {
    tree: QuadTree,
}

impl TerrainQuadTree {
    /// Creates a tree covering `map_size` tiles per edge.
    pub fn new(map_size: MapSize) -> Self {
        Self {
            tree: QuadTree::new(map_size.log2(), log2(CHUNK_TILES)),
        }
    }

    /// Moves the map's bottom-left corner in world units.
    pub fn set_offset(&mut self, x0: f32, y0: f32) {
        self.tree.set_offset(x0, y0);
    }

    /// Visits every chunk intersecting the rectangle spanned by `p1` and
    /// `p2` (any corner order).
    pub fn query<F: FnMut(QuadTreeLeaf)>(&self, p1: (f32, f32), p2: (f32, f32), visitor: F) {
        self.tree.query(p1, p2, visitor);
    }
}
