//! # Terrain Shaper
//!
//! Pairs a [`TerrainCanvas`] with a [`TerrainBlender`] and keeps the blend
//! map in sync with the strokes painted since the last update.

use macroquad::prelude::{Image, Texture2D};

use crate::tilemap::terrain::{TerrainBlender, TerrainCanvas, TerrainEditCallback};
use crate::tilemap::{MapSize, TerrainType};

/// The terrain editing front end: paint through the canvas, read blended
/// weights or the uploaded blend map out the other side.
pub struct TerrainShaper {
    canvas: TerrainCanvas,
    blender: TerrainBlender,
}

impl TerrainShaper {
    /// Creates a shaper for a square map.
    pub fn new(map_size: MapSize) -> Self {
        let tiles = map_size.tiles() as usize;
        Self::with_dimensions(tiles, tiles)
    }

    /// Creates a shaper for an arbitrary canvas size.
    pub fn with_dimensions(cols: usize, rows: usize) -> Self {
        Self {
            canvas: TerrainCanvas::new(cols, rows),
            blender: TerrainBlender::new(cols, rows),
        }
    }

    /// The brush canvas.
    pub fn canvas(&mut self) -> &mut TerrainCanvas {
        &mut self.canvas
    }

    /// The blended layer weights.
    pub fn blender(&self) -> &TerrainBlender {
        &self.blender
    }

    /// Installs the per-tile edit callback on the canvas.
    pub fn set_edit_callback(&mut self, callback: TerrainEditCallback) {
        self.canvas.set_callback(callback);
    }

    /// Selects the painted layer.
    pub fn set_terrain_type(&mut self, terrain_type: TerrainType) {
        self.canvas.set_terrain_type(terrain_type);
    }

    /// Re-blends if the canvas changed since the last update. Returns true
    /// when the blend map was rebuilt.
    pub fn update(&mut self) -> bool {
        if self.canvas.is_modified() {
            self.blender.apply(&mut self.canvas);
            true
        } else {
            false
        }
    }

    /// The blend map image, one pixel per tile.
    pub fn blend_map(&self) -> &Image {
        self.blender.blend_map()
    }

    /// Uploads the blend map to the GPU; requires a window.
    pub fn upload_blend_map(&mut self) -> &Texture2D {
        self.blender.upload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_runs_only_after_strokes() {
        let mut shaper = TerrainShaper::with_dimensions(8, 8);
        assert!(!shaper.update());

        shaper.set_terrain_type(TerrainType::Water);
        shaper.canvas().set_brush_radius(0.0);
        shaper.canvas().draw_point(3, 3);
        assert!(shaper.update());
        assert!(!shaper.update());

        assert_ne!(shaper.blender().weights(3, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn map_size_shapers_cover_the_whole_map() {
        let shaper = TerrainShaper::new(MapSize::Tiny);
        assert_eq!(shaper.blender().cols(), 64);
        assert_eq!(shaper.blender().rows(), 64);
    }
}
