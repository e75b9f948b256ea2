//! # Terrain Blender
//!
//! Turns painted layer masks into a blend map: one pixel per tile, each
//! color channel holding the weight of one terrain layer (red = secondary,
//! green = dirt, blue = water, alpha = road; all zero = primary). A first
//! pass resolves each tile's top layer to a full-weight channel, a second
//! pass mixes every pixel with its 3x3 neighborhood so layer borders fade
//! into each other.

use macroquad::prelude::{FilterMode, Image, Texture2D, BLANK};

use crate::tilemap::terrain::{DirtyRegion, TerrainCanvas};
use crate::tilemap::TerrainType;

/// Per-tile layer weights, `[secondary, dirt, water, road]`.
pub type LayerWeights = [u8; 4];

/// CPU blend-map builder over a [`TerrainCanvas`].
pub struct TerrainBlender {
    cols: i32,
    rows: i32,
    layered: Vec<LayerWeights>,
    mixed: Image,
    texture: Option<Texture2D>,
}

impl TerrainBlender {
    /// Creates a blender for a `cols x rows` canvas. The blend map starts
    /// out all-primary.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols as i32,
            rows: rows as i32,
            layered: vec![[0; 4]; cols * rows],
            mixed: Image::gen_image_color(cols as u16, rows as u16, BLANK),
            texture: None,
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// The full weights of a layer mask before mixing.
    pub fn stack_weights(mask: u16) -> LayerWeights {
        match TerrainType::top_layer(mask) {
            TerrainType::Secondary => [255, 0, 0, 0],
            TerrainType::Dirt => [0, 255, 0, 0],
            TerrainType::Water => [0, 0, 255, 0],
            TerrainType::Road => [0, 0, 0, 255],
            TerrainType::Primary | TerrainType::Invalid => [0, 0, 0, 0],
        }
    }

    /// Re-blends the canvas' dirty region into the blend map and clears
    /// the canvas' modified state. Does nothing for an unmodified canvas.
    pub fn apply(&mut self, canvas: &mut TerrainCanvas) {
        if !canvas.is_modified() {
            return;
        }
        let region = canvas.take_dirty().unwrap_or(DirtyRegion {
            min_x: 0,
            min_y: 0,
            max_x: self.cols - 1,
            max_y: self.rows - 1,
        });
        self.stack(canvas, region);
        self.mix(region);
        canvas.set_modified(false);
    }

    /// The mixed layer weights of the tile at `(col, row)`;
    /// out of bounds reads as primary.
    pub fn weights(&self, col: i32, row: i32) -> LayerWeights {
        if col < 0 || col > self.cols - 1 || row < 0 || row > self.rows - 1 {
            return [0; 4];
        }
        let i = (row * self.cols + col) as usize * 4;
        let bytes = self.mixed.bytes.as_slice();
        [bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]
    }

    /// The blend map image, one pixel per tile.
    pub fn blend_map(&self) -> &Image {
        &self.mixed
    }

    /// Uploads the blend map and returns the texture. Creates it on first
    /// use; requires a window.
    pub fn upload(&mut self) -> &Texture2D {
        match self.texture {
            Some(ref texture) => {
                texture.update(&self.mixed);
                texture
            }
            None => {
                let texture = Texture2D::from_image(&self.mixed);
                texture.set_filter(FilterMode::Nearest);
                self.texture.insert(texture)
            }
        }
    }

    fn stack(&mut self, canvas: &TerrainCanvas, region: DirtyRegion) {
        for y in region.min_y..=region.max_y {
            for x in region.min_x..=region.max_x {
                let mask = canvas.masks().get(x, y);
                self.layered[(y * self.cols + x) as usize] = Self::stack_weights(mask);
            }
        }
    }

    // 3x3 box mix, clamped at the borders. The mixed area extends one tile
    // beyond the stacked region so its border tiles pick up the change.
    fn mix(&mut self, region: DirtyRegion) {
        let min_x = (region.min_x - 1).max(0);
        let min_y = (region.min_y - 1).max(0);
        let max_x = (region.max_x + 1).min(self.cols - 1);
        let max_y = (region.max_y + 1).min(self.rows - 1);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let mut sums = [0u32; 4];
                let mut count = 0u32;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        let (nx, ny) = (x + dx, y + dy);
                        if nx < 0 || nx > self.cols - 1 || ny < 0 || ny > self.rows - 1 {
                            continue;
                        }
                        let weights = self.layered[(ny * self.cols + nx) as usize];
                        for (sum, w) in sums.iter_mut().zip(weights) {
                            *sum += w as u32;
                        }
                        count += 1;
                    }
                }
                let i = (y * self.cols + x) as usize * 4;
                for (c, sum) in sums.into_iter().enumerate() {
                    self.mixed.bytes[i + c] = (sum / count) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_with(cols: usize, rows: usize) -> TerrainCanvas {
        let mut canvas = TerrainCanvas::new(cols, rows);
        canvas.set_brush_radius(0.0);
        canvas
    }

    #[test]
    fn stack_resolves_top_layer_weights() {
        assert_eq!(TerrainBlender::stack_weights(0x0000), [0, 0, 0, 0]);
        assert_eq!(TerrainBlender::stack_weights(0xF000), [255, 0, 0, 0]);
        assert_eq!(TerrainBlender::stack_weights(0xFF00), [0, 255, 0, 0]);
        // road wins over everything below it
        assert_eq!(TerrainBlender::stack_weights(0xFFFF), [0, 0, 0, 255]);
    }

    #[test]
    fn fresh_blend_map_is_all_primary() {
        // every channel zeroed, alpha (road weight) included
        let blender = TerrainBlender::new(4, 4);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(blender.weights(col, row), [0, 0, 0, 0]);
            }
        }
    }

    #[test]
    fn untouched_canvas_is_a_no_op() {
        let mut canvas = canvas_with(4, 4);
        let mut blender = TerrainBlender::new(4, 4);
        blender.apply(&mut canvas);
        assert_eq!(blender.weights(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn painted_tile_bleeds_into_neighbors() {
        let mut canvas = canvas_with(8, 8);
        canvas.set_terrain_type(TerrainType::Water);
        canvas.draw_point(4, 4);

        let mut blender = TerrainBlender::new(8, 8);
        blender.apply(&mut canvas);
        assert!(!canvas.is_modified());

        // center: one water tile among nine
        assert_eq!(blender.weights(4, 4), [0, 0, 255 / 9, 0]);
        // direct neighbor still sees it
        assert_eq!(blender.weights(3, 4), [0, 0, 255 / 9, 0]);
        // two tiles out it is gone
        assert_eq!(blender.weights(2, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn solid_fill_mixes_to_full_weight() {
        let mut canvas = canvas_with(8, 8);
        canvas.set_terrain_type(TerrainType::Dirt);
        canvas.draw_rectangle(0, 0, 7, 7);

        let mut blender = TerrainBlender::new(8, 8);
        blender.apply(&mut canvas);
        assert_eq!(blender.weights(4, 4), [0, 255, 0, 0]);
        // corners only see in-bounds neighbors, so they stay solid too
        assert_eq!(blender.weights(0, 0), [0, 255, 0, 0]);
    }

    #[test]
    fn reblend_follows_the_dirty_region() {
        let mut canvas = canvas_with(16, 16);
        canvas.set_terrain_type(TerrainType::Road);
        canvas.draw_point(2, 2);

        let mut blender = TerrainBlender::new(16, 16);
        blender.apply(&mut canvas);
        let before = blender.weights(2, 2);
        assert_ne!(before, [0, 0, 0, 0]);

        // clearing the tile re-blends it back to primary
        canvas.set_clear_mode(true);
        canvas.draw_point(2, 2);
        blender.apply(&mut canvas);
        assert_eq!(blender.weights(2, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn out_of_bounds_weights_read_primary() {
        let blender = TerrainBlender::new(4, 4);
        assert_eq!(blender.weights(-1, 0), [0, 0, 0, 0]);
        assert_eq!(blender.weights(0, 9), [0, 0, 0, 0]);
    }
}
