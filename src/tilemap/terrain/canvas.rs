//! # Terrain Canvas
//!
//! Brush painting of terrain layers into a mask grid. Strokes accumulate
//! into a stencil, then flush applies them with the write operation implied
//! by paint/clear mode, fires the edit callback for every changed tile,
//! and records the dirty rectangle for display upload.

use crate::storage::{Grid2D, MaskGrid, WriteOp};
use crate::tilemap::TerrainType;
use crate::utility::GridPoint;

/// Callback invoked for each tile whose mask changed during a flush:
/// `(row, col, old_mask, new_mask)`.
pub type TerrainEditCallback = Box<dyn FnMut(i32, i32, u16, u16)>;

/// An inclusive dirty rectangle in tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegion {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl DirtyRegion {
    fn union(self, other: DirtyRegion) -> DirtyRegion {
        DirtyRegion {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Width in tiles.
    pub fn width(&self) -> i32 {
        1 + self.max_x - self.min_x
    }

    /// Height in tiles.
    pub fn height(&self) -> i32 {
        1 + self.max_y - self.min_y
    }
}

/// The terrain brush canvas.
pub struct TerrainCanvas {
    masks: MaskGrid,
    stencil: Grid2D<bool>,
    stroke_min: (i32, i32),
    stroke_max: (i32, i32),
    cols: i32,
    rows: i32,
    brush_radius: f32,
    sample_delta: f32,
    terrain_type: TerrainType,
    clear_mode: bool,
    modified: bool,
    dirty: Option<DirtyRegion>,
    callback: Option<TerrainEditCallback>,
}

impl TerrainCanvas {
    /// Creates an empty canvas of `cols x rows` tiles.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            masks: MaskGrid::new(cols, rows),
            stencil: Grid2D::new(cols, rows, false),
            stroke_min: (cols as i32 - 1, rows as i32 - 1),
            stroke_max: (0, 0),
            cols: cols as i32,
            rows: rows as i32,
            brush_radius: 1.0,
            sample_delta: 1.0,
            terrain_type: TerrainType::Primary,
            clear_mode: false,
            modified: false,
            dirty: None,
            callback: None,
        }
    }

    /// Creates a canvas over an existing mask grid.
    pub fn from_masks(masks: MaskGrid) -> Self {
        let cols = masks.cols();
        let rows = masks.rows();
        let mut canvas = Self::new(cols, rows);
        canvas.masks = masks;
        canvas
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// The painted layer masks.
    pub fn masks(&self) -> &MaskGrid {
        &self.masks
    }

    /// The layer painted by subsequent strokes.
    pub fn set_terrain_type(&mut self, terrain_type: TerrainType) {
        self.terrain_type = terrain_type;
    }

    /// Switches between painting and clearing.
    pub fn set_clear_mode(&mut self, clear_mode: bool) {
        self.clear_mode = clear_mode;
    }

    /// True when strokes erase instead of paint.
    pub fn is_clear_mode(&self) -> bool {
        self.clear_mode
    }

    /// Circular brush radius in tiles; clamped to non-negative.
    pub fn set_brush_radius(&mut self, radius: f32) {
        self.brush_radius = radius.max(0.0);
    }

    /// Distance between line samples in tiles; clamped above zero.
    pub fn set_sample_delta(&mut self, delta: f32) {
        self.sample_delta = delta.max(0.05);
    }

    /// Installs the edit callback fired per changed tile.
    pub fn set_callback(&mut self, callback: TerrainEditCallback) {
        self.callback = Some(callback);
    }

    /// Removes the edit callback.
    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    /// True when the canvas changed since the last
    /// [`TerrainCanvas::set_modified`] reset.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Resets or sets the modified flag (the blender resets it after an
    /// upload).
    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Takes the accumulated dirty rectangle, leaving the canvas clean.
    pub fn take_dirty(&mut self) -> Option<DirtyRegion> {
        self.dirty.take()
    }

    /// Paints one brush stamp at `(px, py)`.
    pub fn draw_point(&mut self, px: i32, py: i32) {
        self.stamp(px, py);
        self.flush();
    }

    /// Paints a line of brush stamps from `(x1, y1)` to `(x2, y2)`,
    /// sampled every `sample_delta` tiles; the endpoint is always stamped.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        if x1 == x2 && y1 == y2 {
            self.draw_point(x1, y1);
            return;
        }
        let (fx1, fy1) = (x1 as f32, y1 as f32);
        let (dx, dy) = (x2 as f32 - fx1, y2 as f32 - fy1);
        let length = (dx * dx + dy * dy).sqrt();
        let (dir_x, dir_y) = (dx / length, dy / length);
        let samples = (length / self.sample_delta) as i32 + 1;
        let mut last = (x1, y1);
        for i in 0..samples {
            let t = i as f32 * self.sample_delta;
            let px = (fx1 + dir_x * t).round() as i32;
            let py = (fy1 + dir_y * t).round() as i32;
            if i == 0 || (px, py) != last {
                self.stamp(px, py);
                last = (px, py);
            }
        }
        if last != (x2, y2) {
            self.stamp(x2, y2);
        }
        self.flush();
    }

    /// Fills the axis-aligned rectangle spanned by the two corners,
    /// ignoring the brush radius. Clipped against the canvas.
    pub fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let (min_x, max_x) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
        if min_x > self.cols - 1 || max_x < 0 || min_y > self.rows - 1 || max_y < 0 {
            return;
        }
        let min_x = min_x.max(0);
        let min_y = min_y.max(0);
        let max_x = max_x.min(self.cols - 1);
        let max_y = max_y.min(self.rows - 1);
        self.stroke_min = (self.stroke_min.0.min(min_x), self.stroke_min.1.min(min_y));
        self.stroke_max = (self.stroke_max.0.max(max_x), self.stroke_max.1.max(max_y));
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                self.stencil.set(x, y, true);
            }
        }
        let radius = self.brush_radius;
        self.brush_radius = 0.0;
        self.flush();
        self.brush_radius = radius;
    }

    /// Stamps every point once, skipping consecutive duplicates, then
    /// flushes as a single stroke.
    pub fn draw_points(&mut self, points: &[GridPoint]) {
        if points.is_empty() {
            return;
        }
        let mut last: Option<GridPoint> = None;
        for &p in points {
            if last != Some(p) {
                self.stamp(p.x, p.y);
                last = Some(p);
            }
        }
        self.flush();
    }

    // Marks the brush circle around (px, py) in the stencil. Stamps whose
    // center falls outside the canvas are dropped entirely.
    fn stamp(&mut self, px: i32, py: i32) {
        if px < 0 || px > self.cols - 1 || py < 0 || py > self.rows - 1 {
            return;
        }
        self.stroke_min = (self.stroke_min.0.min(px), self.stroke_min.1.min(py));
        self.stroke_max = (self.stroke_max.0.max(px), self.stroke_max.1.max(py));
        let br = self.brush_radius;
        let ibr = br as i32;
        let x1 = (px - ibr).max(0);
        let y1 = (py - ibr).max(0);
        let x2 = (px + ibr).min(self.cols - 1);
        let y2 = (py + ibr).min(self.rows - 1);
        let d2 = br * br;
        for y in y1..=y2 {
            for x in x1..=x2 {
                let a = (y - py) as f32;
                let b = (x - px) as f32;
                if d2 >= a * a + b * b {
                    self.stencil.set(x, y, true);
                }
            }
        }
    }

    // Applies the accumulated stencil to the mask grid and records the
    // dirty rectangle.
    fn flush(&mut self) {
        if self.stroke_min.0 > self.stroke_max.0 || self.stroke_min.1 > self.stroke_max.1 {
            return;
        }
        let br = self.brush_radius as i32;
        let min_x = (self.stroke_min.0 - br).max(0);
        let min_y = (self.stroke_min.1 - br).max(0);
        let max_x = (self.stroke_max.0 + br).min(self.cols - 1);
        let max_y = (self.stroke_max.1 + br).min(self.rows - 1);

        // painting sets the layer's bits; clearing removes them, except
        // that clearing primary wipes the whole mask (AND with 0x0000)
        let op = if self.clear_mode {
            if self.terrain_type == TerrainType::Primary {
                WriteOp::And
            } else {
                WriteOp::Clear
            }
        } else {
            WriteOp::Or
        };
        self.masks.set_write_op(op);

        let value = self.terrain_type.rgba4();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if self.stencil.get(x, y) == Some(&true) {
                    let old = self.masks.get(x, y);
                    self.masks.write(value, x, y);
                    let new = self.masks.get(x, y);
                    if new != old {
                        if let Some(callback) = self.callback.as_mut() {
                            callback(y, x, old, new);
                        }
                    }
                    self.stencil.set(x, y, false);
                }
            }
        }

        self.stroke_min = (self.cols - 1, self.rows - 1);
        self.stroke_max = (0, 0);

        let region = DirtyRegion {
            min_x,
            min_y,
            max_x,
            max_y,
        };
        self.dirty = Some(match self.dirty {
            Some(existing) => existing.union(region),
            None => region,
        });
        self.modified = true;
    }
}
