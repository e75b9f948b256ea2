//! # Terrain Batch
//!
//! Instanced rendering of square terrain chunks. Chunks are drawn as grid
//! meshes at one of four resolutions; instances accumulate into fixed-size
//! batches and flush as macroquad meshes.

use crate::config::TERRAIN_BATCH_SIZE;
use macroquad::color::WHITE;
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::texture::Texture2D;

/// Grid resolution of a chunk mesh (vertices per edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshResolution {
    High,
    Mid,
    Low,
    VeryLow,
}

impl MeshResolution {
    /// All resolutions, densest first.
    pub const ALL: [MeshResolution; 4] = [
        MeshResolution::High,
        MeshResolution::Mid,
        MeshResolution::Low,
        MeshResolution::VeryLow,
    ];

    /// Vertices per mesh edge.
    pub fn vertices_per_edge(self) -> usize {
        match self {
            MeshResolution::High => 33,
            MeshResolution::Mid => 17,
            MeshResolution::Low => 9,
            MeshResolution::VeryLow => 5,
        }
    }
}

/// One queued chunk instance.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Instance {
    center_x: f32,
    center_y: f32,
    scale: f32,
}

/// Generates unit-quad grid positions for a mesh edge of `res` vertices,
/// spanning `[-0.5, 0.5]` in both axes, row-major.
pub fn generate_vertices(res: usize) -> Vec<(f32, f32)> {
    let delta = 1.0 / (res - 1) as f32;
    let mut positions = Vec::with_capacity(res * res);
    for r in 0..res {
        for c in 0..res {
            positions.push((-0.5 + c as f32 * delta, -0.5 + r as f32 * delta));
        }
    }
    positions
}

/// Generates a triangle-list index buffer for a `res x res` vertex grid:
/// two triangles per cell, `(res - 1)^2 * 6` indices.
pub fn generate_indices(res: usize) -> Vec<u16> {
    let cells = res - 1;
    let mut indices = Vec::with_capacity(cells * cells * 6);
    for r in 0..cells {
        for c in 0..cells {
            let i0 = (r * res + c) as u16;
            let i1 = i0 + 1;
            let i2 = i0 + res as u16;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }
    indices
}

/// Batches terrain chunk instances and flushes them as meshes.
pub struct TerrainBatch {
    texture: Option<Texture2D>,
    instances: Vec<Instance>,
    resolution: MeshResolution,
    active: bool,
    draw_calls_frame: u32,
    draw_calls_total: u64,
}

impl Default for TerrainBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainBatch {
    /// Creates an empty batch with no texture bound.
    pub fn new() -> Self {
        Self {
            texture: None,
            instances: Vec::with_capacity(TERRAIN_BATCH_SIZE),
            resolution: MeshResolution::High,
            active: false,
            draw_calls_frame: 0,
            draw_calls_total: 0,
        }
    }

    /// Binds the texture sampled by flushed meshes (typically the terrain
    /// blendmap).
    pub fn set_texture(&mut self, texture: Texture2D) {
        self.texture = Some(texture);
    }

    /// Opens the batch at `resolution`. A second `begin` without `end` is
    /// ignored.
    pub fn begin(&mut self, resolution: MeshResolution) {
        if self.active {
            return;
        }
        self.active = true;
        self.resolution = resolution;
        self.draw_calls_frame = 0;
    }

    /// Queues one chunk centered at `(center_x, center_y)` with edge
    /// length `scale`. Flushes automatically when the batch fills.
    pub fn draw(&mut self, center_x: f32, center_y: f32, scale: f32) {
        if !self.active {
            return;
        }
        if self.instances.len() >= TERRAIN_BATCH_SIZE {
            self.flush();
        }
        self.instances.push(Instance {
            center_x,
            center_y,
            scale,
        });
    }

    /// Closes the batch, flushing queued instances.
    pub fn end(&mut self) {
        if !self.active {
            return;
        }
        if !self.instances.is_empty() {
            self.flush();
        }
        self.active = false;
    }

    /// Flushes since the last `begin`.
    pub fn draw_calls_frame(&self) -> u32 {
        self.draw_calls_frame
    }

    /// Flushes over the batch lifetime.
    pub fn draw_calls_total(&self) -> u64 {
        self.draw_calls_total
    }

    fn flush(&mut self) {
        // Without a bound texture there is nothing to sample; keep the
        // accounting so culling logic can still be profiled headless.
        if self.texture.is_some() {
            let res = self.resolution.vertices_per_edge();
            let positions = generate_vertices(res);
            let indices = generate_indices(res);
            for instance in &self.instances {
                let vertices: Vec<Vertex> = positions
                    .iter()
                    .map(|&(vx, vy)| {
                        Vertex::new(
                            instance.center_x + vx * instance.scale,
                            instance.center_y + vy * instance.scale,
                            0.0,
                            vx + 0.5,
                            vy + 0.5,
                            WHITE,
                        )
                    })
                    .collect();
                draw_mesh(&Mesh {
                    vertices,
                    indices: indices.clone(),
                    texture: self.texture.clone(),
                });
            }
        }
        self.instances.clear();
        self.draw_calls_frame += 1;
        self.draw_calls_total += 1;
    }
}
