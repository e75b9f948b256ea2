//! # Sprite Batch
//!
//! A begin/draw/end state machine over macroquad's immediate draws, with
//! sprite and draw-call accounting. Multiple renderers can share one batch;
//! draws outside an active batch are ignored.

use macroquad::color::{Color, WHITE};
use macroquad::math::{Rect, Vec2};
use macroquad::texture::{draw_texture_ex, DrawTextureParams, Texture2D};

/// Default sprites per flush.
pub const DEFAULT_BATCH_CAPACITY: u32 = 512;

/// One drawable sprite: a texture region with placement and tint.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Source region in texel coordinates; `None` draws the full texture.
    pub region: Option<Rect>,
    /// Bottom-left destination in world units
    pub position: Vec2,
    /// Destination size in world units
    pub size: Vec2,
    /// Rotation around the sprite center, radians
    pub rotation: f32,
    /// Tint color
    pub color: Color,
}

impl Sprite {
    /// A full-texture sprite at `position` with `size`, untinted.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            region: None,
            position,
            size,
            rotation: 0.0,
            color: WHITE,
        }
    }
}

/// Sprite batch with draw accounting.
#[derive(Debug)]
pub struct SpriteBatch {
    capacity: u32,
    buffered: u32,
    sprites_frame: u32,
    draw_calls_frame: u32,
    draw_calls_total: u64,
    active: bool,
}

impl Default for SpriteBatch {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_CAPACITY)
    }
}

impl SpriteBatch {
    /// Creates a batch flushing every `capacity` sprites. Capacity is
    /// clamped to at least 1.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity: capacity.max(1),
            buffered: 0,
            sprites_frame: 0,
            draw_calls_frame: 0,
            draw_calls_total: 0,
            active: false,
        }
    }

    /// Opens the batch and resets the per-frame counters. A second
    /// `begin` without `end` is ignored.
    pub fn begin(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.sprites_frame = 0;
        self.draw_calls_frame = 0;
    }

    /// Draws a sprite. Ignored when the batch is not active.
    pub fn draw(&mut self, texture: &Texture2D, sprite: &Sprite) {
        if !self.account() {
            return;
        }
        draw_texture_ex(
            texture,
            sprite.position.x,
            sprite.position.y,
            sprite.color,
            DrawTextureParams {
                dest_size: Some(sprite.size),
                source: sprite.region,
                rotation: sprite.rotation,
                ..Default::default()
            },
        );
    }

    /// Closes the batch, flushing any buffered sprites.
    pub fn end(&mut self) {
        if !self.active {
            return;
        }
        if self.buffered > 0 {
            self.flush();
        }
        self.active = false;
    }

    /// True between `begin` and `end`.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sprites drawn since the last `begin`.
    pub fn sprites_frame(&self) -> u32 {
        self.sprites_frame
    }

    /// Flushes since the last `begin`.
    pub fn draw_calls_frame(&self) -> u32 {
        self.draw_calls_frame
    }

    /// Flushes over the batch lifetime.
    pub fn draw_calls_total(&self) -> u64 {
        self.draw_calls_total
    }

    // Returns false when inactive; otherwise counts the sprite and
    // auto-flushes on overflow.
    fn account(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if self.buffered >= self.capacity {
            self.flush();
        }
        self.buffered += 1;
        self.sprites_frame += 1;
        true
    }

    fn flush(&mut self) {
        self.buffered = 0;
        self.draw_calls_frame += 1;
        self.draw_calls_total += 1;
    }
}
