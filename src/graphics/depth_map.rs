//! # Depth Maps
//!
//! 8-bit depth maps built from a sampled noise field or the grayscale
//! average of an image, convertible to a texture or exportable as PNG.

use crate::math::NoiseMap;
use crate::{LoamError, LoamResult};
use macroquad::texture::{FilterMode, Image, Texture2D};

/// An 8-bit depth map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthMap {
    cols: usize,
    rows: usize,
    map: Vec<u8>,
}

impl DepthMap {
    /// Builds a depth map from a noise field: each sample is normalized by
    /// the field's baseline and amplitude into `[0, 255]`.
    pub fn from_noise(noise_map: &NoiseMap) -> Self {
        let cols = noise_map.cols();
        let rows = noise_map.rows();
        let mut map = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let n = noise_map.normalized(col as i32, row as i32).clamp(0.0, 1.0);
                map.push((n * 255.0).round() as u8);
            }
        }
        Self { cols, rows, map }
    }

    /// Builds a depth map from an RGBA image by averaging the color
    /// channels per pixel (alpha excluded).
    pub fn from_image(image: &Image) -> LoamResult<Self> {
        let cols = image.width as usize;
        let rows = image.height as usize;
        if image.bytes.len() != cols * rows * 4 {
            return Err(LoamError::InvalidInput(format!(
                "Image byte length {} does not match {}x{} RGBA",
                image.bytes.len(),
                cols,
                rows
            )));
        }
        let map = image
            .bytes
            .chunks_exact(4)
            .map(|px| {
                let sum = px[0] as u32 + px[1] as u32 + px[2] as u32;
                (sum as f32 / 3.0).round() as u8
            })
            .collect();
        Ok(Self { cols, rows, map })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total texel count.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True for a zero-area map.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Depth at `(col, row)`, or `None` when out of bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<u8> {
        if col < self.cols && row < self.rows {
            Some(self.map[row * self.cols + col])
        } else {
            None
        }
    }

    /// Raw depth bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.map
    }

    /// Expands the map into a grayscale RGBA image.
    pub fn to_image(&self) -> Image {
        let mut bytes = Vec::with_capacity(self.map.len() * 4);
        for &d in &self.map {
            bytes.extend_from_slice(&[d, d, d, 255]);
        }
        Image {
            bytes,
            width: self.cols as u16,
            height: self.rows as u16,
        }
    }

    /// Uploads the map as a nearest-filtered grayscale texture.
    pub fn to_texture(&self) -> Texture2D {
        let texture = Texture2D::from_image(&self.to_image());
        texture.set_filter(FilterMode::Nearest);
        texture
    }

    /// Writes the map to disk as a grayscale PNG.
    pub fn to_png(&self, path: &str) {
        self.to_image().export_png(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::NoiseFunction;

    struct Ramp;

    impl NoiseFunction for Ramp {
        fn sample(&self, x: f32, _y: f32) -> f32 {
            (x / 2.0 - 1.0).clamp(-1.0, 1.0)
        }
    }

    #[test]
    fn noise_maps_to_full_byte_range() {
        let noise = NoiseMap::sample(&Ramp, 5, 2, 0.0, 1.0).expect("Failed to sample");
        let depth = DepthMap::from_noise(&noise);
        assert_eq!(depth.cols(), 5);
        assert_eq!(depth.rows(), 2);
        assert_eq!(depth.get(0, 0), Some(0));
        assert_eq!(depth.get(2, 0), Some(128));
        assert_eq!(depth.get(4, 1), Some(255));
        // out of bounds reads as None rather than panicking
        assert_eq!(depth.get(5, 0), None);
        assert_eq!(depth.get(0, 2), None);
    }

    #[test]
    fn image_channels_are_averaged() {
        let image = Image {
            bytes: vec![
                30, 60, 90, 255, // avg 60
                255, 255, 255, 0, // avg 255, alpha ignored
            ],
            width: 2,
            height: 1,
        };
        let depth = DepthMap::from_image(&image).expect("Failed to convert");
        assert_eq!(depth.data(), &[60, 255]);
    }

    #[test]
    fn mismatched_image_length_is_rejected() {
        let image = Image {
            bytes: vec![0; 7],
            width: 2,
            height: 1,
        };
        assert!(DepthMap::from_image(&image).is_err());
    }

    #[test]
    fn grayscale_image_round_trip() {
        let noise = NoiseMap::sample(&Ramp, 3, 1, 5.0, 2.0).expect("Failed to sample");
        let depth = DepthMap::from_noise(&noise);
        let image = depth.to_image();
        assert_eq!(image.width, 3);
        assert_eq!(image.height, 1);
        assert_eq!(image.bytes.len(), 12);
        assert_eq!(&image.bytes[0..4], &[0, 0, 0, 255]);
    }
}
