//! # Noise Maps
//!
//! The [`NoiseFunction`] trait plus adapters for the `noise` crate, and
//! [`NoiseMap`]: a sampled 2D field with a baseline and amplitude that the
//! depth-map and terrain code consume.

use crate::storage::Grid2D;
use crate::{LoamError, LoamResult};
use noise::{Fbm, NoiseFn, Perlin};

/// A 2D noise source.
///
/// Implementations must return values in `[-1.0, 1.0]`.
pub trait NoiseFunction {
    /// Samples the field at `(x, y)`.
    fn sample(&self, x: f32, y: f32) -> f32;
}

/// Perlin noise scaled by `frequency`, seeded.
pub struct PerlinNoise {
    inner: Perlin,
    frequency: f32,
}

impl PerlinNoise {
    /// Creates a seeded Perlin source.
    pub fn new(seed: u32, frequency: f32) -> Self {
        Self {
            inner: Perlin::new(seed),
            frequency,
        }
    }
}

impl NoiseFunction for PerlinNoise {
    fn sample(&self, x: f32, y: f32) -> f32 {
        let v = self
            .inner
            .get([(x * self.frequency) as f64, (y * self.frequency) as f64]);
        (v as f32).clamp(-1.0, 1.0)
    }
}

/// Fractal brownian motion over Perlin octaves.
pub struct FbmNoise {
    inner: Fbm<Perlin>,
    frequency: f32,
}

impl FbmNoise {
    /// Creates a seeded fBm source.
    pub fn new(seed: u32, frequency: f32) -> Self {
        Self {
            inner: Fbm::new(seed),
            frequency,
        }
    }
}

impl NoiseFunction for FbmNoise {
    fn sample(&self, x: f32, y: f32) -> f32 {
        let v = self
            .inner
            .get([(x * self.frequency) as f64, (y * self.frequency) as f64]);
        (v as f32).clamp(-1.0, 1.0)
    }
}

/// A noise field sampled into a grid.
///
/// `baseline` shifts the field and `amplitude` scales it, so a stored sample
/// `s` represents `baseline + s`, with `s` in `[-amplitude, amplitude]`.
pub struct NoiseMap {
    samples: Grid2D<f32>,
    baseline: f32,
    amplitude: f32,
}

impl NoiseMap {
    /// Samples `noise` over a `cols x rows` region.
    ///
    /// Returns an error for a zero-area region or a non-positive amplitude.
    pub fn sample<N: NoiseFunction>(
        noise: &N,
        cols: usize,
        rows: usize,
        baseline: f32,
        amplitude: f32,
    ) -> LoamResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(LoamError::InvalidInput(format!(
                "Noise map region must be non-empty, got {}x{}",
                cols, rows
            )));
        }
        if amplitude <= 0.0 {
            return Err(LoamError::InvalidInput(format!(
                "Noise map amplitude must be positive, got {}",
                amplitude
            )));
        }
        let mut samples = Grid2D::new(cols, rows, 0.0f32);
        for row in 0..rows {
            for col in 0..cols {
                let n = noise.sample(col as f32, row as f32);
                samples.set(col as i32, row as i32, n * amplitude);
            }
        }
        Ok(Self {
            samples,
            baseline,
            amplitude,
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.samples.cols()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.samples.rows()
    }

    /// The baseline the field oscillates around.
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Maximum deviation from the baseline.
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// The absolute field value at `(col, row)`: baseline plus sample.
    pub fn value(&self, col: i32, row: i32) -> f32 {
        self.baseline + self.samples.get(col, row).copied().unwrap_or(0.0)
    }

    /// The sample mapped into `[0, 1]`:
    /// `((value - baseline) / amplitude + 1) / 2`.
    pub fn normalized(&self, col: i32, row: i32) -> f32 {
        let s = self.samples.get(col, row).copied().unwrap_or(0.0);
        ((s / self.amplitude) + 1.0) / 2.0
    }

    /// The raw sample grid (deviations from the baseline).
    pub fn samples(&self) -> &Grid2D<f32> {
        &self.samples
    }
}
