//! # Grid Points
//!
//! Integer cell coordinates with Chebyshev distance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    /// Creates a point at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Minimum number of discrete moves to `other`, diagonals allowed
    /// (Chebyshev distance).
    pub fn distance(&self, other: GridPoint) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx.max(dy)
    }

    /// The point offset by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> GridPoint {
        GridPoint::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        GridPoint::new(x, y)
    }
}
