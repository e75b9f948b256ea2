//! # Common Module
//!
//! Shared helpers used by every other layer: grid adjacency, bit math,
//! and file I/O utilities. This module has no intra-crate dependencies.

pub mod bits;
pub mod file;

pub use bits::*;
pub use file::*;

/// Offsets of the 8 cells adjacent to a grid cell.
///
/// Order is fixed: the left column top-to-bottom, then the middle column
/// (skipping the center), then the right column.
pub const ADJACENT_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
