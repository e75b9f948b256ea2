//! # Storage Module
//!
//! Data containers shared by the engine layers: row-major 2D grids, a
//! mask grid with bitwise write operations, and an indexed binary heap
//! with decrease-key support for the pathfinder's open set.

pub mod grid;
pub mod heap;

pub use grid::*;
pub use heap::*;
