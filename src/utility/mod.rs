//! # Utility Module
//!
//! Grid coordinates and the view-culling quadtree.

pub mod grid_point;
pub mod quad_tree;

pub use grid_point::*;
pub use quad_tree::*;
