//! # Terrain Editing and Display
//!
//! The brush canvas, the culling quadtree, and the blender that turns
//! layer masks into a displayable color map.

pub mod blender;
pub mod canvas;
pub mod quad_tree;
pub mod shaper;

pub use blender::*;
pub use canvas::*;
pub use quad_tree::*;
pub use shaper::*;
