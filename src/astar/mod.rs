//! # Astar Module
//!
//! Grid pathfinding: the A* search itself, path requests with poll-able
//! tickets, and a threaded request service with per-request priorities.
//!
//! Searches run over any [`SearchArea`]. Diagonal steps cost 14 and
//! orthogonal steps 10, and a diagonal move is only legal when both
//! neighboring orthogonal cells are traversable (no corner cutting).

pub mod request;
pub mod search;
pub mod service;

pub use request::*;
pub use search::*;
pub use service::*;

/// A searchable grid area.
///
/// Implementations define which cells can be entered and how expensive
/// they are beyond the base step cost.
pub trait SearchArea {
    /// True if the cell at `(x, y)` can be entered. Coordinates outside
    /// the area must report false.
    fn traversable(&self, x: i32, y: i32) -> bool;

    /// Extra cost for entering `(x, y)`. Only called for traversable
    /// cells, so implementations need not bounds-check.
    fn movement_penalty(&self, _x: i32, _y: i32) -> i32 {
        0
    }

    /// Total cell count (`rows * cols`), used to size the search
    /// containers.
    fn area_size(&self) -> usize;
}
