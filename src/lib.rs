//! # Loam Engine
//!
//! A 2D tile-based terrain engine with asynchronous A* pathfinding.
//!
//! ## Architecture Overview
//!
//! Loam is organized as a stack of small modules, each depending only on the
//! layers beneath it:
//!
//! - **Common**: shared helpers (grid adjacency, bit math, file I/O)
//! - **Storage**: data containers (2D grids, mask grids, indexed heap)
//! - **Math**: noise functions, sampled noise maps, interpolation
//! - **Utility**: grid coordinates and view-culling quadtrees
//! - **Core**: fixed-timestep engine loop, application lifecycle, input
//! - **Graphics**: sprite/terrain batching and depth maps over macroquad
//! - **Astar**: grid pathfinding with a threaded request service
//! - **Tilemap**: terrain layers, brush painting, culling, blending
//!
//! ## Pathfinding Service
//!
//! Path searches can run synchronously on the caller or be submitted to a
//! worker pool with per-request priorities. Submitted requests hand back a
//! ticket that the game loop polls without blocking.

pub mod astar;
pub mod common;
pub mod core;
pub mod graphics;
pub mod math;
pub mod storage;
pub mod tilemap;
pub mod utility;

// Core module re-exports
pub use astar::{PathRequest, PathResult, PathTicket, RequestService, SearchArea, SharedArea};
pub use core::{Application, Engine, Keyboard, Mouse, Time, WindowConfig};
pub use graphics::{DepthMap, MeshResolution, SpriteBatch, TerrainBatch};
pub use math::{FbmNoise, NoiseFunction, NoiseMap, PerlinNoise};
pub use storage::{Grid2D, IndexedHeap, MaskGrid, WriteOp};
pub use tilemap::{
    MapSize, TerrainBlender, TerrainCanvas, TerrainQuadTree, TerrainShaper, TerrainType,
};
pub use utility::{GridPoint, QuadTree};

/// Core error type for the Loam engine.
#[derive(thiserror::Error, Debug)]
pub enum LoamError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Engine or module state is invalid
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Caller-supplied input is invalid
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Procedural generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Loam codebase.
pub type LoamResult<T> = Result<T, LoamError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Default updates per second for the fixed-timestep loop
    pub const DEFAULT_TARGET_UPS: u32 = 60;

    /// Default frames per second cap when vsync is off
    pub const DEFAULT_TARGET_FPS: u32 = 60;

    /// Default window width in pixels
    pub const DEFAULT_WINDOW_WIDTH: i32 = 1280;

    /// Default window height in pixels
    pub const DEFAULT_WINDOW_HEIGHT: i32 = 720;

    /// Maximum worker threads for the pathfinding service
    pub const MAX_PATHFINDER_THREADS: usize = 8;

    /// Instances per terrain batch flush
    pub const TERRAIN_BATCH_SIZE: usize = 32;
}
