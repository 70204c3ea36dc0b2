//! Spatial addressing for the fixed tile partition
//!
//! This module contains the geometry half of the engine:
//! - Tile grid construction and index/rectangle addressing
//! - Edge traversal conventions for boundary comparison

/// Edge descriptors and boundary coordinate traversal
pub mod edge;
/// Tile grid addressing and geometry validation
pub mod grid;

pub use grid::TileGrid;
