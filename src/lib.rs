//! Greedy seam-matching reconstruction of images scrambled into square tiles
//!
//! The engine addresses tiles on a fixed grid, samples their boundary pixels,
//! and rebuilds the picture by chaining tiles into horizontal strips and
//! strips into a full arrangement, always taking the nearest unused candidate
//! under a seam distance metric.

#![forbid(unsafe_code)]

/// Seam metric, greedy chain construction, and reconstruction orchestration
pub mod algorithm;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Tile grid addressing and edge traversal conventions
pub mod spatial;

pub use io::error::{ReconstructionError, Result};
