//! Greedy seam-matching reconstruction engine

/// Edge sampling, the seam distance metric, and memoized cost tables
pub mod distance;
/// Reconstruction orchestration and output composition
pub mod solver;
/// Greedy chain construction for strips and strip sets
pub mod strip;
/// Seen-index tracking for greedy chain construction
pub mod used;

pub use solver::{Reconstruction, Reconstructor};
