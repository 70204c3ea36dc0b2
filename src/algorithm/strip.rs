//! Greedy chain construction for rows of tiles and stacks of rows
//!
//! Both levels of the search share one shape: start from a seed, then
//! repeatedly take the unused candidate with the cheapest seam against the
//! chain's current tail. Scans run in ascending index order and keep the
//! first strict minimum, so equal costs always resolve to the lowest index
//! and the search stays deterministic.

use crate::algorithm::distance::EdgeCosts;
use crate::algorithm::used::UsedSet;
use crate::io::error::{ReconstructionError, Result};
use crate::spatial::grid::TileGrid;

/// A left-to-right run of tiles spanning one grid row's width
///
/// Holds exactly `horizontal` distinct tile indices plus the accumulated
/// cost of the seams used to chain them. Immutable once built.
#[derive(Debug, Clone)]
pub struct Strip {
    tiles: Vec<usize>,
    cost: f64,
}

impl Strip {
    /// Greedily chain tiles rightward from the seed tile
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::TileOutOfRange`] for a seed outside
    /// the grid, or [`ReconstructionError::CandidatesExhausted`] if a chain
    /// position finds no unused tile, impossible while the grid invariant
    /// `total = horizontal * vertical` holds.
    pub fn build(grid: &TileGrid, costs: &EdgeCosts, seed: usize) -> Result<Self> {
        let total = grid.total();
        if seed >= total {
            return Err(ReconstructionError::TileOutOfRange { index: seed, total });
        }

        let mut used = UsedSet::new(total);
        used.insert(seed);

        let mut tiles = Vec::with_capacity(grid.horizontal());
        tiles.push(seed);
        let mut cost = 0.0;

        for position in 1..grid.horizontal() {
            let tail = tiles.last().copied().unwrap_or(seed);
            let (winner, seam) =
                nearest_unused(total, &used, |candidate| costs.horizontal(tail, candidate))
                    .ok_or(ReconstructionError::CandidatesExhausted { position })?;

            tiles.push(winner);
            cost += seam;
            used.insert(winner);
        }

        Ok(Self { tiles, cost })
    }

    /// Tile indices in left-to-right order
    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    /// Accumulated cost of the seams inside this strip
    pub const fn cost(&self) -> f64 {
        self.cost
    }
}

/// A top-to-bottom stack of strips spanning the full grid height
///
/// Holds exactly `vertical` distinct indices into the shared strip
/// collection plus the accumulated cross-strip seam cost. The collection
/// holds one strip per tile seed, so different strip sets may pick the same
/// strip as a candidate; only indices within one set are distinct.
#[derive(Debug, Clone)]
pub struct StripSet {
    strips: Vec<usize>,
    cross_cost: f64,
}

impl StripSet {
    /// Greedily stack strips downward from the seed strip
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::StripOutOfRange`] for a seed outside
    /// the collection, or [`ReconstructionError::CandidatesExhausted`] if a
    /// stack position finds no unused strip.
    pub fn build(
        grid: &TileGrid,
        costs: &EdgeCosts,
        strips: &[Strip],
        seed: usize,
    ) -> Result<Self> {
        if seed >= strips.len() {
            return Err(ReconstructionError::StripOutOfRange {
                index: seed,
                total: strips.len(),
            });
        }

        let mut used = UsedSet::new(strips.len());
        used.insert(seed);

        let mut sequence = Vec::with_capacity(grid.vertical());
        sequence.push(seed);
        let mut cross_cost = 0.0;

        for position in 1..grid.vertical() {
            let tail = sequence.last().copied().unwrap_or(seed);
            let upper = strips
                .get(tail)
                .ok_or(ReconstructionError::StripOutOfRange {
                    index: tail,
                    total: strips.len(),
                })?;

            let (winner, seam) = nearest_unused(strips.len(), &used, |candidate| {
                strips
                    .get(candidate)
                    .map_or(f64::INFINITY, |lower| strip_distance(costs, upper, lower))
            })
            .ok_or(ReconstructionError::CandidatesExhausted { position })?;

            sequence.push(winner);
            cross_cost += seam;
            used.insert(winner);
        }

        Ok(Self {
            strips: sequence,
            cross_cost,
        })
    }

    /// Strip indices in top-to-bottom order
    pub fn strips(&self) -> &[usize] {
        &self.strips
    }

    /// Accumulated cost of the seams between adjacent strips
    pub const fn cross_cost(&self) -> f64 {
        self.cross_cost
    }

    /// Cross-strip cost plus every member strip's own cached cost
    ///
    /// This is the score the orchestrator ranks arrangements by: vertical
    /// seams plus the horizontal seams baked into each selected strip.
    pub fn combined_cost(&self, strips: &[Strip]) -> f64 {
        let member_cost: f64 = self
            .strips
            .iter()
            .map(|&index| strips.get(index).map_or(0.0, Strip::cost))
            .sum();
        self.cross_cost + member_cost
    }
}

/// Column-wise seam cost between two vertically adjacent strips
fn strip_distance(costs: &EdgeCosts, upper: &Strip, lower: &Strip) -> f64 {
    upper
        .tiles()
        .iter()
        .zip(lower.tiles().iter())
        .map(|(&a, &b)| costs.vertical(a, b))
        .sum()
}

/// Ascending scan over unused indices keeping the first strict minimum
fn nearest_unused(
    total: usize,
    used: &UsedSet,
    cost_of: impl Fn(usize) -> f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for candidate in 0..total {
        if used.contains(candidate) {
            continue;
        }
        let cost = cost_of(candidate);
        if best.is_none_or(|(_, current)| cost < current) {
            best = Some((candidate, cost));
        }
    }
    best
}
