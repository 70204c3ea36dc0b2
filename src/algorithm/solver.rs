//! Reconstruction orchestration over all candidate seeds
//!
//! The orchestrator runs the two-level greedy search exhaustively: one strip
//! per tile seed, one strip set per strip seed, then a stable single-pass
//! minimum over the combined costs. Seeds are evaluated in ascending order
//! and only a strictly smaller cost displaces the incumbent, so repeated
//! runs over the same pixels produce bit-identical mappings.

use crate::algorithm::distance::{EdgeCosts, PixelField, Sample, edge_samples, sequence_distance};
use crate::algorithm::strip::{Strip, StripSet};
use crate::io::error::{ReconstructionError, Result};
use crate::spatial::edge::Edge;
use crate::spatial::grid::{TileGrid, TileRect};

/// Greedy seam-matching engine over one scrambled tile image
///
/// Owns the decoded pixel field, the derived grid geometry, and the
/// memoized seam-cost tables; all of them are fixed for the lifetime of the
/// engine, so any number of searches over the same image stay consistent.
pub struct Reconstructor {
    field: PixelField,
    grid: TileGrid,
    costs: EdgeCosts,
}

impl Reconstructor {
    /// Validate geometry and measure all pairwise seam costs up front
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::InvalidGeometry`] when the field's
    /// dimensions are not nonzero exact multiples of `side`.
    pub fn new(field: PixelField, side: u32) -> Result<Self> {
        let grid = TileGrid::new(field.width(), field.height(), side)?;
        let costs = EdgeCosts::measure(&field, &grid)?;
        Ok(Self { field, grid, costs })
    }

    /// Grid geometry derived from the field and tile side
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Memoized pairwise seam-cost tables
    pub const fn costs(&self) -> &EdgeCosts {
        &self.costs
    }

    /// The decoded source pixels, read-only during reconstruction
    pub const fn field(&self) -> &PixelField {
        &self.field
    }

    /// Ordered boundary colors of one tile edge
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::TileOutOfRange`] for an invalid tile
    /// index.
    pub fn edge_samples(&self, tile: usize, edge: Edge) -> Result<Vec<Sample>> {
        let rect = self.grid.tile_rect(tile)?;
        Ok(edge_samples(&self.field, &rect, edge))
    }

    /// Seam cost between arbitrary edges of two tiles
    ///
    /// The metric does not check that the edges face each other; pairing
    /// right against left and bottom against top is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::TileOutOfRange`] for an invalid tile
    /// index, or [`ReconstructionError::EdgeLengthMismatch`] if the edges
    /// enumerate different pixel counts.
    pub fn tile_edge_distance(
        &self,
        a: usize,
        edge_a: Edge,
        b: usize,
        edge_b: Edge,
    ) -> Result<f64> {
        let first = self.edge_samples(a, edge_a)?;
        let second = self.edge_samples(b, edge_b)?;
        sequence_distance(&first, &second)
    }

    /// Build the greedy strip seeded at the given tile
    ///
    /// # Errors
    ///
    /// Propagates the strip builder's seed and invariant failures.
    pub fn build_strip(&self, seed: usize) -> Result<Strip> {
        Strip::build(&self.grid, &self.costs, seed)
    }

    /// Build every strip, one per tile seed, in seed order
    ///
    /// # Errors
    ///
    /// Propagates the first strip builder failure.
    pub fn build_strips(&self) -> Result<Vec<Strip>> {
        (0..self.grid.total())
            .map(|seed| self.build_strip(seed))
            .collect()
    }

    /// Build the greedy strip set seeded at the given strip index
    ///
    /// # Errors
    ///
    /// Propagates the strip-set builder's seed and invariant failures.
    pub fn build_strip_set(&self, strips: &[Strip], seed: usize) -> Result<StripSet> {
        StripSet::build(&self.grid, &self.costs, strips, seed)
    }

    /// Evaluate every strip-set seed and keep the cheapest arrangement
    ///
    /// # Errors
    ///
    /// Propagates builder failures, or reports exhausted candidates when
    /// the strip collection is empty.
    pub fn select_arrangement(&self, strips: &[Strip]) -> Result<Reconstruction> {
        let mut best: Option<(f64, StripSet)> = None;
        for seed in 0..strips.len() {
            let set = self.build_strip_set(strips, seed)?;
            let combined = set.combined_cost(strips);
            if best.as_ref().is_none_or(|(current, _)| combined < *current) {
                best = Some((combined, set));
            }
        }

        let (cost, set) = best.ok_or(ReconstructionError::CandidatesExhausted { position: 0 })?;
        Reconstruction::from_strip_set(&self.grid, strips, &set, cost)
    }

    /// Run the full two-level search
    ///
    /// # Errors
    ///
    /// Propagates any builder or selection failure.
    pub fn reconstruct(&self) -> Result<Reconstruction> {
        let strips = self.build_strips()?;
        self.select_arrangement(&strips)
    }

    /// Materialize the reconstructed pixel buffer
    ///
    /// Copies each source tile rectangle into its destination rectangle.
    /// The mapping remains the authoritative result; this buffer is a
    /// convenience for encoding.
    ///
    /// # Errors
    ///
    /// Returns a range error when the mapping disagrees with the grid.
    pub fn compose(&self, reconstruction: &Reconstruction) -> Result<PixelField> {
        let mut output = PixelField::new(self.grid.width(), self.grid.height());
        for destination in 0..self.grid.total() {
            let source = reconstruction.source_for(destination)?;
            let from = self.grid.tile_rect(source)?;
            let to = self.grid.tile_rect(destination)?;
            copy_tile(&self.field, &from, &mut output, &to);
        }
        Ok(output)
    }
}

/// Copy one tile-sized pixel block between fields
pub fn copy_tile(source: &PixelField, from: &TileRect, target: &mut PixelField, to: &TileRect) {
    let side = from.side.min(to.side);
    for dy in 0..side {
        for dx in 0..side {
            let pixel = *source.get_pixel(from.x + dx, from.y + dy);
            target.put_pixel(to.x + dx, to.y + dy, pixel);
        }
    }
}

/// Destination-to-source tile mapping chosen by the search
///
/// `mapping()[i]` names the source tile whose pixels belong at destination
/// grid position `(i % horizontal, i / horizontal)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    mapping: Vec<usize>,
    cost: f64,
}

impl Reconstruction {
    fn from_strip_set(
        grid: &TileGrid,
        strips: &[Strip],
        set: &StripSet,
        cost: f64,
    ) -> Result<Self> {
        let mut mapping = Vec::with_capacity(grid.total());
        for &strip_index in set.strips() {
            let strip = strips
                .get(strip_index)
                .ok_or(ReconstructionError::StripOutOfRange {
                    index: strip_index,
                    total: strips.len(),
                })?;
            mapping.extend_from_slice(strip.tiles());
        }
        Ok(Self { mapping, cost })
    }

    /// Destination-to-source tile indices in row-major order
    pub fn mapping(&self) -> &[usize] {
        &self.mapping
    }

    /// Combined seam cost of the selected arrangement
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Source tile index for one destination position
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::TileOutOfRange`] for a destination
    /// outside the mapping.
    pub fn source_for(&self, destination: usize) -> Result<usize> {
        self.mapping
            .get(destination)
            .copied()
            .ok_or(ReconstructionError::TileOutOfRange {
                index: destination,
                total: self.mapping.len(),
            })
    }
}
