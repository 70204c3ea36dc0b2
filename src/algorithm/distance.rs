//! Edge sampling and the seam distance metric
//!
//! Colors are compared at full 16-bit sample precision rather than truncated
//! bytes, so narrow-depth sources cannot introduce a systematic quantization
//! bias into the seam ranking. Distances aggregate L2-of-L2: per-channel
//! squared differences roll up into a per-pixel distance, and squared
//! per-pixel distances roll up into the edge distance. A few large local
//! mismatches therefore cost more than many small ones.

use crate::io::error::{ReconstructionError, Result};
use crate::spatial::edge::Edge;
use crate::spatial::grid::{TileGrid, TileRect};
use image::{ImageBuffer, Rgba};
use ndarray::Array2;

/// Decoded source image widened to 16-bit RGBA samples
pub type PixelField = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// One sampled color as four full-precision channels
pub type Sample = [f64; 4];

/// Euclidean distance between two colors across all four channels
pub fn color_distance(a: Sample, b: Sample) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// L2 aggregation of positionwise color distances between two sequences
///
/// # Errors
///
/// Returns [`ReconstructionError::EdgeLengthMismatch`] when the sequences
/// enumerate different pixel counts; comparing them positionwise would be
/// geometrically meaningless.
pub fn sequence_distance(a: &[Sample], b: &[Sample]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ReconstructionError::EdgeLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let total = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = color_distance(*x, *y);
            d * d
        })
        .sum::<f64>();
    Ok(total.sqrt())
}

/// Sample the boundary pixels of one tile edge in traversal order
pub fn edge_samples(field: &PixelField, rect: &TileRect, edge: Edge) -> Vec<Sample> {
    edge.trace(rect)
        .map(|(x, y)| {
            let Rgba(channels) = *field.get_pixel(x, y);
            [
                f64::from(channels[0]),
                f64::from(channels[1]),
                f64::from(channels[2]),
                f64::from(channels[3]),
            ]
        })
        .collect()
}

/// Memoized pairwise seam costs between all tile pairs
///
/// `horizontal(a, b)` is the cost of placing tile `b` immediately to the
/// right of tile `a`; `vertical(a, b)` of placing `b` immediately below `a`.
/// Measuring every pair once up front turns the inner loops of the greedy
/// search into table lookups.
#[derive(Debug, Clone)]
pub struct EdgeCosts {
    right_left: Array2<f64>,
    bottom_top: Array2<f64>,
}

impl EdgeCosts {
    /// Measure every pairwise seam cost for the given field and grid
    ///
    /// # Errors
    ///
    /// Returns an error when a tile rectangle cannot be addressed or a pair
    /// of facing edges enumerates mismatched pixel counts; neither occurs
    /// while the grid invariants hold.
    pub fn measure(field: &PixelField, grid: &TileGrid) -> Result<Self> {
        let total = grid.total();

        let mut rights = Vec::with_capacity(total);
        let mut lefts = Vec::with_capacity(total);
        let mut bottoms = Vec::with_capacity(total);
        let mut tops = Vec::with_capacity(total);
        for index in 0..total {
            let rect = grid.tile_rect(index)?;
            rights.push(edge_samples(field, &rect, Edge::Right));
            lefts.push(edge_samples(field, &rect, Edge::Left));
            bottoms.push(edge_samples(field, &rect, Edge::Bottom));
            tops.push(edge_samples(field, &rect, Edge::Top));
        }

        let mut right_left = Array2::zeros((total, total));
        let mut bottom_top = Array2::zeros((total, total));
        for (a, right) in rights.iter().enumerate() {
            for (b, left) in lefts.iter().enumerate() {
                let cost = sequence_distance(right, left)?;
                if let Some(slot) = right_left.get_mut((a, b)) {
                    *slot = cost;
                }
            }
        }
        for (a, bottom) in bottoms.iter().enumerate() {
            for (b, top) in tops.iter().enumerate() {
                let cost = sequence_distance(bottom, top)?;
                if let Some(slot) = bottom_top.get_mut((a, b)) {
                    *slot = cost;
                }
            }
        }

        Ok(Self {
            right_left,
            bottom_top,
        })
    }

    /// Seam cost of placing `right` immediately to the right of `left`
    ///
    /// Out-of-range pairs report an infinite cost, so they can never win a
    /// greedy scan.
    pub fn horizontal(&self, left: usize, right: usize) -> f64 {
        self.right_left
            .get((left, right))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Seam cost of placing `lower` immediately below `upper`
    pub fn vertical(&self, upper: usize, lower: usize) -> f64 {
        self.bottom_top
            .get((upper, lower))
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_distance_is_zero_for_identical_colors_and_symmetric() {
        let a = [12.0, 900.0, 65535.0, 7.0];
        let b = [11.0, 890.0, 65000.0, 7.0];

        assert!(color_distance(a, a).abs() < f64::EPSILON);
        assert!((color_distance(a, b) - color_distance(b, a)).abs() < f64::EPSILON);
    }

    #[test]
    fn color_distance_matches_the_euclidean_form() {
        let a = [3.0, 0.0, 0.0, 0.0];
        let b = [0.0, 4.0, 0.0, 0.0];

        assert!((color_distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn sequence_distance_rejects_mismatched_lengths() {
        let a = vec![[0.0; 4]; 60];
        let b = vec![[0.0; 4]; 30];

        assert!(matches!(
            sequence_distance(&a, &b),
            Err(ReconstructionError::EdgeLengthMismatch {
                left: 60,
                right: 30
            })
        ));
    }

    #[test]
    fn sequence_distance_is_zero_only_for_identical_sequences() {
        let a = vec![[5.0, 6.0, 7.0, 8.0]; 4];
        let mut b = a.clone();

        let identical = sequence_distance(&a, &b).ok();
        assert!(identical.is_some_and(|d| d.abs() < f64::EPSILON));

        if let Some(sample) = b.get_mut(2) {
            *sample = [5.0, 6.0, 7.0, 9.0];
        }
        let perturbed = sequence_distance(&a, &b).ok();
        assert!(perturbed.is_some_and(|d| d > 0.0));
    }

    #[test]
    fn sequence_distance_penalizes_concentrated_mismatch_harder() {
        let base = vec![[0.0; 4]; 4];
        // Same total per-pixel deviation, spread versus concentrated.
        let spread = vec![[1.0, 0.0, 0.0, 0.0]; 4];
        let mut concentrated = vec![[0.0; 4]; 4];
        if let Some(sample) = concentrated.get_mut(0) {
            *sample = [4.0, 0.0, 0.0, 0.0];
        }

        let spread_distance = sequence_distance(&base, &spread).ok();
        let concentrated_distance = sequence_distance(&base, &concentrated).ok();
        assert!(
            spread_distance
                .zip(concentrated_distance)
                .is_some_and(|(s, c)| c > s)
        );
    }
}
