//! Seeded tile shuffling for producing scrambled inputs
//!
//! The shuffle runs over an explicitly seeded generator rather than any
//! process-global random state, so a given seed always yields the same
//! permutation and scrambled output.

use crate::algorithm::distance::PixelField;
use crate::algorithm::solver::copy_tile;
use crate::io::error::{ReconstructionError, Result};
use crate::spatial::grid::TileGrid;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Shuffle the grid's tiles with a seeded Fisher-Yates permutation
///
/// Returns the scrambled field together with the applied permutation:
/// destination position `i` holds source tile `permutation[i]`.
///
/// # Errors
///
/// Returns a range error when the grid disagrees with the field geometry.
pub fn scramble(field: &PixelField, grid: &TileGrid, seed: u64) -> Result<(PixelField, Vec<usize>)> {
    let mut permutation: Vec<usize> = (0..grid.total()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    permutation.shuffle(&mut rng);

    let scrambled = apply_permutation(field, grid, &permutation)?;
    Ok((scrambled, permutation))
}

/// Compose a field placing source tile `permutation[i]` at position `i`
///
/// # Errors
///
/// Returns [`ReconstructionError::TileOutOfRange`] when the permutation's
/// length disagrees with the grid or names a tile outside it.
pub fn apply_permutation(
    field: &PixelField,
    grid: &TileGrid,
    permutation: &[usize],
) -> Result<PixelField> {
    if permutation.len() != grid.total() {
        return Err(ReconstructionError::TileOutOfRange {
            index: permutation.len(),
            total: grid.total(),
        });
    }

    let mut output = PixelField::new(grid.width(), grid.height());
    for (destination, &source) in permutation.iter().enumerate() {
        let from = grid.tile_rect(source)?;
        let to = grid.tile_rect(destination)?;
        copy_tile(field, &from, &mut output, &to);
    }
    Ok(output)
}
