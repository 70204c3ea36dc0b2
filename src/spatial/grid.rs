//! Tile grid addressing over a fixed square partition
//!
//! Grid dimensions are derived once from the image size and the configured
//! tile side length. Construction enforces the exact-multiple precondition;
//! every address produced afterwards is guaranteed to fall inside the image.

use crate::io::error::{ReconstructionError, Result};

/// Axis-aligned square pixel region covered by a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Leftmost pixel column of the rectangle
    pub x: u32,
    /// Topmost pixel row of the rectangle
    pub y: u32,
    /// Width and height of the rectangle in pixels
    pub side: u32,
}

impl TileRect {
    /// Rightmost pixel column still inside the rectangle
    pub const fn max_x(&self) -> u32 {
        self.x + self.side - 1
    }

    /// Bottommost pixel row still inside the rectangle
    pub const fn max_y(&self) -> u32 {
        self.y + self.side - 1
    }
}

/// Fixed geometry of an image partitioned into square tiles
///
/// Tile indices are linear and row-major: index `n` covers grid column
/// `n % horizontal` and grid row `n / horizontal`. The mapping between
/// indices and rectangles is bijective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    side: u32,
    horizontal: usize,
    vertical: usize,
}

impl TileGrid {
    /// Derive the grid for an image of the given size and tile side length
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::InvalidGeometry`] when the side is
    /// zero, either dimension is zero, or either dimension is not an exact
    /// multiple of the side. Proceeding with inferred dimensions would make
    /// every downstream index meaningless, so nothing is derived on failure.
    pub const fn new(width: u32, height: u32, side: u32) -> Result<Self> {
        if side == 0 || width == 0 || height == 0 || width % side != 0 || height % side != 0 {
            return Err(ReconstructionError::InvalidGeometry {
                width,
                height,
                side,
            });
        }

        Ok(Self {
            width,
            height,
            side,
            horizontal: (width / side) as usize,
            vertical: (height / side) as usize,
        })
    }

    /// Image width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Tile side length in pixels
    pub const fn side(&self) -> u32 {
        self.side
    }

    /// Number of tile columns
    pub const fn horizontal(&self) -> usize {
        self.horizontal
    }

    /// Number of tile rows
    pub const fn vertical(&self) -> usize {
        self.vertical
    }

    /// Total number of tiles in the grid
    pub const fn total(&self) -> usize {
        self.horizontal * self.vertical
    }

    /// Pixel rectangle of the n-th tile
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::TileOutOfRange`] when `index` is not
    /// in `[0, total)`.
    pub const fn tile_rect(&self, index: usize) -> Result<TileRect> {
        if index >= self.total() {
            return Err(ReconstructionError::TileOutOfRange {
                index,
                total: self.total(),
            });
        }

        let column = (index % self.horizontal) as u32;
        let row = (index / self.horizontal) as u32;
        Ok(TileRect {
            x: column * self.side,
            y: row * self.side,
            side: self.side,
        })
    }

    /// Index of the tile containing the given pixel, inverting `tile_rect`
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::PixelOutOfRange`] when the coordinate
    /// lies outside the image.
    pub const fn index_at(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(ReconstructionError::PixelOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let column = (x / self.side) as usize;
        let row = (y / self.side) as usize;
        Ok(row * self.horizontal + column)
    }
}
