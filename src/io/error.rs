//! Error types for reconstruction operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reconstruction operations
#[derive(Debug)]
pub enum ReconstructionError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a composed image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Image dimensions are incompatible with the configured tile side
    ///
    /// Both dimensions must be nonzero exact multiples of the side so that
    /// the square tiles exhaust the image.
    InvalidGeometry {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
        /// Configured tile side length
        side: u32,
    },

    /// Tile index outside the valid grid domain
    TileOutOfRange {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the grid
        total: usize,
    },

    /// Strip index outside the built strip collection
    StripOutOfRange {
        /// The invalid strip index
        index: usize,
        /// Number of strips in the collection
        total: usize,
    },

    /// Pixel coordinate outside the image bounds
    PixelOutOfRange {
        /// Pixel column
        x: u32,
        /// Pixel row
        y: u32,
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// Compared edge sequences enumerate different pixel counts
    EdgeLengthMismatch {
        /// Length of the first sequence
        left: usize,
        /// Length of the second sequence
        right: usize,
    },

    /// A greedy scan found no unused candidate for a chain position
    ///
    /// Never expected while the grid invariants hold; signals a broken
    /// caller contract rather than a recoverable condition.
    CandidatesExhausted {
        /// Chain position that could not be filled
        position: usize,
    },

    /// CLI target validation failed
    InvalidTarget {
        /// Description of what's wrong with the target
        reason: String,
    },
}

impl fmt::Display for ReconstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidGeometry {
                width,
                height,
                side,
            } => {
                write!(
                    f,
                    "Image dimensions {width}x{height} are not exhausted by {side}x{side} tiles"
                )
            }
            Self::TileOutOfRange { index, total } => {
                write!(f, "Tile index {index} is out of range (grid holds {total})")
            }
            Self::StripOutOfRange { index, total } => {
                write!(
                    f,
                    "Strip index {index} is out of range (collection holds {total})"
                )
            }
            Self::PixelOutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel ({x}, {y}) is outside the {width}x{height} image"
                )
            }
            Self::EdgeLengthMismatch { left, right } => {
                write!(
                    f,
                    "Edge sequences enumerate {left} and {right} pixels; lengths must match"
                )
            }
            Self::CandidatesExhausted { position } => {
                write!(f, "No unused candidate available for chain position {position}")
            }
            Self::InvalidTarget { reason } => {
                write!(f, "Invalid target: {reason}")
            }
        }
    }
}

impl std::error::Error for ReconstructionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, ReconstructionError>;

impl From<image::ImageError> for ReconstructionError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ReconstructionError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid target error
pub fn invalid_target(reason: &impl ToString) -> ReconstructionError {
    ReconstructionError::InvalidTarget {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_context() {
        let geometry = ReconstructionError::InvalidGeometry {
            width: 250,
            height: 240,
            side: 60,
        };
        assert!(geometry.to_string().contains("250x240"));
        assert!(geometry.to_string().contains("60x60"));

        let tile = ReconstructionError::TileOutOfRange {
            index: 16,
            total: 16,
        };
        assert!(tile.to_string().contains("16"));

        let lengths = ReconstructionError::EdgeLengthMismatch {
            left: 60,
            right: 30,
        };
        assert!(lengths.to_string().contains("60"));
        assert!(lengths.to_string().contains("30"));
    }

    #[test]
    fn io_failures_expose_their_source() {
        use std::error::Error;

        let err = ReconstructionError::from(std::io::Error::other("disk gone"));
        assert!(err.source().is_some());

        let geometry = ReconstructionError::InvalidGeometry {
            width: 1,
            height: 1,
            side: 2,
        };
        assert!(geometry.source().is_none());
    }
}
