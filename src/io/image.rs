//! Image decoding to 16-bit samples and output export

use crate::algorithm::distance::PixelField;
use crate::io::error::{ReconstructionError, Result};
use std::path::Path;

/// Load an image and widen it to 16-bit RGBA samples
///
/// Narrow-depth sources are widened losslessly, so the seam metric always
/// operates at full sample precision regardless of the input format.
///
/// # Errors
///
/// Returns [`ReconstructionError::ImageLoad`] when the file cannot be read
/// or decoded.
pub fn load_field<P: AsRef<Path>>(path: P) -> Result<PixelField> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| ReconstructionError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(img.to_rgba16())
}

/// Save a pixel field as PNG, creating parent directories as needed
///
/// PNG keeps the 16-bit samples lossless; re-encoding reconstruction output
/// through a lossy format would reintroduce seam noise.
///
/// # Errors
///
/// Returns [`ReconstructionError::FileSystem`] when the parent directory
/// cannot be created, or [`ReconstructionError::ImageExport`] when encoding
/// fails.
pub fn save_field(field: &PixelField, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ReconstructionError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    field.save(path).map_err(|e| ReconstructionError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
