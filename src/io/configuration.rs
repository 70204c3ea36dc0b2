//! Engine defaults and output naming configuration

/// Default side length of the square tiles in pixels
///
/// Matches the sub-square geometry the tool was originally built around;
/// override per invocation with `--side`.
pub const DEFAULT_TILE_SIDE: u32 = 60;

/// Fixed seed for reproducible scrambling
pub const DEFAULT_SEED: u64 = 42;

/// Suffix added to reconstructed output filenames
pub const RESTORED_SUFFIX: &str = "_restored";

/// Suffix added to scrambled output filenames
pub const SCRAMBLED_SUFFIX: &str = "_scrambled";

/// Input extensions accepted by the batch processor
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
