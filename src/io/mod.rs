//! Input/output operations and error handling

/// Command-line interface for batch processing image files
pub mod cli;
/// Engine defaults and output naming configuration
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// Image decoding to 16-bit samples and output export
pub mod image;
/// Progress display for batch reconstruction
pub mod progress;
/// Seeded tile shuffling for producing scrambled inputs
pub mod scramble;
