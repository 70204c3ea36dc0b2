//! CLI entry point for the tile reconstruction tool

use clap::Parser;
use unshred::io::cli::{Cli, FileProcessor};

fn main() -> unshred::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
