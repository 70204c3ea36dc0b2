//! Command-line interface for batch processing scrambled image files

use crate::algorithm::solver::Reconstructor;
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_TILE_SIDE, RESTORED_SUFFIX, SCRAMBLED_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, invalid_target};
use crate::io::image::{load_field, save_field};
use crate::io::progress::ProgressManager;
use crate::io::scramble::scramble;
use crate::spatial::grid::TileGrid;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "unshred")]
#[command(
    author,
    version,
    about = "Reconstruct images scrambled into square tiles"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Side length of the square tiles in pixels
    #[arg(short = 't', long, default_value_t = DEFAULT_TILE_SIDE)]
    pub side: u32,

    /// Scramble the input instead of reconstructing it
    #[arg(short = 'x', long)]
    pub scramble: bool,

    /// Random seed for the scramble permutation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Suffix applied to this invocation's output filenames
    pub const fn output_suffix(&self) -> &'static str {
        if self.scramble {
            SCRAMBLED_SUFFIX
        } else {
            RESTORED_SUFFIX
        }
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_target(&"Target file must be a PNG or JPEG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_supported(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(
                &"Target must be an image file or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = output_path_for(input_path, self.cli.output_suffix());
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let output_path = output_path_for(input_path, self.cli.output_suffix());
        let field = load_field(input_path)?;

        if self.cli.scramble {
            let grid = TileGrid::new(field.width(), field.height(), self.cli.side)?;
            let (scrambled, _) = scramble(&field, &grid, self.cli.seed)?;
            save_field(&scrambled, &output_path)?;
        } else {
            let solver = Reconstructor::new(field, self.cli.side)?;
            let total = solver.grid().total();

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(input_path, total);
            }

            let mut strips = Vec::with_capacity(total);
            for seed in 0..total {
                strips.push(solver.build_strip(seed)?);
                if let Some(ref pm) = self.progress_manager {
                    pm.update_seed(seed);
                }
            }

            if let Some(ref pm) = self.progress_manager {
                pm.start_selection();
            }
            let reconstruction = solver.select_arrangement(&strips)?;

            let composed = solver.compose(&reconstruction)?;
            save_field(&composed, &output_path)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| extension.eq_ignore_ascii_case(supported))
        })
}

/// Output path for an input file: same directory, suffixed stem, PNG
pub fn output_path_for(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{suffix}.png", stem.to_string_lossy());

    input_path
        .parent()
        .map_or_else(|| PathBuf::from(&output_name), |parent| parent.join(&output_name))
}
