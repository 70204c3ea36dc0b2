//! Progress display for batch reconstruction

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch reconstruction
///
/// Files process sequentially, so one bar tracks the active file's seed
/// progress while an optional batch bar counts completed files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bar: None,
        }
    }

    /// Initialize the batch bar when more than one file is queued
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start a per-file bar tracking the given number of search seeds
    pub fn start_file(&mut self, path: &Path, seeds: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bar = ProgressBar::new(seeds as u64);
        bar.set_style(FILE_STYLE.clone());
        bar.set_prefix(display_name);
        bar.set_message("chaining strips");
        self.file_bar = Some(self.multi_progress.add(bar));
    }

    /// Report one completed seed for the active file
    pub fn update_seed(&self, seed: usize) {
        if let Some(ref bar) = self.file_bar {
            bar.set_position(seed as u64 + 1);
        }
    }

    /// Switch the active file's bar to the arrangement-selection phase
    pub fn start_selection(&self) {
        if let Some(ref bar) = self.file_bar {
            bar.set_message("selecting arrangement");
        }
    }

    /// Mark the active file as completed and update batch progress
    pub fn complete_file(&mut self) {
        if let Some(bar) = self.file_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
