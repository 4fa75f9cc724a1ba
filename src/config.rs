//! Run configuration
//!
//! A `RunConfig` is assembled once from operator input and then shared by
//! reference with every stage of the run. Nothing reads configuration from
//! global state.

use std::path::{Path, PathBuf};

use log::info;

use crate::roi::RegionOfInterest;

/// Immutable settings for one profiling run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding the batch
    pub dir: PathBuf,
    /// Case-sensitive file name prefix selecting the batch
    pub prefix: String,
    /// Validated region and reduction axis
    pub roi: RegionOfInterest,
    /// Destination of the CSV result
    pub output: PathBuf,
    /// Whether to draw a progress bar while the batch is processed
    pub show_progress: bool,
}

impl RunConfig {
    /// Create a configuration with the progress bar disabled
    pub fn new(
        dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        roi: RegionOfInterest,
        output: impl Into<PathBuf>,
    ) -> Self {
        RunConfig {
            dir: dir.into(),
            prefix: prefix.into(),
            roi,
            output: output.into(),
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Log the run parameters
    pub fn log_summary(&self) {
        info!("Location arguments: dir={}, root={}, out={}",
              self.dir.display(), self.prefix, self.output.display());
        info!("ROI arguments: rows=[{},{}], columns=[{},{}]",
              self.roi.row_start(), self.roi.row_end(),
              self.roi.col_start(), self.roi.col_end());
        info!("Computation arguments: sum type={}", self.roi.axis());
    }
}
