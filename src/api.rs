use log::info;

use crate::batch::BatchAggregator;
use crate::config::RunConfig;
use crate::errors::ProfileResult;
use crate::output::{self, ProfileTable};
use crate::pixels::ImageDecoder;

/// Main interface to the roiprofile library
pub struct RoiProfiler {
    config: RunConfig,
}

impl RoiProfiler {
    /// Create a profiler for one run
    ///
    /// # Arguments
    /// * `config` - Directory, prefix, region and output settings
    pub fn new(config: RunConfig) -> Self {
        RoiProfiler { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Average the batch and label the result, without writing anything
    ///
    /// # Returns
    /// The indexed profile table or the first error met
    pub fn compute(&self) -> ProfileResult<ProfileTable> {
        let profile = BatchAggregator::new(&self.config).run()?;
        Ok(ProfileTable::new(&profile, &self.config.roi))
    }

    /// Same as [`RoiProfiler::compute`] but decoding with a custom strategy
    pub fn compute_with_decoder(&self, decoder: Box<dyn ImageDecoder + '_>) -> ProfileResult<ProfileTable> {
        let profile = BatchAggregator::with_decoder(&self.config, decoder).run()?;
        Ok(ProfileTable::new(&profile, &self.config.roi))
    }

    /// Average the batch and save the table to the configured output path
    pub fn run(&self) -> ProfileResult<ProfileTable> {
        self.config.log_summary();
        let table = self.compute()?;
        output::write_csv(&table, self.config.output())?;
        info!("Saved average intensities to {}", self.config.output().display());
        Ok(table)
    }
}
