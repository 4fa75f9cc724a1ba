//! Intensity profile command
//!
//! This module implements the command that averages the ROI intensity
//! profiles of a batch of images and saves them as CSV.

use clap::ArgMatches;
use log::info;

use crate::api::RoiProfiler;
use crate::commands::command_traits::Command;
use crate::config::RunConfig;
use crate::errors::{ProfileError, ProfileResult};
use crate::roi::RegionOfInterest;

/// Command for computing and saving an averaged intensity profile
pub struct ProfileCommand {
    profiler: RoiProfiler,
}

impl ProfileCommand {
    /// Create a new profile command
    ///
    /// The region is structurally validated here, before any file is read.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new ProfileCommand instance or an error
    pub fn new(args: &ArgMatches) -> ProfileResult<Self> {
        let dir = string_arg(args, "dir")?;
        let prefix = string_arg(args, "root")?;
        let output = string_arg(args, "out")?;
        let selector = string_arg(args, "sum")?;

        let roi = RegionOfInterest::new(
            int_arg(args, "row_start")?,
            int_arg(args, "row_end")?,
            int_arg(args, "col_start")?,
            int_arg(args, "col_end")?,
            &selector,
        )?;

        let show_progress = !args.get_flag("no-progress");
        let config = RunConfig::new(dir, prefix, roi, output).with_progress(show_progress);

        Ok(ProfileCommand {
            profiler: RoiProfiler::new(config),
        })
    }

    pub fn config(&self) -> &RunConfig {
        self.profiler.config()
    }
}

impl Command for ProfileCommand {
    fn execute(&self) -> ProfileResult<()> {
        let table = self.profiler.run()?;
        info!("Profile complete: {} {} values", table.len(), table.index_name());
        Ok(())
    }
}

fn string_arg(args: &ArgMatches, name: &'static str) -> ProfileResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or(ProfileError::MissingArgument(name))
}

fn int_arg(args: &ArgMatches, name: &'static str) -> ProfileResult<i64> {
    args.get_one::<i64>(name)
        .copied()
        .ok_or(ProfileError::MissingArgument(name))
}
