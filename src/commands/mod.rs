//! CLI command implementations
//!
//! This module contains the command-line definition and the commands
//! it drives, using the Command pattern.

pub mod command_traits;
pub mod profile_command;

pub use command_traits::Command;
pub use profile_command::ProfileCommand;

use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};

/// Build the command-line definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("roiprofile")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Average per-row or per-column intensities over a region of interest across a batch of images")
        .arg(
            Arg::new("dir")
                .help("Directory holding the files matching 'root'")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("root")
                .help("Prefix of the files whose sums are averaged (case-sensitive)")
                .required(true)
                .index(2),
        )
        .arg(roi_bound("row_start", 3, "Starting row, must be in [1, row_end]"))
        .arg(roi_bound("row_end", 4, "Ending row, must be in [row_start, number of rows in image]"))
        .arg(roi_bound("col_start", 5, "Starting column, must be in [1, col_end]"))
        .arg(roi_bound("col_end", 6, "Ending column, must be in [col_start, number of columns in image]"))
        .arg(
            Arg::new("sum")
                .help("Sum over rows 'r' or columns 'c'")
                .required(true)
                .index(7),
        )
        .arg(
            Arg::new("out")
                .help("Path of the output CSV file; its directory must exist")
                .required(true)
                .index(8),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log output to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Do not draw a progress bar")
                .action(ArgAction::SetTrue),
        )
}

/// Positional 1-based ROI bound; negatives are accepted so validation can report them
fn roi_bound(name: &'static str, index: usize, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .index(index)
        .value_parser(value_parser!(i64))
        .allow_negative_numbers(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProfileError;
    use crate::roi::{Dimension, ReductionAxis};

    fn parse(args: &[&str]) -> clap::ArgMatches {
        build_cli()
            .try_get_matches_from(std::iter::once("roiprofile").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_positional_arguments() {
        let matches = parse(&["imgs", "scan", "1", "2", "3", "4", "c", "out.csv", "--no-progress"]);
        let command = ProfileCommand::new(&matches).unwrap();
        let config = command.config();

        assert_eq!(config.dir.to_str(), Some("imgs"));
        assert_eq!(config.prefix, "scan");
        assert_eq!(config.output.to_str(), Some("out.csv"));
        assert_eq!((config.roi.row_start(), config.roi.col_end()), (1, 4));
        assert_eq!(config.roi.axis(), ReductionAxis::SumColumns);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_negative_bound_reaches_validation() {
        let matches = parse(&["imgs", "scan", "-1", "2", "1", "2", "r", "out.csv"]);
        match ProfileCommand::new(&matches) {
            Err(ProfileError::InvalidRange { dimension, start, .. }) => {
                assert_eq!(dimension, Dimension::Row);
                assert_eq!(start, -1);
            }
            Err(other) => panic!("expected InvalidRange, got {:?}", other),
            Ok(_) => panic!("expected InvalidRange"),
        }
    }

    #[test]
    fn test_bad_axis_is_rejected_before_io() {
        let matches = parse(&["/does/not/exist", "scan", "1", "2", "1", "2", "x", "out.csv"]);
        assert!(matches!(ProfileCommand::new(&matches), Err(ProfileError::InvalidAxis(_))));
    }

    #[test]
    fn test_non_integer_bound_is_a_usage_error() {
        let result = build_cli().try_get_matches_from(
            ["roiprofile", "imgs", "scan", "one", "2", "1", "2", "r", "out.csv"]);
        assert!(result.is_err());
    }
}
