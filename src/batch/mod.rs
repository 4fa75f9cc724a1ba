//! Batch processing
//!
//! This module selects the files of a batch and averages their intensity
//! profiles.

mod aggregator;
pub mod listing;

pub use aggregator::{AveragedProfile, BatchAggregator, ValidatedRegion};
