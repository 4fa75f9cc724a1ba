pub mod errors;
pub mod roi;
pub mod pixels;
pub mod extractor;
pub mod batch;
pub mod output;
pub mod config;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::RoiProfiler;

pub use config::RunConfig;
pub use errors::{ErrorCategory, ProfileError, ProfileResult};
pub use roi::{Dimension, ReductionAxis, RegionOfInterest};
pub use pixels::{ImageShape, PixelArray};
pub use extractor::{IntensityExtractor, IntensityVector};
pub use batch::{AveragedProfile, BatchAggregator, ValidatedRegion};
pub use output::ProfileTable;
