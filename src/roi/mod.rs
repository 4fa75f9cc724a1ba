//! Region of interest definitions
//!
//! This module provides the rectangular region and the reduction axis that
//! together describe which pixels are profiled and how.

mod axis;
mod region;

pub use axis::{Dimension, ReductionAxis};
pub use region::RegionOfInterest;
