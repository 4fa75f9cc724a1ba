//! Intensity extraction from decoded images
//!
//! This module reduces the region of interest of one image to a
//! one-dimensional vector of summed intensities.

mod intensity;

pub use intensity::{IntensityExtractor, IntensityVector};
