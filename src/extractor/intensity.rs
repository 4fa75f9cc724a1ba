//! Intensity extraction over a region of interest
//!
//! This module reduces the pixels inside a region of interest to a
//! one-dimensional profile by summing along the axis the region selects.

use std::ops::Index;

use log::debug;

use crate::errors::ProfileResult;
use crate::pixels::{grayscale, PixelArray};
use crate::roi::{ReductionAxis, RegionOfInterest};

/// Summed intensities of one image, one entry per retained row or column
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityVector(Vec<f64>);

impl IntensityVector {
    pub fn new(values: Vec<f64>) -> Self {
        IntensityVector(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Index<usize> for IntensityVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Sums region-of-interest pixels into an `IntensityVector`
///
/// Multi-channel input is reduced to channel 0 first. The input array is
/// never modified, so extracting twice yields identical vectors.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntensityExtractor;

impl IntensityExtractor {
    pub fn new() -> Self {
        IntensityExtractor
    }

    /// Extract the intensity profile of `pixels` inside `roi`
    ///
    /// # Arguments
    /// * `pixels` - Decoded image, with or without a channel axis
    /// * `roi` - Region and reduction axis
    ///
    /// # Returns
    /// One sum per retained column (`SumRows`) or row (`SumColumns`), or
    /// `OutOfBounds` if the region does not fit inside the image
    pub fn extract(&self, pixels: &PixelArray, roi: &RegionOfInterest) -> ProfileResult<IntensityVector> {
        roi.validate_against_shape(pixels.rows(), pixels.cols())?;
        Ok(self.extract_unchecked(pixels, roi))
    }

    /// Extract without the bounds check
    ///
    /// `roi` must already have been validated against the geometry of
    /// `pixels`, as a batch does once in `BatchAggregator::begin`.
    pub(crate) fn extract_unchecked(&self, pixels: &PixelArray, roi: &RegionOfInterest) -> IntensityVector {
        let plane = grayscale::to_grayscale(pixels);
        let width = plane.cols();
        let data = plane.samples();
        let rows = roi.row_range();
        let cols = roi.col_range();

        let sums: Vec<f64> = match roi.axis() {
            ReductionAxis::SumRows => cols
                .map(|c| rows.clone().map(|r| data[r * width + c]).sum::<f64>())
                .collect(),
            ReductionAxis::SumColumns => rows
                .map(|r| data[r * width + cols.start..r * width + cols.end].iter().sum::<f64>())
                .collect(),
        };

        debug!("Extracted {} sums along axis '{}'", sums.len(), roi.axis());
        IntensityVector(sums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProfileError;
    use crate::pixels::ImageShape;

    /// 3x4 image where pixel (r, c) = 10 * r + c
    fn ramp() -> PixelArray {
        let samples: Vec<u8> = (0..3u8).flat_map(|r| (0..4u8).map(move |c| 10 * r + c)).collect();
        PixelArray::from_samples(ImageShape::gray(3, 4), &samples).unwrap()
    }

    #[test]
    fn test_sum_rows_gives_one_value_per_column() {
        // rows 1-2, columns 2-4 -> [1+11, 2+12, 3+13]
        let roi = RegionOfInterest::new(1, 2, 2, 4, "r").unwrap();
        let sums = IntensityExtractor::new().extract(&ramp(), &roi).unwrap();
        assert_eq!(sums.values(), &[12.0, 14.0, 16.0]);
    }

    #[test]
    fn test_sum_columns_gives_one_value_per_row() {
        // rows 2-3, columns 1-2 -> [10+11, 20+21]
        let roi = RegionOfInterest::new(2, 3, 1, 2, "c").unwrap();
        let sums = IntensityExtractor::new().extract(&ramp(), &roi).unwrap();
        assert_eq!(sums.values(), &[21.0, 41.0]);
    }

    #[test]
    fn test_full_extent() {
        let roi = RegionOfInterest::new(1, 3, 1, 4, "c").unwrap();
        let sums = IntensityExtractor::new().extract(&ramp(), &roi).unwrap();
        assert_eq!(sums.values(), &[6.0, 46.0, 86.0]);
    }

    #[test]
    fn test_multichannel_uses_channel_zero() {
        let samples: Vec<u8> = [5u8, 100, 250].repeat(4);
        let rgb = PixelArray::from_samples(ImageShape::with_channels(2, 2, 3), &samples).unwrap();

        let roi = RegionOfInterest::new(1, 2, 1, 2, "r").unwrap();
        let sums = IntensityExtractor::new().extract(&rgb, &roi).unwrap();
        assert_eq!(sums.values(), &[10.0, 10.0]);
    }

    #[test]
    fn test_wide_samples_do_not_overflow() {
        let samples = vec![u16::MAX; 64 * 64];
        let pixels = PixelArray::from_samples(ImageShape::gray(64, 64), &samples).unwrap();

        let roi = RegionOfInterest::new(1, 64, 1, 1, "r").unwrap();
        let sums = IntensityExtractor::new().extract(&pixels, &roi).unwrap();
        assert_eq!(sums[0], 64.0 * u16::MAX as f64);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let pixels = ramp();
        let roi = RegionOfInterest::new(1, 3, 2, 3, "r").unwrap();
        let extractor = IntensityExtractor::new();

        let first = extractor.extract(&pixels, &roi).unwrap();
        let second = extractor.extract(&pixels, &roi).unwrap();
        assert_eq!(first, second);
        assert_eq!(pixels, ramp());
    }

    #[test]
    fn test_out_of_bounds_region_is_rejected() {
        let roi = RegionOfInterest::new(1, 4, 1, 4, "r").unwrap();
        let err = IntensityExtractor::new().extract(&ramp(), &roi).unwrap_err();
        assert!(matches!(err, ProfileError::OutOfBounds { .. }));
    }

    #[test]
    fn test_unchecked_path_matches_checked_path() {
        let pixels = ramp();
        let extractor = IntensityExtractor::new();
        for selector in ["r", "c"] {
            let roi = RegionOfInterest::new(2, 3, 1, 4, selector).unwrap();
            assert_eq!(extractor.extract_unchecked(&pixels, &roi), extractor.extract(&pixels, &roi).unwrap());
        }
    }

    #[test]
    fn test_empty_channel_axis_never_reaches_extraction() {
        let roi = RegionOfInterest::new(1, 2, 1, 2, "r").unwrap();
        let result = PixelArray::new(ImageShape::with_channels(2, 2, 0), vec![])
            .and_then(|pixels| IntensityExtractor::new().extract(&pixels, &roi));
        assert!(matches!(result, Err(ProfileError::EmptyChannelAxis { .. })));
    }
}
