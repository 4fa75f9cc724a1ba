//! Region of interest for intensity profiling
//!
//! This module defines the rectangular area of an image whose pixels are
//! summed into an intensity profile. Bounds are supplied 1-based and
//! inclusive, the way an operator counts rows and columns, and are exposed
//! internally as 0-based half-open ranges for slicing.

use std::ops::{Range, RangeInclusive};

use crate::errors::{ProfileError, ProfileResult};

use super::axis::{Dimension, ReductionAxis};

/// Structurally valid region of interest together with its reduction axis
///
/// A `RegionOfInterest` can only be obtained through [`RegionOfInterest::new`],
/// so every instance satisfies `1 <= row_start <= row_end` and
/// `1 <= col_start <= col_end`. Whether it fits inside a given image is a
/// separate check, see [`RegionOfInterest::validate_against_shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionOfInterest {
    row_start: usize,
    row_end: usize,
    col_start: usize,
    col_end: usize,
    axis: ReductionAxis,
}

impl RegionOfInterest {
    /// Create a region from raw operator input
    ///
    /// Checks are performed in a fixed order and the first failure wins:
    /// the row range, then the column range, then the axis selector.
    ///
    /// # Arguments
    /// * `row_start` - First row, 1-based inclusive
    /// * `row_end` - Last row, 1-based inclusive
    /// * `col_start` - First column, 1-based inclusive
    /// * `col_end` - Last column, 1-based inclusive
    /// * `selector` - `r` to sum over rows, `c` to sum over columns
    ///
    /// # Returns
    /// A validated region or `InvalidRange` / `InvalidAxis`
    pub fn new(
        row_start: i64,
        row_end: i64,
        col_start: i64,
        col_end: i64,
        selector: &str,
    ) -> ProfileResult<Self> {
        let (row_start, row_end) = check_range(Dimension::Row, row_start, row_end)?;
        let (col_start, col_end) = check_range(Dimension::Column, col_start, col_end)?;
        let axis = ReductionAxis::from_selector(selector)?;

        Ok(RegionOfInterest {
            row_start,
            row_end,
            col_start,
            col_end,
            axis,
        })
    }

    /// Check that the region lies inside an image of the given extent
    ///
    /// Rows are checked before columns.
    pub fn validate_against_shape(&self, rows: usize, cols: usize) -> ProfileResult<()> {
        if self.row_end > rows {
            return Err(ProfileError::OutOfBounds {
                dimension: Dimension::Row,
                end: self.row_end,
                extent: rows,
            });
        }
        if self.col_end > cols {
            return Err(ProfileError::OutOfBounds {
                dimension: Dimension::Column,
                end: self.col_end,
                extent: cols,
            });
        }
        Ok(())
    }

    pub fn row_start(&self) -> usize {
        self.row_start
    }

    pub fn row_end(&self) -> usize {
        self.row_end
    }

    pub fn col_start(&self) -> usize {
        self.col_start
    }

    pub fn col_end(&self) -> usize {
        self.col_end
    }

    pub fn axis(&self) -> ReductionAxis {
        self.axis
    }

    /// Zero-based half-open row range, ready for slicing
    pub fn row_range(&self) -> Range<usize> {
        (self.row_start - 1)..self.row_end
    }

    /// Zero-based half-open column range, ready for slicing
    pub fn col_range(&self) -> Range<usize> {
        (self.col_start - 1)..self.col_end
    }

    /// Number of rows covered by the region
    pub fn height(&self) -> usize {
        self.row_end - self.row_start + 1
    }

    /// Number of columns covered by the region
    pub fn width(&self) -> usize {
        self.col_end - self.col_start + 1
    }

    /// Length of the intensity profile this region produces
    pub fn profile_len(&self) -> usize {
        match self.axis {
            ReductionAxis::SumRows => self.width(),
            ReductionAxis::SumColumns => self.height(),
        }
    }

    /// 1-based labels of the retained dimension, in profile order
    pub fn profile_index(&self) -> RangeInclusive<usize> {
        match self.axis.retained() {
            Dimension::Column => self.col_start..=self.col_end,
            Dimension::Row => self.row_start..=self.row_end,
        }
    }
}

/// Validate one `[start, end]` pair and convert it to unsigned bounds
fn check_range(dimension: Dimension, start: i64, end: i64) -> ProfileResult<(usize, usize)> {
    let invalid = || ProfileError::InvalidRange { dimension, start, end };
    if start < 1 || start > end {
        return Err(invalid());
    }
    let first = usize::try_from(start).map_err(|_| invalid())?;
    let last = usize::try_from(end).map_err(|_| invalid())?;
    Ok((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_error(result: ProfileResult<RegionOfInterest>) -> Dimension {
        match result {
            Err(ProfileError::InvalidRange { dimension, .. }) => dimension,
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_region() {
        let roi = RegionOfInterest::new(2, 5, 3, 4, "r").unwrap();
        assert_eq!(roi.row_range(), 1..5);
        assert_eq!(roi.col_range(), 2..4);
        assert_eq!(roi.height(), 4);
        assert_eq!(roi.width(), 2);
        assert_eq!(roi.axis(), ReductionAxis::SumRows);
    }

    #[test]
    fn test_single_pixel_region() {
        let roi = RegionOfInterest::new(1, 1, 1, 1, "c").unwrap();
        assert_eq!(roi.profile_len(), 1);
        assert_eq!(roi.profile_index(), 1..=1);
    }

    #[test]
    fn test_row_start_after_row_end() {
        assert_eq!(range_error(RegionOfInterest::new(3, 2, 1, 1, "r")), Dimension::Row);
    }

    #[test]
    fn test_col_start_after_col_end() {
        assert_eq!(range_error(RegionOfInterest::new(1, 1, 4, 2, "r")), Dimension::Column);
    }

    #[test]
    fn test_row_error_reported_before_column_error() {
        assert_eq!(range_error(RegionOfInterest::new(5, 1, 5, 1, "x")), Dimension::Row);
    }

    #[test]
    fn test_range_error_reported_before_axis_error() {
        assert_eq!(range_error(RegionOfInterest::new(1, 2, 3, 1, "x")), Dimension::Column);
    }

    #[test]
    fn test_start_must_be_positive() {
        assert_eq!(range_error(RegionOfInterest::new(0, 2, 1, 1, "r")), Dimension::Row);
        assert_eq!(range_error(RegionOfInterest::new(1, 2, -3, 1, "r")), Dimension::Column);
    }

    #[test]
    fn test_invalid_axis() {
        match RegionOfInterest::new(1, 2, 1, 2, "rows") {
            Err(ProfileError::InvalidAxis(s)) => assert_eq!(s, "rows"),
            other => panic!("expected InvalidAxis, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_names_values() {
        let err = RegionOfInterest::new(4, 2, 1, 1, "r").unwrap_err();
        assert_eq!(err.to_string(), "row_start=4 is not in [1, row_end=2]");
    }

    #[test]
    fn test_full_extent_is_in_bounds() {
        let roi = RegionOfInterest::new(1, 4, 1, 6, "r").unwrap();
        assert!(roi.validate_against_shape(4, 6).is_ok());
    }

    #[test]
    fn test_one_past_extent_is_out_of_bounds() {
        let rows = RegionOfInterest::new(1, 5, 1, 6, "r").unwrap();
        match rows.validate_against_shape(4, 6) {
            Err(ProfileError::OutOfBounds { dimension, end, extent }) => {
                assert_eq!(dimension, Dimension::Row);
                assert_eq!((end, extent), (5, 4));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }

        let cols = RegionOfInterest::new(1, 4, 1, 7, "r").unwrap();
        match cols.validate_against_shape(4, 6) {
            Err(ProfileError::OutOfBounds { dimension, .. }) => assert_eq!(dimension, Dimension::Column),
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_profile_length_follows_axis() {
        let by_rows = RegionOfInterest::new(2, 4, 3, 7, "r").unwrap();
        assert_eq!(by_rows.profile_len(), 5);
        assert_eq!(by_rows.profile_index(), 3..=7);

        let by_cols = RegionOfInterest::new(2, 4, 3, 7, "c").unwrap();
        assert_eq!(by_cols.profile_len(), 3);
        assert_eq!(by_cols.profile_index(), 2..=4);
    }
}
