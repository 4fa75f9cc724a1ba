//! Reduction axis and image dimension selectors

use std::fmt;

use crate::errors::{ProfileError, ProfileResult};

/// Direction in which a region of interest is collapsed
///
/// `SumRows` adds the rows together and leaves one value per column,
/// `SumColumns` adds the columns together and leaves one value per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionAxis {
    /// Sum down the rows (`r`), one value per retained column
    SumRows,
    /// Sum across the columns (`c`), one value per retained row
    SumColumns,
}

impl ReductionAxis {
    /// Parse the command-line selector (`r` or `c`, case-sensitive)
    pub fn from_selector(selector: &str) -> ProfileResult<Self> {
        match selector {
            "r" => Ok(ReductionAxis::SumRows),
            "c" => Ok(ReductionAxis::SumColumns),
            other => Err(ProfileError::InvalidAxis(other.to_string())),
        }
    }

    /// The selector character this axis was parsed from
    pub fn selector(&self) -> char {
        match self {
            ReductionAxis::SumRows => 'r',
            ReductionAxis::SumColumns => 'c',
        }
    }

    /// The dimension that survives the reduction and indexes the profile
    pub fn retained(&self) -> Dimension {
        match self {
            ReductionAxis::SumRows => Dimension::Column,
            ReductionAxis::SumColumns => Dimension::Row,
        }
    }
}

impl fmt::Display for ReductionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}

/// One of the two spatial dimensions of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Row,
    Column,
}

impl Dimension {
    /// Name of the ROI start argument for this dimension
    pub fn start_name(&self) -> &'static str {
        match self {
            Dimension::Row => "row_start",
            Dimension::Column => "col_start",
        }
    }

    /// Name of the ROI end argument for this dimension
    pub fn end_name(&self) -> &'static str {
        match self {
            Dimension::Row => "row_end",
            Dimension::Column => "col_end",
        }
    }

    /// Lowercase singular name, also used as the output index header
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Row => "row",
            Dimension::Column => "column",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Dimension::Row => "rows",
            Dimension::Column => "columns",
        }
    }
}
