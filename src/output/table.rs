//! Indexed result table

use crate::batch::AveragedProfile;
use crate::roi::RegionOfInterest;

/// Name of the value column in every result table
pub const VALUE_COLUMN: &str = "average_intensity";

/// One output row: a 1-based row or column label and its mean intensity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileEntry {
    pub index: usize,
    pub average_intensity: f64,
}

/// Averaged profile labelled with the rows or columns it was summed into
///
/// When the region was summed over rows the index runs over
/// `[col_start, col_end]` and is named `column`; when summed over columns it
/// runs over `[row_start, row_end]` and is named `row`. Entry `k` always pairs
/// with element `k` of the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    index_name: &'static str,
    entries: Vec<ProfileEntry>,
}

impl ProfileTable {
    pub fn new(profile: &AveragedProfile, roi: &RegionOfInterest) -> Self {
        let entries = roi
            .profile_index()
            .zip(profile.values())
            .map(|(index, &average_intensity)| ProfileEntry { index, average_intensity })
            .collect();

        ProfileTable {
            index_name: roi.axis().retained().name(),
            entries,
        }
    }

    /// Header of the index column, `row` or `column`
    pub fn index_name(&self) -> &'static str {
        self.index_name
    }

    pub fn entries(&self) -> &[ProfileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
