//! Result output
//!
//! This module labels an averaged profile with its row or column indices and
//! saves it as CSV.

mod csv_writer;
mod table;

pub use csv_writer::{to_csv_string, write_csv};
pub use table::{ProfileEntry, ProfileTable, VALUE_COLUMN};
