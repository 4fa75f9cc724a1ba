//! CSV persistence of result tables
//!
//! The file has a header `<index_name>,average_intensity` followed by one
//! record per profile entry. Values use Rust's shortest round-trip float
//! formatting, so a whole-number mean is written as `6` and not `6.0`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::errors::{ProfileError, ProfileResult};

use super::table::{ProfileTable, VALUE_COLUMN};

/// Write `table` to `path`
///
/// The parent directory of `path` must already exist.
pub fn write_csv(table: &ProfileTable, path: &Path) -> ProfileResult<()> {
    let output_error = |source: csv::Error| ProfileError::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| output_error(e.into()))?;
    let mut writer = write_records(BufWriter::new(file), table).map_err(output_error)?;
    writer.flush().map_err(|e| output_error(e.into()))?;

    debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Render `table` as CSV text
pub fn to_csv_string(table: &ProfileTable) -> ProfileResult<String> {
    let output_error = |source: csv::Error| ProfileError::Output {
        path: Path::new("<string>").to_path_buf(),
        source,
    };

    let bytes = write_records(Vec::new(), table).map_err(output_error)?;
    String::from_utf8(bytes).map_err(|e| {
        output_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    })
}

fn write_records<W: Write>(sink: W, table: &ProfileTable) -> Result<W, csv::Error> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record([table.index_name(), VALUE_COLUMN])?;
    for entry in table.entries() {
        writer.write_record([entry.index.to_string(), entry.average_intensity.to_string()])?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}
