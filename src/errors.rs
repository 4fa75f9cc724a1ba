//! Custom error types for ROI intensity profiling

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pixels::ImageShape;
use crate::roi::Dimension;

/// Errors raised while validating, computing or saving an intensity profile
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Start index below 1 or greater than the end index
    #[error("{start_name}={start} is not in [1, {end_name}={end}]",
            start_name = .dimension.start_name(), end_name = .dimension.end_name())]
    InvalidRange {
        dimension: Dimension,
        start: i64,
        end: i64,
    },

    /// Required command-line value absent
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// Axis selector other than `r` or `c`
    #[error("'{0}' is not a valid input, must be 'r' for rows or 'c' for columns")]
    InvalidAxis(String),

    /// ROI end index lies beyond the image extent
    #[error("{end_name}={end} is not in [{start_name}, number of {plural} in image={extent}]",
            end_name = .dimension.end_name(), start_name = .dimension.start_name(),
            plural = .dimension.plural())]
    OutOfBounds {
        dimension: Dimension,
        end: usize,
        extent: usize,
    },

    /// A file in the batch does not share the first file's geometry
    #[error("image {} is required to have {expected}, found {found}", .path.display())]
    ShapeMismatch {
        path: PathBuf,
        expected: ImageShape,
        found: ImageShape,
    },

    /// No file in the directory carries the requested prefix
    #[error("no files in {} start with '{prefix}'", .dir.display())]
    EmptyBatch { dir: PathBuf, prefix: String },

    /// Directory could not be listed
    #[error("cannot read directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Image file could not be opened or decoded
    #[error("cannot decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Decoded buffer length disagrees with the declared geometry
    #[error("pixel buffer holds {found} samples but {shape} needs {expected}")]
    SampleCount {
        shape: ImageShape,
        expected: usize,
        found: usize,
    },

    /// Declared channel axis holds no channels
    #[error("pixel geometry {shape} has an empty channel axis")]
    EmptyChannelAxis { shape: ImageShape },

    /// Result table could not be written
    #[error("cannot write output {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Operator-facing grouping of errors, used to suggest a fix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad ROI, axis selector or batch contents
    Argument,
    /// Bad input directory, image file or output location
    Path,
}

impl ErrorCategory {
    /// Label printed in front of the error message
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::Argument => "Argument error",
            ErrorCategory::Path => "Path / Directory error",
        }
    }

    /// Hint printed after the error message
    pub fn hint(&self) -> &'static str {
        match self {
            ErrorCategory::Argument => "Fixes: check ROI, sum type arguments",
            ErrorCategory::Path => {
                "Fixes: check dir, out paths (need directory of output file to exist)"
            }
        }
    }
}

impl ProfileError {
    /// Category of this error for CLI reporting
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProfileError::InvalidRange { .. }
            | ProfileError::MissingArgument(_)
            | ProfileError::InvalidAxis(_)
            | ProfileError::OutOfBounds { .. }
            | ProfileError::ShapeMismatch { .. }
            | ProfileError::EmptyBatch { .. } => ErrorCategory::Argument,
            ProfileError::Directory { .. }
            | ProfileError::Decode { .. }
            | ProfileError::SampleCount { .. }
            | ProfileError::EmptyChannelAxis { .. }
            | ProfileError::Output { .. } => ErrorCategory::Path,
        }
    }
}

/// Result type for profiling operations
pub type ProfileResult<T> = Result<T, ProfileError>;
