//! Batch aggregation of intensity profiles
//!
//! A batch is every file in one directory whose name carries a given prefix.
//! Processing follows a two-phase protocol: the first file's geometry opens
//! the batch and validates the region against it ([`BatchAggregator::begin`]),
//! after which every file is checked against that geometry and reduced to an
//! intensity vector ([`BatchAggregator::process`]). The vectors are then
//! averaged element-wise.

use std::path::Path;

use log::info;

use crate::config::RunConfig;
use crate::errors::{ProfileError, ProfileResult};
use crate::extractor::{IntensityExtractor, IntensityVector};
use crate::pixels::{ImageCrateDecoder, ImageDecoder, ImageShape, PixelArray};
use crate::roi::RegionOfInterest;
use crate::utils::progress::ProgressTracker;

use super::listing;

/// A region proven to fit the batch geometry, plus that geometry
///
/// Only [`BatchAggregator::begin`] creates one, so holding a
/// `ValidatedRegion` means the bounds check has already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRegion {
    roi: RegionOfInterest,
    shape: ImageShape,
}

impl ValidatedRegion {
    pub fn roi(&self) -> &RegionOfInterest {
        &self.roi
    }

    /// Geometry every file of the batch must have
    pub fn shape(&self) -> ImageShape {
        self.shape
    }

    /// Reject a file whose geometry differs from the batch geometry
    pub fn check_shape(&self, path: &Path, found: ImageShape) -> ProfileResult<()> {
        if found != self.shape {
            return Err(ProfileError::ShapeMismatch {
                path: path.to_path_buf(),
                expected: self.shape,
                found,
            });
        }
        Ok(())
    }
}

/// Element-wise mean of a batch's intensity vectors
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedProfile {
    values: Vec<f64>,
    file_count: usize,
}

impl AveragedProfile {
    /// Average equally long vectors
    ///
    /// # Returns
    /// The mean profile, or None if `vectors` is empty
    pub fn mean_of(vectors: &[IntensityVector]) -> Option<Self> {
        let first = vectors.first()?;
        let mut totals = vec![0.0; first.len()];

        for vector in vectors {
            for (total, value) in totals.iter_mut().zip(vector.values()) {
                *total += value;
            }
        }

        let count = vectors.len() as f64;
        Some(AveragedProfile {
            values: totals.into_iter().map(|t| t / count).collect(),
            file_count: vectors.len(),
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of files that contributed to the mean
    pub fn file_count(&self) -> usize {
        self.file_count
    }
}

/// Runs the decode, check and extract pipeline over a batch
pub struct BatchAggregator<'a> {
    config: &'a RunConfig,
    decoder: Box<dyn ImageDecoder + 'a>,
    extractor: IntensityExtractor,
}

impl<'a> BatchAggregator<'a> {
    /// Create an aggregator that decodes files with the `image` crate
    pub fn new(config: &'a RunConfig) -> Self {
        Self::with_decoder(config, Box::new(ImageCrateDecoder::new()))
    }

    /// Create an aggregator with a custom decoding strategy
    pub fn with_decoder(config: &'a RunConfig, decoder: Box<dyn ImageDecoder + 'a>) -> Self {
        BatchAggregator {
            config,
            decoder,
            extractor: IntensityExtractor::new(),
        }
    }

    /// Open the batch with the geometry of its first file
    ///
    /// # Returns
    /// The validated region, or `OutOfBounds` if the configured region does
    /// not fit `first_shape`
    pub fn begin(&self, first_shape: ImageShape) -> ProfileResult<ValidatedRegion> {
        self.config.roi.validate_against_shape(first_shape.rows, first_shape.cols)?;
        Ok(ValidatedRegion {
            roi: self.config.roi,
            shape: first_shape,
        })
    }

    /// Decode one file, check its geometry and extract its intensities
    pub fn process(&self, path: &Path, region: &ValidatedRegion) -> ProfileResult<IntensityVector> {
        let pixels = self.decoder.decode(path)?;
        self.process_pixels(path, &pixels, region)
    }

    fn process_pixels(&self, path: &Path, pixels: &PixelArray,
                      region: &ValidatedRegion) -> ProfileResult<IntensityVector> {
        region.check_shape(path, pixels.shape())?;
        info!("Computing intensities for {} in {}", display_name(path), self.config.dir().display());
        // Same geometry as the first file, so the region is already in bounds
        Ok(self.extractor.extract_unchecked(pixels, region.roi()))
    }

    /// Process every matching file and average the results
    ///
    /// # Returns
    /// The averaged profile, or the first error met. An empty batch fails
    /// with `EmptyBatch` before anything is decoded.
    pub fn run(&self) -> ProfileResult<AveragedProfile> {
        let files = listing::matching_files(self.config.dir(), &self.config.prefix)?;
        let Some((first_path, rest)) = files.split_first() else {
            return Err(self.empty_batch());
        };
        info!("Found {} matching files in {}", files.len(), self.config.dir().display());

        let progress = ProgressTracker::new(files.len() as u64, "Computing intensities",
                                            self.config.show_progress);

        let first = self.decoder.decode(first_path)?;
        let region = self.begin(first.shape())?;

        let mut vectors = Vec::with_capacity(files.len());
        progress.start_file(&display_name(first_path));
        vectors.push(self.process_pixels(first_path, &first, &region)?);
        drop(first);
        progress.file_done();

        for path in rest {
            progress.start_file(&display_name(path));
            vectors.push(self.process(path, &region)?);
            progress.file_done();
        }
        progress.finish();

        info!("Computing mean intensities for {} files", vectors.len());
        AveragedProfile::mean_of(&vectors).ok_or_else(|| self.empty_batch())
    }

    fn empty_batch(&self) -> ProfileError {
        ProfileError::EmptyBatch {
            dir: self.config.dir.clone(),
            prefix: self.config.prefix.clone(),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
