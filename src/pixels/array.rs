//! Dense pixel arrays decoded from image files
//!
//! A `PixelArray` holds every sample of one decoded image in row-major,
//! channel-last order, widened to `f64` so that later summation cannot
//! overflow regardless of the source bit depth.

use std::fmt;

use crate::errors::{ProfileError, ProfileResult};

/// Geometry of a decoded image
///
/// `channels` is `None` for a plain two-dimensional image and `Some(n)` when
/// the image carries an explicit channel axis, even if `n` is 1. Two shapes
/// are equal only when rows, columns and channel layout all agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    /// Number of rows (image height)
    pub rows: usize,
    /// Number of columns (image width)
    pub cols: usize,
    /// Channel count for three-dimensional arrays
    pub channels: Option<usize>,
}

impl ImageShape {
    /// Shape of a single-channel, two-dimensional image
    pub fn gray(rows: usize, cols: usize) -> Self {
        ImageShape { rows, cols, channels: None }
    }

    /// Shape of an image with an explicit channel axis
    pub fn with_channels(rows: usize, cols: usize, channels: usize) -> Self {
        ImageShape { rows, cols, channels: Some(channels) }
    }

    /// Samples stored per pixel
    pub fn samples_per_pixel(&self) -> usize {
        self.channels.unwrap_or(1)
    }

    /// Total number of samples an array of this shape holds
    pub fn sample_count(&self) -> usize {
        self.rows * self.cols * self.samples_per_pixel()
    }
}

impl fmt::Display for ImageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows, {} columns", self.rows, self.cols)?;
        if let Some(channels) = self.channels {
            write!(f, ", {} channels", channels)?;
        }
        Ok(())
    }
}

/// Decoded image samples with their geometry
#[derive(Debug, Clone, PartialEq)]
pub struct PixelArray {
    shape: ImageShape,
    data: Vec<f64>,
}

impl PixelArray {
    /// Create a pixel array from row-major, channel-last samples
    ///
    /// # Returns
    /// The array, `EmptyChannelAxis` if `shape` declares zero channels, or
    /// `SampleCount` if `data` does not match `shape`
    pub fn new(shape: ImageShape, data: Vec<f64>) -> ProfileResult<Self> {
        if shape.channels == Some(0) {
            return Err(ProfileError::EmptyChannelAxis { shape });
        }
        let expected = shape.sample_count();
        if data.len() != expected {
            return Err(ProfileError::SampleCount {
                shape,
                expected,
                found: data.len(),
            });
        }
        Ok(PixelArray { shape, data })
    }

    /// Create a pixel array by widening samples of any numeric type
    pub fn from_samples<T>(shape: ImageShape, samples: &[T]) -> ProfileResult<Self>
    where
        T: Copy + Into<f64>,
    {
        Self::new(shape, samples.iter().map(|&s| s.into()).collect())
    }

    pub fn shape(&self) -> ImageShape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Whether the array carries a channel axis
    pub fn is_multichannel(&self) -> bool {
        self.shape.channels.is_some()
    }

    /// Raw samples in row-major, channel-last order
    pub fn samples(&self) -> &[f64] {
        &self.data
    }

    /// Copy one channel out as a two-dimensional array
    ///
    /// # Returns
    /// The plane, or None if `channel` does not exist
    pub fn channel_plane(&self, channel: usize) -> Option<PixelArray> {
        if channel >= self.shape.samples_per_pixel() {
            return None;
        }
        Some(self.plane(channel))
    }

    /// Copy channel 0 out as a two-dimensional array
    ///
    /// Every array has a channel 0 since `new` rejects an empty channel axis.
    pub fn first_plane(&self) -> PixelArray {
        self.plane(0)
    }

    fn plane(&self, channel: usize) -> PixelArray {
        let spp = self.shape.samples_per_pixel();
        PixelArray {
            shape: ImageShape::gray(self.shape.rows, self.shape.cols),
            data: self.data.iter().skip(channel).step_by(spp).copied().collect(),
        }
    }

    /// Get one sample
    ///
    /// # Returns
    /// The value at the specified position, or None if out of bounds
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<f64> {
        let spp = self.shape.samples_per_pixel();
        if row >= self.shape.rows || col >= self.shape.cols || channel >= spp {
            return None;
        }
        self.data.get((row * self.shape.cols + col) * spp + channel).copied()
    }
}
