//! Image decoding strategies
//!
//! This module defines how image files are turned into `PixelArray`s. The
//! batch only depends on the `ImageDecoder` trait, so alternative sources
//! (in-memory fixtures, other codecs) can be plugged in.

use std::path::Path;

use image::{DynamicImage, ImageBuffer, Pixel};
use log::debug;

use crate::errors::{ProfileError, ProfileResult};

use super::array::{ImageShape, PixelArray};

/// Strategy for decoding an image file into pixel samples
pub trait ImageDecoder {
    /// Decode the file at `path`
    ///
    /// # Returns
    /// The decoded samples with their geometry, or an error naming the path
    fn decode(&self, path: &Path) -> ProfileResult<PixelArray>;
}

/// Decoder backed by the `image` crate
///
/// Plain greyscale images decode to two-dimensional arrays. Anything with
/// more than one sample per pixel keeps an explicit channel axis:
/// greyscale+alpha has 2 channels, RGB 3 and RGBA 4.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateDecoder;

impl ImageCrateDecoder {
    pub fn new() -> Self {
        ImageCrateDecoder
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, path: &Path) -> ProfileResult<PixelArray> {
        let image = image::open(path).map_err(|source| ProfileError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let pixels = pixels_from_image(image)?;
        debug!("Decoded {}: {}", path.display(), pixels.shape());
        Ok(pixels)
    }
}

/// Convert a decoded `DynamicImage` into a `PixelArray` without losing bit depth
pub fn pixels_from_image(image: DynamicImage) -> ProfileResult<PixelArray> {
    match image {
        DynamicImage::ImageLuma8(buffer) => plane(&buffer),
        DynamicImage::ImageLuma16(buffer) => plane(&buffer),
        DynamicImage::ImageLumaA8(buffer) => channels(&buffer),
        DynamicImage::ImageLumaA16(buffer) => channels(&buffer),
        DynamicImage::ImageRgb8(buffer) => channels(&buffer),
        DynamicImage::ImageRgb16(buffer) => channels(&buffer),
        DynamicImage::ImageRgb32F(buffer) => channels(&buffer),
        DynamicImage::ImageRgba8(buffer) => channels(&buffer),
        DynamicImage::ImageRgba16(buffer) => channels(&buffer),
        DynamicImage::ImageRgba32F(buffer) => channels(&buffer),
        other => channels(&other.to_rgba32f()),
    }
}

/// Two-dimensional array from a single-sample pixel buffer
fn plane<P>(buffer: &ImageBuffer<P, Vec<P::Subpixel>>) -> ProfileResult<PixelArray>
where
    P: Pixel,
    P::Subpixel: Into<f64>,
{
    let shape = ImageShape::gray(buffer.height() as usize, buffer.width() as usize);
    PixelArray::from_samples(shape, buffer.as_raw())
}

/// Channel-last array from a multi-sample pixel buffer
fn channels<P>(buffer: &ImageBuffer<P, Vec<P::Subpixel>>) -> ProfileResult<PixelArray>
where
    P: Pixel,
    P::Subpixel: Into<f64>,
{
    let shape = ImageShape::with_channels(
        buffer.height() as usize,
        buffer.width() as usize,
        P::CHANNEL_COUNT as usize,
    );
    PixelArray::from_samples(shape, buffer.as_raw())
}
