//! Grayscale reduction
//!
//! Greyscale images saved as colour carry identical values in every channel.
//! Reduction keeps channel 0 only; channels are neither averaged nor
//! luminance-weighted.

use std::borrow::Cow;

use super::array::PixelArray;

/// Collapse a channel-last array to a single-channel array
///
/// Arrays without a channel axis are borrowed unchanged.
pub fn to_grayscale(pixels: &PixelArray) -> Cow<'_, PixelArray> {
    if !pixels.is_multichannel() {
        return Cow::Borrowed(pixels);
    }
    Cow::Owned(first_channel(pixels))
}

/// Build a two-dimensional array from channel 0 of `pixels`
pub fn first_channel(pixels: &PixelArray) -> PixelArray {
    pixels.first_plane()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::ImageShape;

    #[test]
    fn test_first_channel_is_not_an_average() {
        // channel 0 = 10*i, channel 1 = 200, channel 2 = 0
        let mut samples = Vec::new();
        for i in 0..6u8 {
            samples.extend_from_slice(&[10 * i, 200, 0]);
        }
        let rgb = PixelArray::from_samples(ImageShape::with_channels(2, 3, 3), &samples).unwrap();

        let gray = first_channel(&rgb);
        assert_eq!(gray.shape(), ImageShape::gray(2, 3));
        assert_eq!(gray.samples(), &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
    }

    #[test]
    fn test_gray_input_is_borrowed() {
        let gray = PixelArray::from_samples(ImageShape::gray(1, 2), &[3u8, 4]).unwrap();
        assert!(matches!(to_grayscale(&gray), Cow::Borrowed(_)));
    }

    #[test]
    fn test_single_explicit_channel_is_flattened() {
        let one = PixelArray::from_samples(ImageShape::with_channels(1, 2, 1), &[3u8, 4]).unwrap();
        let reduced = to_grayscale(&one);
        assert_eq!(reduced.shape(), ImageShape::gray(1, 2));
        assert_eq!(reduced.samples(), &[3.0, 4.0]);
    }
}
