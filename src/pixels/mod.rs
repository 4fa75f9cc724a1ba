//! Pixel data access
//!
//! This module turns image files into dense sample arrays and reduces
//! colour-stored greyscale arrays to a single channel.

mod array;
mod decoder;
pub mod grayscale;

pub use array::{ImageShape, PixelArray};
pub use decoder::{pixels_from_image, ImageCrateDecoder, ImageDecoder};
