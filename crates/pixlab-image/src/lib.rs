#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Packed ARGB colors and channel selectors.
pub mod color;

/// Error types for the image module.
pub mod error;

/// Pixel views bound to one coordinate of a raster.
pub mod pixel;

/// Raster buffer holding one packed ARGB value per pixel.
pub mod raster;

pub use crate::color::{Channel, Color};
pub use crate::error::ImageError;
pub use crate::pixel::{Pixel, RasterView};
pub use crate::raster::{ImageSize, Raster};
