//! Pixel interpolation methods for image transformations.
//!
//! This module provides the interpolation algorithms used when resampling
//! rasters during geometric transformations like scaling or warping.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses nearest pixel value (no interpolation)
//! - **Bilinear**: Smooth linear interpolation between adjacent pixels
//!
//! Every channel of the packed ARGB value is interpolated independently.

mod bilinear;
mod interpolate;
mod nearest;

pub use interpolate::{interpolate_pixel, InterpolationMode};
