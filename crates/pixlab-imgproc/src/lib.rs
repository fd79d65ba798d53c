#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation.
pub mod interpolation;

/// drawing surfaces that rasterize a source through a transform.
pub mod surface;

/// image geometric transformations module.
pub mod warp;

pub use surface::{AffineWarp, DrawSurface};
