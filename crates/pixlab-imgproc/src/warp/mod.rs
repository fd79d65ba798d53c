//! Geometric raster transformations using affine warps.
//!
//! - Affine transformations (scaling, translation, shearing)
//! - Scale matrix generation
//! - Affine transform inversion
//!
//! # Examples
//!
//! Doubling the size of a raster:
//!
//! ```
//! use pixlab_image::{Color, Raster};
//! use pixlab_imgproc::interpolation::InterpolationMode;
//! use pixlab_imgproc::warp::{get_scale_matrix2d, warp_affine};
//!
//! let src = Raster::from_size_val([4, 3].into(), Color::RED).unwrap();
//! let mut dst = Raster::from_size_val([8, 6].into(), Color::WHITE).unwrap();
//!
//! let m = get_scale_matrix2d(2.0, 2.0);
//! warp_affine(&src, &mut dst, &m, InterpolationMode::Nearest).unwrap();
//!
//! assert!(dst.as_slice().iter().all(|&p| p == Color::RED.to_packed()));
//! ```

mod affine;

pub use affine::{get_scale_matrix2d, invert_affine_transform, warp_affine};
