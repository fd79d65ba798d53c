use pixlab_image::{ImageError, Raster};

use crate::{interpolation::InterpolationMode, warp::warp_affine};

/// A surface that rasterizes a source through an affine transform.
///
/// Pictures draw their scaled copies through this trait so that the resampling
/// policy can be swapped, e.g. for a fake in tests.
pub trait DrawSurface {
    /// Draw `src` into `dst` through the 2x3 matrix `m`.
    ///
    /// `dst` is already allocated with its final size and holds the background.
    fn draw(&self, src: &Raster, dst: &mut Raster, m: &[f32; 6]) -> Result<(), ImageError>;
}

/// Draws through [`warp_affine`] with a fixed interpolation mode.
///
/// # Example
///
/// ```
/// use pixlab_image::{Color, Raster};
/// use pixlab_imgproc::{warp::get_scale_matrix2d, AffineWarp, DrawSurface};
///
/// let src = Raster::from_size_val([2, 2].into(), Color::BLUE).unwrap();
/// let mut dst = Raster::from_size_val([1, 1].into(), Color::WHITE).unwrap();
///
/// AffineWarp::default()
///     .draw(&src, &mut dst, &get_scale_matrix2d(0.5, 0.5))
///     .unwrap();
/// assert_eq!(dst.get(0, 0).unwrap(), Color::BLUE.to_packed());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AffineWarp {
    /// The interpolation used to sample the source.
    pub interpolation: InterpolationMode,
}

impl AffineWarp {
    /// Create a surface sampling with the given interpolation.
    pub fn new(interpolation: InterpolationMode) -> Self {
        Self { interpolation }
    }
}

impl DrawSurface for AffineWarp {
    fn draw(&self, src: &Raster, dst: &mut Raster, m: &[f32; 6]) -> Result<(), ImageError> {
        log::debug!(
            "drawing {} into {} with {:?}",
            src.size(),
            dst.size(),
            self.interpolation
        );
        warp_affine(src, dst, m, self.interpolation)
    }
}
