use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use pixlab_image::Raster;

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    Bilinear,
    /// Nearest neighbor interpolation
    #[default]
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `raster` - The input raster.
/// * `u` - The x coordinate of the pixel to interpolate, in pixel units.
/// * `v` - The y coordinate of the pixel to interpolate, in pixel units.
/// * `interpolation` - The interpolation mode to use.
///
/// Coordinates outside the raster are clamped to its border.
///
/// # Returns
///
/// The interpolated packed ARGB value.
pub fn interpolate_pixel(raster: &Raster, u: f32, v: f32, interpolation: InterpolationMode) -> u32 {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(raster, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(raster, u, v),
    }
}
