use pixlab_image::Raster;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `raster` - The input raster.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The packed value of the nearest pixel.
pub(crate) fn nearest_neighbor_interpolation(raster: &Raster, u: f32, v: f32) -> u32 {
    let (rows, cols) = (raster.rows(), raster.cols());

    let iu = (u.round().max(0.0) as usize).min(cols - 1);
    let iv = (v.round().max(0.0) as usize).min(rows - 1);

    raster.as_slice()[iv * cols + iu]
}

#[cfg(test)]
mod tests {
    use super::nearest_neighbor_interpolation;
    use pixlab_image::{ImageError, Raster};

    #[test]
    fn nearest_picks_closest() -> Result<(), ImageError> {
        let raster = Raster::new([2, 2].into(), vec![0, 1, 2, 3])?;
        assert_eq!(nearest_neighbor_interpolation(&raster, 0.4, 0.0), 0);
        assert_eq!(nearest_neighbor_interpolation(&raster, 0.6, 0.0), 1);
        assert_eq!(nearest_neighbor_interpolation(&raster, 0.0, 0.9), 2);
        assert_eq!(nearest_neighbor_interpolation(&raster, 5.0, -3.0), 1);
        Ok(())
    }
}
