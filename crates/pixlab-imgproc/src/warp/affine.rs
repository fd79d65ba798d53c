use pixlab_image::{ImageError, Raster};

use crate::interpolation::{interpolate_pixel, InterpolationMode};

/// Inverts a 2x3 affine transformation matrix.
///
/// Arguments:
///
/// * `m` - The 2x3 affine transformation matrix.
///
/// Returns:
///
/// The inverted 2x3 affine transformation matrix. A singular matrix inverts
/// to all zeros.
pub fn invert_affine_transform(m: &[f32; 6]) -> [f32; 6] {
    let (a, b, c, d, e, f) = (m[0], m[1], m[2], m[3], m[4], m[5]);

    // follow OpenCV: check for determinant == 0
    let determinant = a * e - b * d;
    let inv_determinant = if determinant != 0.0 {
        1.0 / determinant
    } else {
        0.0
    };

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    [new_a, new_b, new_c, new_d, new_e, new_f]
}

/// Returns a 2x3 matrix scaling rows and columns independently.
///
/// | col_factor  0           0 |
/// | 0           row_factor  0 |
///
/// # Arguments
///
/// * `row_factor` - The scale applied along the height (y axis).
/// * `col_factor` - The scale applied along the width (x axis).
///
/// # Example
///
/// ```
/// use pixlab_imgproc::warp::get_scale_matrix2d;
///
/// let m = get_scale_matrix2d(0.5, 3.0);
/// assert_eq!(m, [3.0, 0.0, 0.0, 0.0, 0.5, 0.0]);
/// ```
pub fn get_scale_matrix2d(row_factor: f32, col_factor: f32) -> [f32; 6] {
    [col_factor, 0.0, 0.0, 0.0, row_factor, 0.0]
}

/// Applies an affine transformation to a point.
fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Applies an affine transformation to a raster.
///
/// Each destination pixel center is mapped back into the source with the
/// inverse transform. Destination pixels that land outside the source keep
/// their current value, so `dst` acts as the background being drawn onto.
///
/// # Arguments
///
/// * `src` - The input raster.
/// * `dst` - The output raster, already sized.
/// * `m` - The 2x3 affine transformation matrix mapping source to destination.
/// * `interpolation` - The interpolation mode to use.
pub fn warp_affine(
    src: &Raster,
    dst: &mut Raster,
    m: &[f32; 6],
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    // invert affine transform matrix to find corresponding positions in src from dst
    let m_inv = invert_affine_transform(m);

    let (src_rows, src_cols) = (src.rows() as f32, src.cols() as f32);
    let dst_cols = dst.cols();

    for (y, row) in dst.as_slice_mut().chunks_exact_mut(dst_cols).enumerate() {
        for (x, dst_pixel) in row.iter_mut().enumerate() {
            let (u, v) = transform_point(x as f32 + 0.5, y as f32 + 0.5, &m_inv);

            // check if the position is within the bounds of the src image
            if u >= 0.0 && u < src_cols && v >= 0.0 && v < src_rows {
                *dst_pixel = interpolate_pixel(src, u - 0.5, v - 0.5, interpolation);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pixlab_image::{Color, ImageError, Raster};

    use super::{get_scale_matrix2d, invert_affine_transform, warp_affine};
    use crate::interpolation::InterpolationMode;

    #[test]
    fn invert_scale() {
        let m = get_scale_matrix2d(4.0, 2.0);
        let inv = invert_affine_transform(&m);
        approx::assert_relative_eq!(inv[0], 0.5);
        approx::assert_relative_eq!(inv[4], 0.25);
        assert_eq!(invert_affine_transform(&[0.0; 6]), [0.0; 6]);
    }

    #[test]
    fn warp_affine_correctness_identity() -> Result<(), ImageError> {
        let src = Raster::new([4, 5].into(), (0..20).collect())?;
        let mut dst = Raster::from_size_val(src.size(), Color::WHITE)?;

        warp_affine(
            &src,
            &mut dst,
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            InterpolationMode::Nearest,
        )?;
        assert_eq!(dst.as_slice(), src.as_slice());

        let mut dst = Raster::from_size_val(src.size(), Color::WHITE)?;
        warp_affine(
            &src,
            &mut dst,
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            InterpolationMode::Bilinear,
        )?;
        assert_eq!(dst.as_slice(), src.as_slice());

        Ok(())
    }

    #[test]
    fn warp_affine_upscale_blocks() -> Result<(), ImageError> {
        let src = Raster::new([2, 2].into(), vec![10, 11, 12, 13])?;
        let mut dst = Raster::from_size_val([4, 4].into(), Color::BLACK)?;

        warp_affine(
            &src,
            &mut dst,
            &get_scale_matrix2d(2.0, 2.0),
            InterpolationMode::Nearest,
        )?;

        #[rustfmt::skip]
        let expected = vec![
            10, 10, 11, 11,
            10, 10, 11, 11,
            12, 12, 13, 13,
            12, 12, 13, 13,
        ];
        assert_eq!(dst.as_slice(), expected.as_slice());

        Ok(())
    }

    #[test]
    fn warp_affine_keeps_background() -> Result<(), ImageError> {
        let src = Raster::from_size_val([2, 2].into(), Color::RED)?;
        let mut dst = Raster::from_size_val([4, 2].into(), Color::WHITE)?;

        // shift right by two columns
        warp_affine(
            &src,
            &mut dst,
            &[1.0, 0.0, 2.0, 0.0, 1.0, 0.0],
            InterpolationMode::Nearest,
        )?;

        assert_eq!(dst.get(0, 0)?, Color::WHITE.to_packed());
        assert_eq!(dst.get(1, 1)?, Color::WHITE.to_packed());
        assert_eq!(dst.get(2, 0)?, Color::RED.to_packed());
        assert_eq!(dst.get(3, 1)?, Color::RED.to_packed());

        Ok(())
    }
}
