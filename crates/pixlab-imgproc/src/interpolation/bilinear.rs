use pixlab_image::{Channel, Raster};

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `raster` - The input raster.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated packed value, each channel rounded to the nearest integer.
pub(crate) fn bilinear_interpolation(raster: &Raster, u: f32, v: f32) -> u32 {
    let (rows, cols) = (raster.rows(), raster.cols());

    let u = u.clamp(0.0, (cols - 1) as f32);
    let v = v.clamp(0.0, (rows - 1) as f32);

    let iu0 = u.trunc() as usize;
    let iv0 = v.trunc() as usize;

    let frac_u = u.fract();
    let frac_v = v.fract();

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };
    let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

    let data = raster.as_slice();
    let p00 = data[iv0 * cols + iu0];
    let p01 = data[iv0 * cols + iu1];
    let p10 = data[iv1 * cols + iu0];
    let p11 = data[iv1 * cols + iu1];

    Channel::ALL.iter().fold(0u32, |packed, &ch| {
        let value = ch.extract(p00) as f32 * w00
            + ch.extract(p01) as f32 * w01
            + ch.extract(p10) as f32 * w10
            + ch.extract(p11) as f32 * w11;
        ch.replace(packed, value.round().clamp(0.0, 255.0) as u8)
    })
}
