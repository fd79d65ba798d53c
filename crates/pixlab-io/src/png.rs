use std::{
    fs::File,
    io::{BufReader, BufWriter, Read},
    path::Path,
};

use pixlab_image::{ImageSize, Raster};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};

use crate::{error::IoError, functional::dims_u32};

/// Read a PNG image into a raster.
///
/// Palette, low bit depth and 16-bit images are normalized to 8 bits per
/// channel. Sources without alpha are opaque.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
pub fn read_image_png(file_path: impl AsRef<Path>) -> Result<Raster, IoError> {
    let file = File::open(file_path)?;
    decode_png_impl(BufReader::new(file))
}

/// Decodes a PNG image from raw bytes.
///
/// # Arguments
///
/// - `bytes` - Raw bytes of the png file
pub fn decode_image_png(bytes: &[u8]) -> Result<Raster, IoError> {
    decode_png_impl(bytes)
}

fn decode_png_impl<R: Read>(src: R) -> Result<Raster, IoError> {
    let mut decoder = Decoder::new(src);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    let raster = match info.color_type {
        ColorType::Grayscale => Raster::from_gray8(size, &buf)?,
        ColorType::GrayscaleAlpha => Raster::from_gray_alpha8(size, &buf)?,
        ColorType::Rgb => Raster::from_rgb8(size, &buf)?,
        ColorType::Rgba => Raster::from_rgba8(size, &buf)?,
        ColorType::Indexed => {
            return Err(IoError::PngDecodeError(
                "palette was not expanded".to_string(),
            ))
        }
    };

    Ok(raster)
}

/// Writes the given raster as an 8-bit RGBA PNG file.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `raster` - The raster to encode.
pub fn write_image_png(file_path: impl AsRef<Path>, raster: &Raster) -> Result<(), IoError> {
    let (width, height) = dims_u32(raster)?;
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(&raster.to_rgba8())
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}
