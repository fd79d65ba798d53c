use crate::{error::IoError, functional::dims_u32};
use jpeg_encoder::{ColorType, Encoder};
use pixlab_image::{ImageSize, Raster};
use std::{fs, path::Path};

/// Writes the given raster as a JPEG file.
///
/// JPEG has no alpha channel, so alpha is dropped.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG image.
/// - `raster` - The raster to encode.
/// - `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest)
pub fn write_image_jpeg(
    file_path: impl AsRef<Path>,
    raster: &Raster,
    quality: u8,
) -> Result<(), IoError> {
    let (width, height) = dims_u32(raster)?;
    let (width, height) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(IoError::ImageTooLarge(raster.width(), raster.height())),
    };

    let encoder = Encoder::new_file(file_path, quality)?;
    encoder.encode(&raster.to_rgb8(), width, height, ColorType::Rgb)?;
    Ok(())
}

/// Read a JPEG image into an opaque raster.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG file.
pub fn read_image_jpeg(file_path: impl AsRef<Path>) -> Result<Raster, IoError> {
    let jpeg_data = fs::read(file_path)?;
    decode_image_jpeg(&jpeg_data)
}

/// Decodes a JPEG image from raw bytes into an opaque raster.
///
/// # Arguments
///
/// - `src` - Raw bytes of the jpeg file
pub fn decode_image_jpeg(src: &[u8]) -> Result<Raster, IoError> {
    let mut decoder = zune_jpeg::JpegDecoder::new(src);
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(zune_jpeg::errors::DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let image_size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;

    // grayscale sources decode to a single channel
    if img_data.len() == image_size.area() {
        Ok(Raster::from_gray8(image_size, &img_data)?)
    } else {
        Ok(Raster::from_rgb8(image_size, &img_data)?)
    }
}
