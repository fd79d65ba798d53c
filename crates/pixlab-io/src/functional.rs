use std::{
    fs::{self, File},
    io::{BufReader, Cursor},
    path::Path,
};

use image::ImageFormat;
use pixlab_image::{ImageSize, Raster};

use crate::error::IoError;

/// Get the extension of a file name: everything after the first `'.'` of its
/// last path component.
///
/// Only the string is inspected; the file is never opened.
///
/// # Example
///
/// ```
/// use pixlab_io::file_extension;
///
/// assert_eq!(file_extension("caterpillar.jpg").as_deref(), Some("jpg"));
/// assert_eq!(file_extension("out/beach.tar.gz").as_deref(), Some("tar.gz"));
/// assert_eq!(file_extension("../images/noext"), None);
/// ```
pub fn file_extension(file_path: impl AsRef<Path>) -> Option<String> {
    let file_name = file_path.as_ref().file_name()?.to_str()?;
    let pos = file_name.find('.')?;
    Some(file_name[pos + 1..].to_string())
}

/// Verify that the file exists and can be opened for reading.
pub fn check_readable(file_path: impl AsRef<Path>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if !file_path.is_file() || File::open(file_path).is_err() {
        return Err(IoError::FileUnreadable(file_path.to_path_buf()));
    }

    Ok(())
}

fn image_format(extension: &str) -> Result<ImageFormat, IoError> {
    ImageFormat::from_extension(extension)
        .ok_or_else(|| IoError::UnsupportedExtension(extension.to_string()))
}

/// Reads an image in any format supported by the `image` crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
/// * `extension` - The extension selecting the decoder.
///
/// # Returns
///
/// A raster with the image data. Sources without alpha are opaque.
pub fn read_image_any(file_path: impl AsRef<Path>, extension: &str) -> Result<Raster, IoError> {
    let file_path = file_path.as_ref();
    let format = image_format(extension)?;

    let file = File::open(file_path)?;
    let img = image::load(BufReader::new(file), format)?.into_rgba8();

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Raster::from_rgba8(size, img.as_raw())?)
}

/// Writes a raster in any format supported by the `image` crate.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `raster` - The raster to encode.
/// * `extension` - The extension selecting the encoder.
pub fn write_image_any(
    file_path: impl AsRef<Path>,
    raster: &Raster,
    extension: &str,
) -> Result<(), IoError> {
    let format = image_format(extension)?;
    let (width, height) = dims_u32(raster)?;

    let buf = image::RgbaImage::from_raw(width, height, raster.to_rgba8())
        .ok_or(IoError::ImageTooLarge(raster.width(), raster.height()))?;
    let dynamic = image::DynamicImage::ImageRgba8(buf);

    // some encoders only accept opaque data
    let mut bytes = Cursor::new(Vec::new());
    match dynamic.write_to(&mut bytes, format) {
        Err(image::ImageError::Unsupported(_)) => {
            bytes = Cursor::new(Vec::new());
            image::DynamicImage::ImageRgb8(dynamic.into_rgb8()).write_to(&mut bytes, format)?;
        }
        res => res?,
    }

    fs::write(file_path, bytes.into_inner())?;

    Ok(())
}

pub(crate) fn dims_u32(raster: &Raster) -> Result<(u32, u32), IoError> {
    let width = u32::try_from(raster.width())
        .map_err(|_| IoError::ImageTooLarge(raster.width(), raster.height()))?;
    let height = u32::try_from(raster.height())
        .map_err(|_| IoError::ImageTooLarge(raster.width(), raster.height()))?;
    Ok((width, height))
}
