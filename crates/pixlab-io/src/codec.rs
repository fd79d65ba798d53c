use std::path::Path;

use pixlab_image::Raster;

use crate::{error::IoError, functional, jpeg, png};

/// Default quality used when encoding JPEG files.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Decodes files into rasters and encodes rasters into files.
///
/// The codec is selected by the extension passed alongside the path, which
/// callers derive from the file name. Implement this trait to swap the file
/// system for something else, e.g. an in-memory store in tests.
pub trait Codec {
    /// Decode the file at `path` using the codec for `extension`.
    fn decode(&self, path: &Path, extension: &str) -> Result<Raster, IoError>;

    /// Encode `raster` into the file at `path` using the codec for `extension`.
    fn encode(&self, raster: &Raster, path: &Path, extension: &str) -> Result<(), IoError>;
}

/// The file system codec.
///
/// `jpg`/`jpeg` and `png` have dedicated codecs, every other extension is
/// handed to the `image` crate.
///
/// # Example
///
/// ```no_run
/// use pixlab_io::{Codec, FileCodec};
///
/// let codec = FileCodec::default();
/// let raster = codec.decode("caterpillar.jpg".as_ref(), "jpg")?;
/// codec.encode(&raster, "output.png".as_ref(), "png")?;
/// # Ok::<(), pixlab_io::IoError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileCodec {
    /// JPEG encoding quality, from 0 (lowest) to 100 (highest).
    pub jpeg_quality: u8,
}

impl Default for FileCodec {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl Codec for FileCodec {
    fn decode(&self, path: &Path, extension: &str) -> Result<Raster, IoError> {
        functional::check_readable(path)?;

        let raster = match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => jpeg::read_image_jpeg(path)?,
            "png" => png::read_image_png(path)?,
            other => functional::read_image_any(path, other)?,
        };

        log::debug!("decoded {:?} as {}: {}", path, extension, raster.size());
        Ok(raster)
    }

    fn encode(&self, raster: &Raster, path: &Path, extension: &str) -> Result<(), IoError> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => jpeg::write_image_jpeg(path, raster, self.jpeg_quality)?,
            "png" => png::write_image_png(path, raster)?,
            other => functional::write_image_any(path, raster, other)?,
        }

        log::debug!("encoded {:?} as {}: {}", path, extension, raster.size());
        Ok(())
    }
}
