/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when a pixel coordinate falls outside the raster.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the requested image size is not valid.
    #[error("Invalid image size {0}x{1}, dimensions must be positive and the pixels must fit in memory")]
    InvalidImageSize(usize, usize),

    /// Error when the pixel data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidBufferLength(usize, usize),
}
