/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error when the file exists but cannot be opened for reading.
    #[error("{0} could not be opened. Check that you specified the path")]
    FileUnreadable(std::path::PathBuf),

    /// No codec is registered for the extension.
    #[error("No codec available for the extension: {0}")]
    UnsupportedExtension(String),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the raster.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] pixlab_image::ImageError),

    /// The raster is too large for the target format.
    #[error("Image of size {0}x{1} is too large for the target format")]
    ImageTooLarge(usize, usize),

    /// Error to decode the JPEG image.
    #[error("Error with Jpeg decoding. {0}")]
    JpegDecodingError(#[from] zune_jpeg::errors::DecodeErrors),

    /// Error to encode the JPEG image.
    #[error("Error with Jpeg encoding. {0}")]
    JpegEncodingError(#[from] jpeg_encoder::EncodingError),

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),

    /// Error to decode the PNG image.
    #[error("Failed to decode the png image. {0}")]
    PngDecodeError(String),

    /// Error from the generic image codecs.
    #[error("Failed to decode or encode the image. {0}")]
    ImageCodecError(#[from] image::ImageError),
}
