#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, encoding/decoding failures,
/// and format-specific errors.
pub mod error;

/// The codec gateway used by pictures to decode and encode files.
///
/// See [`codec::FileCodec`] for the extension-keyed default implementation.
pub mod codec;

/// High-level helpers shared by the codecs.
///
/// Extension parsing, readability checks and the fallback codec backed by
/// the `image` crate.
pub mod functional;

/// JPEG image encoding and decoding.
///
/// Pure Rust JPEG codec for reading and writing JPEG images.
pub mod jpeg;

/// PNG image encoding and decoding.
pub mod png;

pub use crate::codec::{Codec, FileCodec, DEFAULT_JPEG_QUALITY};
pub use crate::error::IoError;
pub use crate::functional::file_extension;
