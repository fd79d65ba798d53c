#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// The picture façade: load, access pixels, transform and write.
pub mod picture;

pub use picture::{Picture, DEFAULT_EXTENSION, PLACEHOLDER_SIZE};

#[doc(inline)]
pub use pixlab_image as image;

#[doc(inline)]
pub use pixlab_imgproc as imgproc;

#[doc(inline)]
pub use pixlab_io as io;
