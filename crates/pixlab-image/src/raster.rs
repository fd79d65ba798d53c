use std::num::NonZeroUsize;

use crate::color::Color;
use crate::error::ImageError;
use crate::pixel::RasterView;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixlab_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl ImageSize {
    /// Number of pixels covered by the size, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Number of pixels covered by the size, or `None` if it overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixlab_image::ImageSize;
    ///
    /// assert_eq!(ImageSize { width: 4, height: 3 }.checked_area(), Some(12));
    /// assert_eq!(ImageSize { width: usize::MAX, height: 2 }.checked_area(), None);
    /// ```
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

// largest pixel count a Vec<u32> can hold
const MAX_PIXELS: usize = isize::MAX as usize / std::mem::size_of::<u32>();

/// Number of pixels of a raster of `size`, rejecting sizes that cannot be stored.
fn storage_len(size: ImageSize) -> Result<usize, ImageError> {
    match size.checked_area() {
        Some(area) if size.width > 0 && size.height > 0 && area <= MAX_PIXELS => Ok(area),
        _ => Err(ImageError::InvalidImageSize(size.width, size.height)),
    }
}

/// Represents a raster of packed ARGB pixels.
///
/// Pixels are stored in row-major order, one `u32` per pixel, so the pixel at
/// `(x, y)` lives at index `y * width + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    size: ImageSize,
    data: Vec<u32>,
}

impl Raster {
    /// Create a new raster from packed pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the raster in pixels.
    /// * `data` - The packed ARGB pixels in row-major order.
    ///
    /// # Errors
    ///
    /// If either dimension is zero, the pixel count does not fit in memory or
    /// the length of the pixel data does not match the raster size, an error
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixlab_image::{ImageSize, Raster};
    ///
    /// let raster = Raster::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u32; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(raster.width(), 10);
    /// assert_eq!(raster.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<u32>) -> Result<Self, ImageError> {
        let area = storage_len(size)?;

        if data.len() != area {
            return Err(ImageError::InvalidBufferLength(data.len(), area));
        }

        Ok(Self { size, data })
    }

    /// Create a new raster with every pixel set to the given color.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixlab_image::{Color, ImageSize, Raster};
    ///
    /// let raster = Raster::from_size_val([4, 3].into(), Color::WHITE).unwrap();
    ///
    /// assert_eq!(raster.size(), ImageSize { width: 4, height: 3 });
    /// assert_eq!(raster.get(3, 2).unwrap(), 0xffff_ffff);
    /// ```
    pub fn from_size_val(size: ImageSize, color: Color) -> Result<Self, ImageError> {
        let area = storage_len(size)?;
        Raster::new(size, vec![color.to_packed(); area])
    }

    /// Create a raster of a size known to be valid, filled with `color`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` pixels cannot be stored, like `vec!` does
    /// on capacity overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use pixlab_image::{Color, Raster};
    ///
    /// let two = NonZeroUsize::new(2).unwrap();
    /// let raster = Raster::filled(two, two, Color::BLACK);
    /// assert_eq!(raster.as_slice(), &[0xff00_0000; 4]);
    /// ```
    pub fn filled(width: NonZeroUsize, height: NonZeroUsize, color: Color) -> Self {
        let size = ImageSize {
            width: width.get(),
            height: height.get(),
        };
        let area = match storage_len(size) {
            Ok(area) => area,
            Err(err) => panic!("{err}"),
        };
        Self {
            size,
            data: vec![color.to_packed(); area],
        }
    }

    /// Create a raster from interleaved 8-bit RGBA data.
    pub fn from_rgba8(size: ImageSize, data: &[u8]) -> Result<Self, ImageError> {
        Self::from_interleaved::<4>(size, data, |px| Color::argb(px[3], px[0], px[1], px[2]))
    }

    /// Create an opaque raster from interleaved 8-bit RGB data.
    pub fn from_rgb8(size: ImageSize, data: &[u8]) -> Result<Self, ImageError> {
        Self::from_interleaved::<3>(size, data, |px| Color::rgb(px[0], px[1], px[2]))
    }

    /// Create an opaque raster from 8-bit grayscale data.
    pub fn from_gray8(size: ImageSize, data: &[u8]) -> Result<Self, ImageError> {
        Self::from_interleaved::<1>(size, data, |px| Color::rgb(px[0], px[0], px[0]))
    }

    /// Create a raster from 8-bit grayscale data with an alpha channel.
    pub fn from_gray_alpha8(size: ImageSize, data: &[u8]) -> Result<Self, ImageError> {
        Self::from_interleaved::<2>(size, data, |px| Color::argb(px[1], px[0], px[0], px[0]))
    }

    fn from_interleaved<const C: usize>(
        size: ImageSize,
        data: &[u8],
        f: impl Fn(&[u8]) -> Color,
    ) -> Result<Self, ImageError> {
        let expected = storage_len(size)?
            .checked_mul(C)
            .ok_or(ImageError::InvalidImageSize(size.width, size.height))?;
        if data.len() != expected {
            return Err(ImageError::InvalidBufferLength(data.len(), expected));
        }

        let packed = data.chunks_exact(C).map(|px| f(px).to_packed()).collect();

        Raster::new(size, packed)
    }

    /// Convert the raster into interleaved 8-bit RGBA data.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data
            .iter()
            .flat_map(|&p| {
                let c = Color::from_packed(p);
                [c.r, c.g, c.b, c.a]
            })
            .collect()
    }

    /// Convert the raster into interleaved 8-bit RGB data, dropping alpha.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .iter()
            .flat_map(|&p| {
                let c = Color::from_packed(p);
                [c.r, c.g, c.b]
            })
            .collect()
    }

    /// Get the size of the raster in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the raster in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the raster in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the raster.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the raster.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the packed pixels in row-major order.
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Get the packed pixels in row-major order, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        index_of(self.size, x, y)
    }

    /// Get the packed ARGB value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the coordinate is outside the raster.
    pub fn get(&self, x: usize, y: usize) -> Result<u32, ImageError> {
        let idx = self.index(x, y)?;
        Ok(self.data[idx])
    }

    /// Overwrite the packed ARGB value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the coordinate is outside the raster.
    pub fn set(&mut self, x: usize, y: usize, value: u32) -> Result<(), ImageError> {
        let idx = self.index(x, y)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Set every pixel of the raster to `color`.
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color.to_packed());
    }

    /// Borrow the raster as a view from which pixel handles are created.
    ///
    /// The view and every pixel built from it borrow the raster, so the
    /// raster cannot be replaced or dropped while they are alive.
    pub fn view(&mut self) -> RasterView<'_> {
        RasterView::new(self.size, &mut self.data)
    }
}

pub(crate) fn index_of(size: ImageSize, x: usize, y: usize) -> Result<usize, ImageError> {
    if x >= size.width || y >= size.height {
        return Err(ImageError::PixelIndexOutOfBounds(
            x,
            y,
            size.width,
            size.height,
        ));
    }
    Ok(y * size.width + x)
}

#[cfg(test)]
mod tests {
    use crate::{Color, ImageError, ImageSize, Raster};

    #[test]
    fn raster_smoke() -> Result<(), ImageError> {
        let raster = Raster::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u32; 10 * 20],
        )?;
        assert_eq!(raster.width(), 10);
        assert_eq!(raster.height(), 20);
        assert_eq!(raster.as_slice().len(), 200);

        Ok(())
    }

    #[test]
    fn raster_invalid_size() {
        assert_eq!(
            Raster::new([0, 3].into(), vec![]),
            Err(ImageError::InvalidImageSize(0, 3))
        );
        assert_eq!(
            Raster::new([2, 2].into(), vec![0; 3]),
            Err(ImageError::InvalidBufferLength(3, 4))
        );
    }

    #[test]
    fn raster_size_overflow() {
        let huge = ImageSize {
            width: 1 << 32,
            height: 1 << 32,
        };
        assert_eq!(huge.area(), usize::MAX);
        assert_eq!(
            Raster::from_size_val(huge, Color::WHITE),
            Err(ImageError::InvalidImageSize(1 << 32, 1 << 32))
        );
        assert_eq!(
            Raster::new(huge, vec![]),
            Err(ImageError::InvalidImageSize(1 << 32, 1 << 32))
        );

        // fits in usize but not in a Vec<u32>
        let too_big = ImageSize {
            width: usize::MAX / 2,
            height: 1,
        };
        assert_eq!(
            Raster::from_size_val(too_big, Color::BLACK),
            Err(ImageError::InvalidImageSize(usize::MAX / 2, 1))
        );
        assert!(Raster::from_rgba8(too_big, &[]).is_err());
    }

    #[test]
    fn raster_set_get() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let mut raster = Raster::from_size_val(size, Color::BLACK)?;

        for y in 0..size.height {
            for x in 0..size.width {
                let value = 0x8000_0000 | ((y * size.width + x) as u32);
                raster.set(x, y, value)?;
                assert_eq!(raster.get(x, y)?, value);
            }
        }

        // row-major storage
        assert_eq!(raster.as_slice()[4], 0x8000_0004);
        assert_eq!(raster.get(1, 1)?, 0x8000_0004);

        Ok(())
    }

    #[test]
    fn raster_out_of_bounds() -> Result<(), ImageError> {
        let mut raster = Raster::from_size_val([3, 2].into(), Color::WHITE)?;

        assert_eq!(
            raster.get(3, 0),
            Err(ImageError::PixelIndexOutOfBounds(3, 0, 3, 2))
        );
        assert_eq!(
            raster.get(0, 2),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );
        assert!(raster.set(usize::MAX, 0, 0).is_err());
        assert_eq!(raster, Raster::from_size_val([3, 2].into(), Color::WHITE)?);

        Ok(())
    }

    #[test]
    fn raster_fill() -> Result<(), ImageError> {
        let mut raster = Raster::from_size_val([5, 4].into(), Color::WHITE)?;
        raster.fill(Color::rgb(1, 2, 3));
        assert!(raster.as_slice().iter().all(|&p| p == 0xff01_0203));
        Ok(())
    }

    #[test]
    fn raster_interleaved() -> Result<(), ImageError> {
        let rgba = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let raster = Raster::from_rgba8([2, 1].into(), &rgba)?;
        assert_eq!(raster.get(0, 0)?, 0x0401_0203);
        assert_eq!(raster.to_rgba8(), rgba);
        assert_eq!(raster.to_rgb8(), vec![1, 2, 3, 5, 6, 7]);

        let gray = Raster::from_gray8([1, 1].into(), &[9])?;
        assert_eq!(gray.get(0, 0)?, 0xff09_0909);

        let rgb = Raster::from_rgb8([1, 1].into(), &[9, 8, 7])?;
        assert_eq!(rgb.get(0, 0)?, 0xff09_0807);

        assert_eq!(
            Raster::from_rgb8([2, 2].into(), &[0; 4]),
            Err(ImageError::InvalidBufferLength(4, 12))
        );

        Ok(())
    }
}
