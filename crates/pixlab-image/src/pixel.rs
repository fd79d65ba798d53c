use std::cell::Cell;

use crate::color::{Channel, Color};
use crate::error::ImageError;
use crate::raster::{index_of, ImageSize};

/// A shared, mutable view over the pixels of a [`crate::Raster`].
///
/// The view is obtained with [`crate::Raster::view`] and is cheap to copy.
/// Writes go through [`Cell`], so any number of pixel handles may alias the
/// same storage on one thread while the raster stays borrowed.
#[derive(Clone, Copy, Debug)]
pub struct RasterView<'a> {
    size: ImageSize,
    cells: &'a [Cell<u32>],
}

impl<'a> RasterView<'a> {
    pub(crate) fn new(size: ImageSize, data: &'a mut [u32]) -> Self {
        Self {
            size,
            cells: Cell::from_mut(data).as_slice_of_cells(),
        }
    }

    /// Get the size of the underlying raster.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Create a pixel handle at `(x, y)`.
    ///
    /// No bounds check happens here; accessing the pixel fails if the
    /// coordinate is outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Pixel<'a> {
        Pixel { view: *self, x, y }
    }

    /// Create one pixel handle per coordinate, indexed `row * width + col`.
    pub fn pixels(&self) -> Vec<Pixel<'a>> {
        let ImageSize { width, height } = self.size();
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(self.pixel(col, row));
            }
        }
        pixels
    }

    /// Create one pixel handle per coordinate, indexed `[row][col]`.
    pub fn pixel_rows(&self) -> Vec<Vec<Pixel<'a>>> {
        let ImageSize { width, height } = self.size();
        (0..height)
            .map(|row| (0..width).map(|col| self.pixel(col, row)).collect())
            .collect()
    }

    fn cell(&self, x: usize, y: usize) -> Result<&'a Cell<u32>, ImageError> {
        let idx = index_of(self.size, x, y)?;
        Ok(&self.cells[idx])
    }
}

/// A read/write accessor bound to one coordinate of a raster.
///
/// A pixel is not a value: setting a channel writes straight through to the
/// raster it was created from. Its coordinates are fixed at construction.
///
/// # Example
///
/// ```
/// use pixlab_image::{Channel, Color, Raster};
///
/// let mut raster = Raster::from_size_val([2, 2].into(), Color::WHITE).unwrap();
/// let view = raster.view();
///
/// let pixel = view.pixel(1, 0);
/// pixel.set_channel(Channel::Green, 10).unwrap();
/// assert_eq!(pixel.color().unwrap(), Color::rgb(255, 10, 255));
///
/// assert_eq!(raster.get(1, 0).unwrap(), 0xffff_0aff);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Pixel<'a> {
    view: RasterView<'a>,
    x: usize,
    y: usize,
}

impl Pixel<'_> {
    /// The x coordinate (column) of the pixel.
    pub fn x(&self) -> usize {
        self.x
    }

    /// The y coordinate (row) of the pixel.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Read the packed ARGB value.
    pub fn packed(&self) -> Result<u32, ImageError> {
        Ok(self.view.cell(self.x, self.y)?.get())
    }

    /// Overwrite the packed ARGB value.
    pub fn set_packed(&self, value: u32) -> Result<(), ImageError> {
        self.view.cell(self.x, self.y)?.set(value);
        Ok(())
    }

    /// Read one channel.
    pub fn channel(&self, channel: Channel) -> Result<u8, ImageError> {
        Ok(channel.extract(self.packed()?))
    }

    /// Write one channel, leaving the others unchanged.
    ///
    /// Values outside `0..=255` are clamped so they never spill into the
    /// neighbouring channel.
    pub fn set_channel(&self, channel: Channel, value: i32) -> Result<(), ImageError> {
        let cell = self.view.cell(self.x, self.y)?;
        let value = value.clamp(0, 255) as u8;
        cell.set(channel.replace(cell.get(), value));
        Ok(())
    }

    /// Read the full color.
    pub fn color(&self) -> Result<Color, ImageError> {
        Ok(Color::from_packed(self.packed()?))
    }

    /// Write all channels at once, alpha included.
    pub fn set_color(&self, color: Color) -> Result<(), ImageError> {
        self.set_packed(color.to_packed())
    }

    /// Read the alpha channel.
    pub fn alpha(&self) -> Result<u8, ImageError> {
        self.channel(Channel::Alpha)
    }

    /// Read the red channel.
    pub fn red(&self) -> Result<u8, ImageError> {
        self.channel(Channel::Red)
    }

    /// Read the green channel.
    pub fn green(&self) -> Result<u8, ImageError> {
        self.channel(Channel::Green)
    }

    /// Read the blue channel.
    pub fn blue(&self) -> Result<u8, ImageError> {
        self.channel(Channel::Blue)
    }

    /// Write the alpha channel, clamped to `0..=255`.
    pub fn set_alpha(&self, value: i32) -> Result<(), ImageError> {
        self.set_channel(Channel::Alpha, value)
    }

    /// Write the red channel, clamped to `0..=255`.
    pub fn set_red(&self, value: i32) -> Result<(), ImageError> {
        self.set_channel(Channel::Red, value)
    }

    /// Write the green channel, clamped to `0..=255`.
    pub fn set_green(&self, value: i32) -> Result<(), ImageError> {
        self.set_channel(Channel::Green, value)
    }

    /// Write the blue channel, clamped to `0..=255`.
    pub fn set_blue(&self, value: i32) -> Result<(), ImageError> {
        self.set_channel(Channel::Blue, value)
    }
}
