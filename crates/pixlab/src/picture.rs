use std::{fmt, num::NonZeroUsize, path::Path};

use pixlab_image::{Channel, Color, ImageError, ImageSize, Pixel, Raster};
use pixlab_imgproc::{warp::get_scale_matrix2d, AffineWarp, DrawSurface};
use pixlab_io::{file_extension, Codec, FileCodec, IoError};

/// Size of the blank raster a picture falls back to when loading fails.
pub const PLACEHOLDER_SIZE: ImageSize = ImageSize {
    width: 600,
    height: 200,
};

/// Extension used to write a picture that was never associated with a file.
pub const DEFAULT_EXTENSION: &str = "jpg";

const PLACEHOLDER_WIDTH: NonZeroUsize = non_zero(PLACEHOLDER_SIZE.width);
const PLACEHOLDER_HEIGHT: NonZeroUsize = non_zero(PLACEHOLDER_SIZE.height);

const fn non_zero(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("placeholder dimensions must be positive"),
    }
}

// same as a freshly allocated rgb buffer: opaque black
fn placeholder_raster() -> Raster {
    Raster::filled(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, Color::BLACK)
}

/// A picture owning one raster and the file it was read from.
///
/// Loading and writing never panic: they report failures through their
/// returned `Result` and always leave the picture holding a valid raster.
/// Pixel handles borrow the picture mutably, so the raster cannot be
/// replaced while any of them is alive.
///
/// # Example
///
/// ```
/// use pixlab::{image::Color, Picture};
///
/// let mut picture = Picture::from_size_color(3, 2, Color::rgb(0, 0, 200)).unwrap();
/// picture.decrease_blue(0.5).unwrap();
///
/// let pixel = picture.pixel_at(2, 1);
/// assert_eq!(pixel.blue().unwrap(), 100);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Picture {
    raster: Raster,
    file_name: Option<String>,
    extension: String,
}

impl Picture {
    /// Create a white picture of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidImageSize`] if a dimension is zero or the
    /// pixels do not fit in memory.
    pub fn new(width: usize, height: usize) -> Result<Self, ImageError> {
        Self::from_size_color(width, height, Color::WHITE)
    }

    /// Create a picture of the given size with every pixel set to `color`.
    pub fn from_size_color(width: usize, height: usize, color: Color) -> Result<Self, ImageError> {
        let raster = Raster::from_size_val(ImageSize { width, height }, color)?;
        Ok(Self::from_raster(raster))
    }

    /// Wrap an already decoded raster.
    pub fn from_raster(raster: Raster) -> Self {
        Self {
            raster,
            file_name: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Create a picture by loading a file with the default [`FileCodec`].
    ///
    /// Never fails: if loading fails the picture holds a blank
    /// [`PLACEHOLDER_SIZE`] raster. Call [`Picture::load`] to get the status.
    pub fn open(file_path: impl AsRef<Path>) -> Self {
        Self::open_with(file_path, &FileCodec::default())
    }

    /// Create a picture by loading a file with the given codec.
    pub fn open_with<C: Codec + ?Sized>(file_path: impl AsRef<Path>, codec: &C) -> Self {
        let mut picture = Self::from_raster(placeholder_raster());
        // failures are already logged and leave the placeholder in place
        let _ = picture.load_with(file_path, codec);
        picture
    }

    /// Load the picture from a file with the default [`FileCodec`].
    pub fn load(&mut self, file_path: impl AsRef<Path>) -> Result<(), IoError> {
        self.load_with(file_path, &FileCodec::default())
    }

    /// Load the picture from a file with the given codec.
    ///
    /// The file name is recorded and the extension becomes everything after
    /// the first `'.'` of the file name, keeping the previous extension when
    /// there is none.
    ///
    /// # Errors
    ///
    /// On any failure a warning is logged, the raster is replaced by a blank
    /// [`PLACEHOLDER_SIZE`] raster and the error is returned.
    pub fn load_with<C: Codec + ?Sized>(
        &mut self,
        file_path: impl AsRef<Path>,
        codec: &C,
    ) -> Result<(), IoError> {
        let file_path = file_path.as_ref();

        self.file_name = Some(file_path.to_string_lossy().into_owned());
        if let Some(extension) = file_extension(file_path) {
            self.extension = extension;
        }

        match codec.decode(file_path, &self.extension) {
            Ok(raster) => {
                self.raster = raster;
                Ok(())
            }
            Err(err) => {
                log::warn!(
                    "There was an error trying to open {}: {}",
                    file_path.display(),
                    err
                );
                self.raster = placeholder_raster();
                Err(err)
            }
        }
    }

    /// Write the picture to a file with the default [`FileCodec`].
    pub fn write(&self, file_path: impl AsRef<Path>) -> Result<(), IoError> {
        self.write_with(file_path, &FileCodec::default())
    }

    /// Write the picture to a file with the given codec.
    ///
    /// The format follows the extension of `file_path`, or the picture's
    /// current extension when the file name has none.
    ///
    /// # Errors
    ///
    /// On failure a warning is logged and the error is returned. The raster
    /// is left untouched.
    pub fn write_with<C: Codec + ?Sized>(
        &self,
        file_path: impl AsRef<Path>,
        codec: &C,
    ) -> Result<(), IoError> {
        let file_path = file_path.as_ref();
        let extension = file_extension(file_path).unwrap_or_else(|| self.extension.clone());

        codec
            .encode(&self.raster, file_path, &extension)
            .map_err(|err| {
                log::warn!(
                    "There was an error writing to {}: {}",
                    file_path.display(),
                    err
                );
                err
            })
    }

    /// The name of the file the picture was last loaded from, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Set the file name associated with the picture.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = Some(file_name.into());
    }

    /// The extension used when writing to a file name without one.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Get the width of the picture in pixels.
    pub fn width(&self) -> usize {
        self.raster.width()
    }

    /// Get the height of the picture in pixels.
    pub fn height(&self) -> usize {
        self.raster.height()
    }

    /// Get the size of the picture in pixels.
    pub fn size(&self) -> ImageSize {
        self.raster.size()
    }

    /// Borrow the underlying raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Borrow the underlying raster mutably.
    pub fn raster_mut(&mut self) -> &mut Raster {
        &mut self.raster
    }

    /// Consume the picture and return its raster.
    pub fn into_raster(self) -> Raster {
        self.raster
    }

    /// Read the packed ARGB value at `(x, y)`.
    pub fn get_basic_pixel(&self, x: usize, y: usize) -> Result<u32, ImageError> {
        self.raster.get(x, y)
    }

    /// Overwrite the packed ARGB value at `(x, y)`.
    pub fn set_basic_pixel(&mut self, x: usize, y: usize, argb: u32) -> Result<(), ImageError> {
        self.raster.set(x, y, argb)
    }

    /// Get a pixel handle for `(x, y)`.
    ///
    /// Bounds are checked when the pixel is accessed, not here.
    pub fn pixel_at(&mut self, x: usize, y: usize) -> Pixel<'_> {
        self.raster.view().pixel(x, y)
    }

    /// Get one pixel handle per coordinate as `[row][col]`, top to bottom and
    /// left to right.
    pub fn pixel_matrix(&mut self) -> Vec<Vec<Pixel<'_>>> {
        self.raster.view().pixel_rows()
    }

    /// Get one pixel handle per coordinate, indexed `row * width + col`.
    pub fn pixels(&mut self) -> Vec<Pixel<'_>> {
        self.raster.view().pixels()
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.raster.fill(color);
    }

    /// Multiply one channel of every pixel by `factor`.
    ///
    /// The product is truncated towards zero and clamped to `0..=255`.
    pub fn scale_channel(&mut self, channel: Channel, factor: f64) -> Result<(), ImageError> {
        for pixel in self.pixels() {
            let value = pixel.channel(channel)?;
            pixel.set_channel(channel, (value as f64 * factor) as i32)?;
        }
        Ok(())
    }

    /// Decrease the blue channel of every pixel by `factor`.
    ///
    /// `factor` is expected in `[0, 1]`; it is not checked.
    pub fn decrease_blue(&mut self, factor: f64) -> Result<(), ImageError> {
        self.scale_channel(Channel::Blue, factor)
    }

    /// Set one channel of every pixel to zero.
    pub fn zero_channel(&mut self, channel: Channel) -> Result<(), ImageError> {
        for pixel in self.pixels() {
            pixel.set_channel(channel, 0)?;
        }
        Ok(())
    }

    /// Draw `src` onto the picture with its top-left corner at `(0, 0)`.
    ///
    /// Pixels are copied without blending. Parts of `src` past the picture's
    /// edges are cropped and pixels `src` does not cover keep their value.
    pub fn draw_raster(&mut self, src: &Raster) -> Result<(), ImageError> {
        self.draw_raster_with(src, &AffineWarp::default())
    }

    /// Draw `src` onto the picture at `(0, 0)` with the given surface.
    pub fn draw_raster_with<S: DrawSurface + ?Sized>(
        &mut self,
        src: &Raster,
        surface: &S,
    ) -> Result<(), ImageError> {
        surface.draw(src, &mut self.raster, &get_scale_matrix2d(1.0, 1.0))
    }

    /// Create a scaled copy of the picture with the default [`AffineWarp`].
    ///
    /// `row_factor` scales the height and `col_factor` the width; the new
    /// dimensions are rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidImageSize`] if a scaled dimension is zero
    /// or the scaled pixels do not fit in memory.
    ///
    /// # Example
    ///
    /// ```
    /// use pixlab::Picture;
    ///
    /// let picture = Picture::new(30, 10).unwrap();
    /// let scaled = picture.scale(2.0, 0.5).unwrap();
    ///
    /// assert_eq!(scaled.height(), 20);
    /// assert_eq!(scaled.width(), 15);
    /// ```
    pub fn scale(&self, row_factor: f64, col_factor: f64) -> Result<Picture, ImageError> {
        self.scale_with(row_factor, col_factor, &AffineWarp::default())
    }

    /// Create a scaled copy of the picture drawn with the given surface.
    pub fn scale_with<S: DrawSurface + ?Sized>(
        &self,
        row_factor: f64,
        col_factor: f64,
        surface: &S,
    ) -> Result<Picture, ImageError> {
        let height = (self.height() as f64 * row_factor) as usize;
        let width = (self.width() as f64 * col_factor) as usize;

        let mut result = Picture::new(width, height)?;

        let m = get_scale_matrix2d(row_factor as f32, col_factor as f32);
        surface.draw(&self.raster, &mut result.raster, &m)?;

        log::debug!("scaled {} to {}", self.size(), result.size());
        Ok(result)
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Picture, filename {} height {} width {}",
            self.file_name().unwrap_or("None"),
            self.height(),
            self.width()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_smoke() -> Result<(), ImageError> {
        let picture = Picture::new(4, 3)?;
        assert_eq!(picture.width(), 4);
        assert_eq!(picture.height(), 3);
        assert_eq!(picture.extension(), DEFAULT_EXTENSION);
        assert_eq!(picture.file_name(), None);
        assert!(picture
            .raster()
            .as_slice()
            .iter()
            .all(|&p| p == Color::WHITE.to_packed()));
        assert_eq!(
            picture.to_string(),
            "Picture, filename None height 3 width 4"
        );

        assert_eq!(Picture::new(0, 3), Err(ImageError::InvalidImageSize(0, 3)));

        Ok(())
    }

    #[test]
    fn basic_pixel_round_trip() -> Result<(), ImageError> {
        let mut picture = Picture::new(5, 4)?;
        for y in 0..4 {
            for x in 0..5 {
                let c = (x * 31 + y * 7) as u32 | 0xff00_0000;
                picture.set_basic_pixel(x, y, c)?;
                assert_eq!(picture.get_basic_pixel(x, y)?, c);
            }
        }

        assert_eq!(
            picture.get_basic_pixel(5, 0),
            Err(ImageError::PixelIndexOutOfBounds(5, 0, 5, 4))
        );
        assert!(picture.set_basic_pixel(0, 4, 0).is_err());

        Ok(())
    }

    #[test]
    fn pixel_matrix_matches_pixels() -> Result<(), ImageError> {
        let (width, height) = (4, 3);
        let mut picture = Picture::new(width, height)?;

        let flat: Vec<(usize, usize)> = picture.pixels().iter().map(|p| (p.x(), p.y())).collect();
        let matrix = picture.pixel_matrix();

        assert_eq!(matrix.len(), height);
        for (row, pixels) in matrix.iter().enumerate() {
            assert_eq!(pixels.len(), width);
            for (col, pixel) in pixels.iter().enumerate() {
                assert_eq!((pixel.x(), pixel.y()), (col, row));
                assert_eq!(flat[row * width + col], (col, row));
            }
        }

        Ok(())
    }

    #[test]
    fn pixel_writes_reach_the_raster() -> Result<(), ImageError> {
        let mut picture = Picture::new(2, 2)?;
        picture.pixel_at(1, 1).set_color(Color::RED)?;
        picture.pixel_matrix()[0][1].set_green(77)?;

        assert_eq!(picture.get_basic_pixel(1, 1)?, Color::RED.to_packed());
        assert_eq!(
            picture.get_basic_pixel(1, 0)?,
            Color::rgb(255, 77, 255).to_packed()
        );
        assert!(picture.pixel_at(2, 0).color().is_err());

        Ok(())
    }

    #[test]
    fn fill_sets_every_pixel() -> Result<(), ImageError> {
        let mut picture = Picture::new(6, 5)?;
        let color = Color::rgb(12, 34, 56);
        picture.fill(color);

        for pixel in picture.pixels() {
            assert_eq!(pixel.color()?, color);
        }

        Ok(())
    }

    #[test]
    fn decrease_blue_truncates() -> Result<(), ImageError> {
        let mut picture = Picture::from_size_color(2, 1, Color::rgb(1, 2, 200))?;
        picture.set_basic_pixel(1, 0, Color::rgb(1, 2, 201).to_packed())?;

        picture.decrease_blue(0.5)?;

        assert_eq!(picture.pixel_at(0, 0).color()?, Color::rgb(1, 2, 100));
        assert_eq!(picture.pixel_at(1, 0).color()?, Color::rgb(1, 2, 100));

        Ok(())
    }

    #[test]
    fn scale_channel_amplifies_and_clamps() -> Result<(), ImageError> {
        let mut picture = Picture::from_size_color(1, 2, Color::rgb(90, 5, 13))?;

        picture.zero_channel(Channel::Red)?;
        picture.scale_channel(Channel::Green, 20.0)?;
        picture.scale_channel(Channel::Blue, 20.0)?;

        assert_eq!(picture.pixel_at(0, 1).color()?, Color::rgb(0, 100, 255));
        assert_eq!(picture.pixel_at(0, 0).alpha()?, 255);

        Ok(())
    }

    #[test]
    fn oversized_pictures_are_rejected() -> Result<(), ImageError> {
        assert_eq!(
            Picture::new(1 << 32, 1 << 32),
            Err(ImageError::InvalidImageSize(1 << 32, 1 << 32))
        );

        let picture = Picture::new(4, 4)?;
        assert!(matches!(
            picture.scale(1e30, 1e30),
            Err(ImageError::InvalidImageSize(_, _))
        ));

        Ok(())
    }

    #[test]
    fn draw_raster_at_origin() -> Result<(), ImageError> {
        let mut picture = Picture::new(4, 3)?;
        let small = Raster::new([2, 2].into(), vec![1, 2, 3, 4])?;

        picture.draw_raster(&small)?;

        assert_eq!(picture.size(), ImageSize { width: 4, height: 3 });
        assert_eq!(picture.get_basic_pixel(0, 0)?, 1);
        assert_eq!(picture.get_basic_pixel(1, 0)?, 2);
        assert_eq!(picture.get_basic_pixel(0, 1)?, 3);
        assert_eq!(picture.get_basic_pixel(1, 1)?, 4);
        assert_eq!(picture.get_basic_pixel(2, 0)?, Color::WHITE.to_packed());
        assert_eq!(picture.get_basic_pixel(0, 2)?, Color::WHITE.to_packed());

        // larger sources are cropped
        let large = Raster::from_size_val([5, 5].into(), Color::RED)?;
        picture.draw_raster(&large)?;
        assert_eq!(picture.width(), 4);
        assert!(picture
            .raster()
            .as_slice()
            .iter()
            .all(|&p| p == Color::RED.to_packed()));

        Ok(())
    }

    #[test]
    fn scale_maps_rows_and_cols() -> Result<(), ImageError> {
        let mut picture = Picture::new(3, 2)?;
        picture.set_basic_pixel(2, 1, Color::BLUE.to_packed())?;
        let original = picture.clone();

        let scaled = picture.scale(2.0, 2.0)?;
        assert_eq!(scaled.height(), 4);
        assert_eq!(scaled.width(), 6);
        assert_eq!(picture, original);

        // the bottom-right source pixel covers the bottom-right 2x2 block
        for (x, y) in [(4, 2), (5, 2), (4, 3), (5, 3)] {
            assert_eq!(scaled.get_basic_pixel(x, y)?, Color::BLUE.to_packed());
        }
        assert_eq!(scaled.get_basic_pixel(3, 3)?, Color::WHITE.to_packed());

        let tall = picture.scale(1.5, 1.0)?;
        assert_eq!((tall.width(), tall.height()), (3, 3));

        assert_eq!(
            picture.scale(0.1, 1.0),
            Err(ImageError::InvalidImageSize(3, 0))
        );

        Ok(())
    }
}
