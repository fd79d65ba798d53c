/// A color channel of a packed ARGB value.
///
/// The packed layout stores alpha in the most significant byte followed by
/// red, green and blue, matching the conventional ARGB word used by codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Alpha channel, bits 24..32.
    Alpha,
    /// Red channel, bits 16..24.
    Red,
    /// Green channel, bits 8..16.
    Green,
    /// Blue channel, bits 0..8.
    Blue,
}

impl Channel {
    /// All channels in packed order, most significant first.
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    /// Bit offset of the channel inside a packed value.
    pub const fn shift(self) -> u32 {
        match self {
            Channel::Alpha => 24,
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }

    /// Extract the channel from a packed ARGB value.
    ///
    /// # Example
    ///
    /// ```
    /// use pixlab_image::Channel;
    ///
    /// assert_eq!(Channel::Red.extract(0xff12_3456), 0x12);
    /// assert_eq!(Channel::Blue.extract(0xff12_3456), 0x56);
    /// ```
    pub const fn extract(self, packed: u32) -> u8 {
        ((packed >> self.shift()) & 0xff) as u8
    }

    /// Return `packed` with this channel replaced by `value`, other channels unchanged.
    pub const fn replace(self, packed: u32, value: u8) -> u32 {
        let shift = self.shift();
        (packed & !(0xff << shift)) | ((value as u32) << shift)
    }
}

/// An ARGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Alpha channel.
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create an opaque color from its red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Create a color from all four channels.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpack a color from a packed ARGB value.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            a: Channel::Alpha.extract(packed),
            r: Channel::Red.extract(packed),
            g: Channel::Green.extract(packed),
            b: Channel::Blue.extract(packed),
        }
    }

    /// Pack the color into a single ARGB value.
    ///
    /// # Example
    ///
    /// ```
    /// use pixlab_image::Color;
    ///
    /// let c = Color::argb(0x80, 0x10, 0x20, 0x30);
    /// assert_eq!(c.to_packed(), 0x8010_2030);
    /// assert_eq!(Color::from_packed(0x8010_2030), c);
    /// ```
    pub const fn to_packed(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Get a single channel of the color.
    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Alpha => self.a,
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color::from_packed(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_packed()
    }
}
