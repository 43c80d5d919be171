use crate::error::Error;

/// Channel layout of a pixel buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorType {
    Unknown,
    Alpha8,
    Rgb565,
    Argb4444,
    Rgba8888,
    Bgra8888,
    Index8,
    Gray8,
    RgbaF16,
}

impl ColorType {
    /// Bytes occupied by one pixel of this layout; `Unknown` occupies zero.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            ColorType::Unknown => 0,
            ColorType::Alpha8 | ColorType::Index8 | ColorType::Gray8 => 1,
            ColorType::Rgb565 | ColorType::Argb4444 => 2,
            ColorType::Rgba8888 | ColorType::Bgra8888 => 4,
            ColorType::RgbaF16 => 8,
        }
    }
}

impl TryFrom<i32> for ColorType {
    type Error = Error;

    /// Decodes a color type arriving over the ABI as a raw integer.
    fn try_from(value: i32) -> Result<Self, Error> {
        match value {
            0 => Ok(ColorType::Unknown),
            1 => Ok(ColorType::Alpha8),
            2 => Ok(ColorType::Rgb565),
            3 => Ok(ColorType::Argb4444),
            4 => Ok(ColorType::Rgba8888),
            5 => Ok(ColorType::Bgra8888),
            6 => Ok(ColorType::Index8),
            7 => Ok(ColorType::Gray8),
            8 => Ok(ColorType::RgbaF16),
            other => Err(Error::UnsupportedColorType(other)),
        }
    }
}

/// How the alpha channel composites.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlphaType {
    Unknown,
    Opaque,
    Premul,
    Unpremul,
}

/// Subpixel arrangement of a display surface.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PixelGeometry {
    #[default]
    Unknown,
    RgbHorizontal,
    BgrHorizontal,
    RgbVertical,
    BgrVertical,
}

impl PixelGeometry {
    #[inline]
    pub const fn is_rgb(self) -> bool {
        matches!(self, PixelGeometry::RgbHorizontal | PixelGeometry::RgbVertical)
    }

    #[inline]
    pub const fn is_bgr(self) -> bool {
        matches!(self, PixelGeometry::BgrHorizontal | PixelGeometry::BgrVertical)
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, PixelGeometry::RgbHorizontal | PixelGeometry::BgrHorizontal)
    }

    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, PixelGeometry::RgbVertical | PixelGeometry::BgrVertical)
    }
}
