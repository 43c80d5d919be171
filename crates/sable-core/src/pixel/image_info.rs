use std::sync::OnceLock;

use crate::coords::{IRect, ISize};

use super::{AlphaType, ColorType, PixelGeometry};

/// The packed color layout native surfaces use on this platform.
///
/// Resolved once per process and immutable afterwards: Windows surfaces are
/// BGRA, everything else is RGBA.
pub fn platform_color_type() -> ColorType {
    static PLATFORM: OnceLock<ColorType> = OnceLock::new();
    *PLATFORM.get_or_init(|| {
        let color_type = if cfg!(windows) {
            ColorType::Bgra8888
        } else {
            ColorType::Rgba8888
        };
        log::debug!("platform color type resolved to {color_type:?}");
        color_type
    })
}

/// Shape of a pixel buffer: dimensions, channel layout, alpha mode.
///
/// Plain configuration handed to the native engine; nothing here touches
/// pixels. Dimensions are not validated, a buffer with a non-positive width
/// or height is simply [`is_empty`](Self::is_empty).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ImageInfo {
    pub width: i32,
    pub height: i32,
    pub color_type: ColorType,
    pub alpha_type: AlphaType,
}

impl ImageInfo {
    /// Info with the platform color type and premultiplied alpha.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            color_type: platform_color_type(),
            alpha_type: AlphaType::Premul,
        }
    }

    /// Copy with a replaced channel layout.
    #[inline]
    pub const fn with_color_type(self, color_type: ColorType) -> Self {
        Self { color_type, ..self }
    }

    /// Copy with a replaced alpha mode.
    #[inline]
    pub const fn with_alpha_type(self, alpha_type: AlphaType) -> Self {
        Self { alpha_type, ..self }
    }

    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        self.color_type.bytes_per_pixel()
    }

    /// Bytes in one row of the buffer. Non-positive widths count as zero.
    #[inline]
    pub fn row_bytes(self) -> usize {
        self.width.max(0) as usize * self.bytes_per_pixel()
    }

    /// Bytes in the whole buffer. Non-positive dimensions count as zero.
    #[inline]
    pub fn bytes_size(self) -> usize {
        self.height.max(0) as usize * self.row_bytes()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.alpha_type == AlphaType::Opaque
    }

    #[inline]
    pub const fn dimensions(self) -> ISize {
        ISize::new(self.width, self.height)
    }

    /// The buffer's extent as a rect anchored at the origin.
    #[inline]
    pub const fn bounds(self) -> IRect {
        IRect::from_xywh(0, 0, self.width, self.height)
    }
}

/// Display-surface description handed to the native engine.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SurfaceProps {
    pub pixel_geometry: PixelGeometry,
}

impl SurfaceProps {
    #[inline]
    pub const fn new(pixel_geometry: PixelGeometry) -> Self {
        Self { pixel_geometry }
    }
}
