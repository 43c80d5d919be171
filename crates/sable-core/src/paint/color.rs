use core::fmt;

use bytemuck::{Pod, Zeroable};

/// Packed 32-bit color, `0xAARRGGBB` (alpha in the high byte).
///
/// The packed word matches the engine's color layout bit-for-bit; channel
/// accessors are lossless bit extraction. Channel inputs are already
/// byte-width, so construction needs no range validation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Pod, Zeroable)]
pub struct Color(u32);

impl Color {
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(
            ((alpha as u32) << 24)
                | ((red as u32) << 16)
                | ((green as u32) << 8)
                | (blue as u32),
        )
    }

    /// Opaque color (alpha fixed at 255).
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0xff)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::from_rgb(0xff, 0xff, 0xff)
    }

    /// Copy with the same R/G/B and a replaced alpha channel.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::new(self.red(), self.green(), self.blue(), alpha)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xff) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    fn channel_extrema(self) -> (u8, u8) {
        let r = self.red();
        let g = self.green();
        let b = self.blue();
        (r.min(g).min(b), r.max(g).max(b))
    }

    /// HSL lightness of the RGB channels, in `[0, 1]`.
    pub fn brightness(self) -> f32 {
        let (min, max) = self.channel_extrema();
        (max as f32 + min as f32) / 510.0
    }

    /// HSL saturation of the RGB channels, in `[0, 1]`.
    ///
    /// Achromatic colors report 0. The lightness fold (`510 - sum` for sums
    /// above 255) is part of the formula, not a rounding artifact.
    pub fn saturation(self) -> f32 {
        let (min, max) = self.channel_extrema();
        if max == min {
            return 0.0;
        }

        let mut sum = max as i32 + min as i32;
        if sum > 255 {
            sum = 510 - sum;
        }

        (max - min) as f32 / sum as f32
    }

    /// HSL hue of the RGB channels, in degrees `[0, 360)`.
    ///
    /// Achromatic colors report 0. The sector selection runs three
    /// independent checks in red, green, blue order, so on an exact channel
    /// tie the last matching sector wins; the engine's consumers depend on
    /// that precedence.
    pub fn hue(self) -> f32 {
        let r = self.red();
        let g = self.green();
        let b = self.blue();
        let (min, max) = self.channel_extrema();
        if max == min {
            return 0.0;
        }

        let diff = (max - min) as f32;
        let r_norm = (max - r) as f32 / diff;
        let g_norm = (max - g) as f32 / diff;
        let b_norm = (max - b) as f32 / diff;

        let mut hue = 0.0;
        if r == max {
            hue = 60.0 * (6.0 + b_norm - g_norm);
        }
        if g == max {
            hue = 60.0 * (2.0 + r_norm - b_norm);
        }
        if b == max {
            hue = 60.0 * (4.0 + g_norm - r_norm);
        }
        if hue > 360.0 {
            hue -= 360.0;
        }

        hue
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(packed: u32) -> Color {
        Color(packed)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(color: Color) -> u32 {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.alpha(),
            self.red(),
            self.green(),
            self.blue()
        )
    }
}
