//! Pixel-buffer and codec configuration records.
//!
//! Scope:
//! - channel layout and alpha-compositing enumerations
//! - [`ImageInfo`] describing a pixel buffer's shape
//! - surface and codec pass-through options
//!
//! Everything here is plain configuration consumed by the native engine;
//! no pixels are touched in this crate.

mod codec;
mod format;
mod image_info;

pub use codec::{CodecOptions, ZeroInitialized};
pub use format::{AlphaType, ColorType, PixelGeometry};
pub use image_info::{platform_color_type, ImageInfo, SurfaceProps};
