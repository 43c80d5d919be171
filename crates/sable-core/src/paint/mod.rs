//! Color model shared with the native engine.
//!
//! Scope:
//! - the packed 32-bit ARGB color word
//! - channel access and HSB derivation
//!
//! Geometry types remain in `coords`; pixel-buffer layout descriptors live in
//! `pixel`.

mod color;

pub use color::Color;
