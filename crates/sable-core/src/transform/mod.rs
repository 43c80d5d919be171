//! 2D transform engine.
//!
//! Scope:
//! - the nine-float 3x3 [`Matrix`] shared with the native engine
//! - composition algebra (concat, pre/post-concat, inversion)
//! - mapping of points, vectors, rects, and radii
//!
//! Geometry types remain in `coords`. The [`MatrixBackend`] trait is the
//! seam through which a native engine's numeric routines can serve the same
//! contract as the pure-Rust implementation.

mod backend;
mod matrix;

pub use backend::{MatrixBackend, SoftwareBackend};
pub use matrix::Matrix;
