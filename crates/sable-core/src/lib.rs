//! Sable core crate.
//!
//! This crate owns the value types shared with the native 2D engine: geometry
//! (`coords`), the packed color model (`paint`), the 3x3 transform engine
//! (`transform`), and pixel-buffer descriptors (`pixel`). Everything is a
//! plain value passed by copy; the in-memory layouts of the ABI-visible
//! structs match the engine byte-for-byte.
//!
//! Concurrency: operations on distinct values need no coordination. The
//! in-place rotation setters on [`Matrix`](transform::Matrix) mutate, so
//! sharing one matrix across threads while rotating it must be serialized by
//! the caller; no internal locking is provided.

pub mod coords;
pub mod paint;
pub mod pixel;
pub mod transform;

pub mod logging;
mod error;

pub use error::Error;
