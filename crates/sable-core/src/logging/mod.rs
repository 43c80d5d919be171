//! Logging utilities.
//!
//! This module centralizes logger initialization and keeps the rest of the
//! crate on the standard `log` facade; no other backend is imposed.

mod init;

pub use init::{init_logging, LoggingConfig};
