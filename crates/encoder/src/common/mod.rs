//! Common types shared across the encoder.

/// Encoding and configuration error types.
pub mod error;

pub use error::{ConfigError, EncodeError};
