//! Shared constants and error types.

/// Crate-wide constants.
pub mod constants;
/// Error enumeration for the crate.
pub mod error;

pub use error::CoreError;
