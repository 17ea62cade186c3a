//! Error types.

use thiserror::Error;

/// Errors surfaced by the core and its supporting tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Two decode-table rows can match the same instruction word.
    #[error(
        "decode table rows `{first}` and `{second}` overlap on opcode {opcode:#09b} \
         (funct3: {funct3:?}, bit30: {bit30:?})"
    )]
    DecodeTableOverlap {
        /// Mnemonic of the earlier row.
        first: &'static str,
        /// Mnemonic of the later row.
        second: &'static str,
        /// The shared opcode field.
        opcode: u32,
        /// The funct3 key of the earlier row.
        funct3: Option<u32>,
        /// The bit-30 key of the earlier row.
        bit30: Option<u32>,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
