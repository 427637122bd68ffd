//! # Error Types
//!
//! Errors raised by the core helpers. All use `thiserror` for derive-based
//! `Display` and `Error` implementations.

use thiserror::Error;

/// A name could not be turned into a usable identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentError {
    /// The input was empty, so sanitization produced an empty identifier.
    #[error("cannot derive an identifier from an empty name")]
    Empty,
}

/// Invalid arguments to the chunk formatter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Chunks must hold at least one byte.
    #[error("chunk size must be greater than zero")]
    ZeroSize,

    /// A value handed to the formatter does not fit in a byte.
    #[error("value at index {index} is not a byte: {value}")]
    NotAByte {
        /// Position of the offending value in the input.
        index: usize,
        /// Textual form of the offending value.
        value: String,
    },
}

/// The build timestamp could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// `SOURCE_DATE_EPOCH` is set but is not a non-negative integer.
    #[error("SOURCE_DATE_EPOCH must be a non-negative integer, got {0:?}")]
    InvalidEpoch(String),

    /// `SOURCE_DATE_EPOCH` is outside the range chrono can represent.
    #[error("SOURCE_DATE_EPOCH is out of range: {0}")]
    EpochOutOfRange(i64),
}
