//! Error types for the operation transform engine
//!
//! Only caller bugs are errors here. Overrunning deletes are clamped and
//! incompatible compositions fall back to the second operand, so neither
//! shows up in this enum.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, OtError>;

/// Errors raised by the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtError {
    /// An offset lies beyond the end of the document it was applied to
    #[error("Position {position} out of bounds (length: {length})")]
    PositionOutOfBounds { position: usize, length: usize },

    /// A span extends beyond the end of its base document
    #[error("Range {start}..{end} out of bounds (length: {length})")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        length: usize,
    },

    /// An operation could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for OtError {
    fn from(err: serde_json::Error) -> Self {
        OtError::Serialization(err.to_string())
    }
}
