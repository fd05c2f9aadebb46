//! Operation: the unit of change against a plain-text document
//!
//! An operation is generated against a *base document* and addresses it by
//! character offset. Offsets and lengths count Unicode scalar values, not
//! bytes, so `"héllo"` has length 5.
//!
//! Operations are immutable values. Transform, compose and invert all
//! produce new operations and never touch their inputs.
//!
//! # Example
//!
//! ```
//! use synckit_ot::ot::Operation;
//!
//! let op = Operation::insert(5, "!!!");
//! assert_eq!(op.position(), 5);
//! assert_eq!(op.len_delta(), 3);
//! assert_eq!(op.to_string(), "ins(5,\"!!!\")");
//! ```

use crate::error::{OtError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic edit against a text document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operation {
    /// Insert `content` at `position` (zero-width span)
    Insert { position: usize, content: String },

    /// Remove `length` characters starting at `position`
    Delete { position: usize, length: usize },

    /// No textual change; marks a point such as a cursor
    Retain { position: usize },
}

/// Variant tag of an [`Operation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Insert,
    Delete,
    Retain,
}

impl Operation {
    /// Create an insert operation
    pub fn insert(position: usize, content: impl Into<String>) -> Self {
        Operation::Insert {
            position,
            content: content.into(),
        }
    }

    /// Create a delete operation
    pub fn delete(position: usize, length: usize) -> Self {
        Operation::Delete { position, length }
    }

    /// Create a retain (no-op) operation
    pub fn retain(position: usize) -> Self {
        Operation::Retain { position }
    }

    /// Offset into the base document
    pub fn position(&self) -> usize {
        match self {
            Operation::Insert { position, .. }
            | Operation::Delete { position, .. }
            | Operation::Retain { position } => *position,
        }
    }

    /// Variant tag
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Insert { .. } => OperationKind::Insert,
            Operation::Delete { .. } => OperationKind::Delete,
            Operation::Retain { .. } => OperationKind::Retain,
        }
    }

    /// Effective span `(start, end)` in the base document
    ///
    /// Inserts and retains are zero-width; a delete covers
    /// `position..position + length`, saturating at `usize::MAX`.
    pub fn span(&self) -> (usize, usize) {
        match self {
            Operation::Delete { position, length } => {
                (*position, position.saturating_add(*length))
            }
            other => (other.position(), other.position()),
        }
    }

    /// Signed change in document length once applied to its base document
    pub fn len_delta(&self) -> isize {
        match self {
            Operation::Insert { content, .. } => char_len(content) as isize,
            Operation::Delete { length, .. } => -(*length as isize),
            Operation::Retain { .. } => 0,
        }
    }

    /// Whether applying this operation leaves every document unchanged
    pub fn is_noop(&self) -> bool {
        match self {
            Operation::Insert { content, .. } => content.is_empty(),
            Operation::Delete { length, .. } => *length == 0,
            Operation::Retain { .. } => true,
        }
    }

    /// Check that this operation fits a base document of `doc_len` characters
    pub fn validate(&self, doc_len: usize) -> Result<()> {
        match self {
            Operation::Delete { position, length } => {
                // An overflowing end is reported as usize::MAX
                let end = position.checked_add(*length).unwrap_or(usize::MAX);
                if end > doc_len {
                    Err(OtError::RangeOutOfBounds {
                        start: *position,
                        end,
                        length: doc_len,
                    })
                } else {
                    Ok(())
                }
            }
            op if op.position() > doc_len => Err(OtError::PositionOutOfBounds {
                position: op.position(),
                length: doc_len,
            }),
            _ => Ok(()),
        }
    }

    /// Copy of this operation moved to `position`
    pub(crate) fn with_position(&self, position: usize) -> Self {
        match self {
            Operation::Insert { content, .. } => Operation::insert(position, content.clone()),
            Operation::Delete { length, .. } => Operation::delete(position, *length),
            Operation::Retain { .. } => Operation::retain(position),
        }
    }

    /// Encode as JSON for the synchronization layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON produced by [`Operation::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert { position, content } => write!(f, "ins({},{:?})", position, content),
            Operation::Delete { position, length } => write!(f, "del({},{})", position, length),
            Operation::Retain { position } => write!(f, "ret({})", position),
        }
    }
}

/// Length of `text` in characters
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
