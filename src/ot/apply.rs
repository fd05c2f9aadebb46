//! Apply: run one operation against a text buffer
//!
//! - Insert past the end of the document is a caller bug (stale offset) and fails.
//! - Delete ranges that overrun the end are clamped to the end.
//! - Retain is the identity.

use super::operation::{char_len, Operation};
use crate::error::{OtError, Result};
use ropey::Rope;

/// Apply `op` to `document`, returning the new text
///
/// The input is left untouched; callers that keep history snapshot it
/// themselves.
///
/// # Example
///
/// ```
/// use synckit_ot::ot::{apply, Operation};
///
/// let text = apply("hello world", &Operation::delete(0, 6)).unwrap();
/// assert_eq!(text, "world");
/// ```
pub fn apply(document: &str, op: &Operation) -> Result<String> {
    match op {
        Operation::Insert { position, content } => {
            let at = byte_offset(document, *position).ok_or(OtError::PositionOutOfBounds {
                position: *position,
                length: char_len(document),
            })?;

            let mut result = String::with_capacity(document.len() + content.len());
            result.push_str(&document[..at]);
            result.push_str(content);
            result.push_str(&document[at..]);
            Ok(result)
        }
        Operation::Delete { position, length } => {
            let doc_len = char_len(document);
            let (start, end) = clamp_range(*position, *length, doc_len);

            // Both offsets are within doc_len after clamping
            let start_byte = byte_offset(document, start).unwrap_or(document.len());
            let end_byte = byte_offset(document, end).unwrap_or(document.len());

            let mut result = String::with_capacity(document.len() - (end_byte - start_byte));
            result.push_str(&document[..start_byte]);
            result.push_str(&document[end_byte..]);
            Ok(result)
        }
        Operation::Retain { .. } => Ok(document.to_string()),
    }
}

/// Apply `op` in place to a rope buffer
///
/// Same rules as [`apply`]. On error the rope is not modified.
pub fn apply_to_rope(rope: &mut Rope, op: &Operation) -> Result<()> {
    match op {
        Operation::Insert { position, content } => {
            let doc_len = rope.len_chars();
            if *position > doc_len {
                return Err(OtError::PositionOutOfBounds {
                    position: *position,
                    length: doc_len,
                });
            }
            rope.insert(*position, content);
        }
        Operation::Delete { position, length } => {
            let (start, end) = clamp_range(*position, *length, rope.len_chars());
            rope.remove(start..end);
        }
        Operation::Retain { .. } => {}
    }
    Ok(())
}

/// Apply a sequence of operations in order
///
/// Stops at the first precondition violation.
pub fn apply_all<'a, I>(document: &str, ops: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Operation>,
{
    ops.into_iter()
        .try_fold(document.to_string(), |text, op| apply(&text, op))
}

/// Clamp a delete range to the document
fn clamp_range(position: usize, length: usize, doc_len: usize) -> (usize, usize) {
    let start = position.min(doc_len);
    let end = position.saturating_add(length).min(doc_len);
    if end - start < length {
        log::debug!(
            "clamped delete {}..{} to {}..{} (document length {})",
            position,
            position.saturating_add(length),
            start,
            end,
            doc_len
        );
    }
    (start, end)
}

/// Byte offset of the `char_pos`-th character, or `None` past the end
fn byte_offset(text: &str, char_pos: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(char_pos)
}
