//! Invert: build the operation that undoes another
//!
//! The engine keeps no history, so undoing a delete needs the document the
//! delete was generated against.

use super::operation::{char_len, Operation};
use crate::error::{OtError, Result};

/// Operation that undoes `op`, given its base `document`
///
/// - Insert becomes a Delete of the inserted length at the same position
/// - Delete becomes an Insert of the removed slice (clamped to the document end)
/// - Retain inverts to itself
///
/// # Errors
///
/// A Delete starting past the end of `document` was generated against a
/// different document and cannot be inverted.
///
/// # Example
///
/// ```
/// use synckit_ot::ot::{apply, invert, Operation};
///
/// let doc = "hello world";
/// let op = Operation::delete(5, 6);
/// let undo = invert(&op, doc).unwrap();
///
/// assert_eq!(undo, Operation::insert(5, " world"));
/// assert_eq!(apply(&apply(doc, &op).unwrap(), &undo).unwrap(), doc);
/// ```
pub fn invert(op: &Operation, document: &str) -> Result<Operation> {
    match op {
        Operation::Insert { position, content } => {
            Ok(Operation::delete(*position, char_len(content)))
        }
        Operation::Delete { position, length } => {
            let doc_len = char_len(document);
            if *position > doc_len {
                return Err(OtError::PositionOutOfBounds {
                    position: *position,
                    length: doc_len,
                });
            }
            let removed: String = document.chars().skip(*position).take(*length).collect();
            Ok(Operation::insert(*position, removed))
        }
        Operation::Retain { .. } => Ok(op.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ot::apply;

    #[test]
    fn test_invert_insert() {
        let op = Operation::insert(2, "héllo");
        assert_eq!(invert(&op, "ab").unwrap(), Operation::delete(2, 5));
    }

    #[test]
    fn test_invert_delete_recovers_text() {
        let doc = "abcdef";
        let op = Operation::delete(1, 3);
        assert_eq!(invert(&op, doc).unwrap(), Operation::insert(1, "bcd"));
    }

    #[test]
    fn test_invert_delete_overrun_is_clamped() {
        let doc = "abcdef";
        let op = Operation::delete(4, 10);
        let undo = invert(&op, doc).unwrap();
        assert_eq!(undo, Operation::insert(4, "ef"));
        assert_eq!(apply(&apply(doc, &op).unwrap(), &undo).unwrap(), doc);
    }

    #[test]
    fn test_invert_delete_past_end_fails() {
        let result = invert(&Operation::delete(7, 1), "abc");
        assert_eq!(
            result,
            Err(OtError::PositionOutOfBounds {
                position: 7,
                length: 3
            })
        );
    }

    #[test]
    fn test_invert_retain() {
        let op = Operation::retain(4);
        assert_eq!(invert(&op, "").unwrap(), op);
    }

    #[test]
    fn test_round_trip() {
        let doc = "the quick 🦊 jumps";
        let ops = [
            Operation::insert(0, ">> "),
            Operation::insert(17, "!"),
            Operation::delete(10, 1),
            Operation::delete(0, 18),
            Operation::delete(3, 0),
        ];

        for op in &ops {
            let undo = invert(op, doc).unwrap();
            let restored = apply(&apply(doc, op).unwrap(), &undo).unwrap();
            assert_eq!(restored, doc, "round trip failed for {}", op);
        }
    }
}
