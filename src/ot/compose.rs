//! Compose: merge two sequential operations from one author
//!
//! `op2` applies to the document produced by `op1`. Only two shapes merge:
//! - Insert + Insert when `op2` starts exactly where `op1`'s text ended (typing)
//! - Delete + Delete at the same position (repeated forward delete)
//!
//! Everything else is left alone. Composition is partial by nature, so
//! "cannot merge" is a normal outcome rather than an error.

use super::operation::{char_len, Operation};

/// Merge `op1` and `op2` into one operation, or return `op2` unchanged
///
/// # Example
///
/// ```
/// use synckit_ot::ot::{compose, Operation};
///
/// let typed = compose(&Operation::insert(0, "he"), &Operation::insert(2, "y"));
/// assert_eq!(typed, Operation::insert(0, "hey"));
///
/// // Mixed kinds never merge
/// let op2 = Operation::delete(0, 1);
/// assert_eq!(compose(&Operation::insert(0, "x"), &op2), op2);
/// ```
pub fn compose(op1: &Operation, op2: &Operation) -> Operation {
    try_compose(op1, op2).unwrap_or_else(|| op2.clone())
}

/// Merge `op1` and `op2`, or `None` when no reduction is possible
pub fn try_compose(op1: &Operation, op2: &Operation) -> Option<Operation> {
    let merged = match (op1, op2) {
        (
            Operation::Insert { position, content },
            Operation::Insert {
                position: next,
                content: more,
            },
        ) if position.checked_add(char_len(content)) == Some(*next) => {
            let mut combined = String::with_capacity(content.len() + more.len());
            combined.push_str(content);
            combined.push_str(more);
            Some(Operation::insert(*position, combined))
        }
        (
            Operation::Delete { position, length },
            Operation::Delete {
                position: next,
                length: more,
            },
        ) if position == next => Some(Operation::delete(*position, length.saturating_add(*more))),
        _ => None,
    };

    if merged.is_none() {
        log::debug!("compose {} then {}: not mergeable", op1, op2);
    }
    merged
}

/// Fold a burst of sequential operations, merging adjacent pairs
///
/// Each operation is merged into the one before it when [`try_compose`]
/// allows; otherwise it starts a new entry. Applying the result in order is
/// equivalent to applying `ops` in order.
pub fn coalesce<'a, I>(ops: I) -> Vec<Operation>
where
    I: IntoIterator<Item = &'a Operation>,
{
    let mut result: Vec<Operation> = Vec::new();

    for op in ops {
        if let Some(last) = result.last_mut() {
            if let Some(merged) = try_compose(last, op) {
                *last = merged;
                continue;
            }
        }
        result.push(op.clone());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ot::apply;

    #[test]
    fn test_compose_adjacent_inserts() {
        let op1 = Operation::insert(3, "ab");
        let op2 = Operation::insert(5, "cd");
        assert_eq!(compose(&op1, &op2), Operation::insert(3, "abcd"));
    }

    #[test]
    fn test_compose_inserts_uses_char_length() {
        let op1 = Operation::insert(0, "hé");
        let op2 = Operation::insert(2, "👋");
        assert_eq!(compose(&op1, &op2), Operation::insert(0, "hé👋"));
    }

    #[test]
    fn test_compose_non_adjacent_inserts() {
        let op1 = Operation::insert(3, "ab");
        let op2 = Operation::insert(4, "cd");
        assert_eq!(try_compose(&op1, &op2), None);
        assert_eq!(compose(&op1, &op2), op2);
    }

    #[test]
    fn test_compose_deletes_same_position() {
        let op1 = Operation::delete(2, 1);
        let op2 = Operation::delete(2, 3);
        assert_eq!(compose(&op1, &op2), Operation::delete(2, 4));
    }

    #[test]
    fn test_compose_deletes_saturates_length() {
        let op1 = Operation::delete(2, usize::MAX);
        let op2 = Operation::delete(2, 3);
        let merged = compose(&op1, &op2);
        assert_eq!(merged, Operation::delete(2, usize::MAX));

        let doc = "hello";
        let sequential = crate::ot::apply_all(doc, &[op1, op2]).unwrap();
        assert_eq!(crate::ot::apply(doc, &merged).unwrap(), sequential);
    }

    #[test]
    fn test_compose_insert_at_max_position_not_merged() {
        let op1 = Operation::insert(usize::MAX, "ab");
        let op2 = Operation::insert(1, "c");
        assert_eq!(try_compose(&op1, &op2), None);
    }

    #[test]
    fn test_compose_backspace_not_merged() {
        let op1 = Operation::delete(4, 1);
        let op2 = Operation::delete(3, 1);
        assert_eq!(compose(&op1, &op2), op2);
    }

    #[test]
    fn test_compose_mixed_kinds_returns_op2() {
        let pairs = [
            (Operation::insert(0, "a"), Operation::delete(0, 1)),
            (Operation::delete(0, 1), Operation::insert(0, "a")),
            (Operation::retain(0), Operation::retain(0)),
            (Operation::insert(0, "a"), Operation::retain(1)),
        ];
        for (op1, op2) in &pairs {
            assert_eq!(compose(op1, op2), *op2);
        }
    }

    #[test]
    fn test_composed_equivalent_to_sequence() {
        let doc = "hello world";
        let op1 = Operation::delete(5, 1);
        let op2 = Operation::delete(5, 2);

        let sequential = apply(&apply(doc, &op1).unwrap(), &op2).unwrap();
        let merged = apply(doc, &compose(&op1, &op2)).unwrap();
        assert_eq!(sequential, merged);
        assert_eq!(merged, "hellorld");
    }

    #[test]
    fn test_coalesce_typing_burst() {
        let burst: Vec<Operation> = "hey"
            .chars()
            .enumerate()
            .map(|(i, c)| Operation::insert(i, c.to_string()))
            .collect();

        assert_eq!(coalesce(&burst), vec![Operation::insert(0, "hey")]);
    }

    #[test]
    fn test_coalesce_keeps_breaks() {
        let ops = vec![
            Operation::insert(0, "a"),
            Operation::insert(1, "b"),
            Operation::delete(0, 1),
            Operation::delete(0, 1),
            Operation::insert(0, "z"),
        ];
        let coalesced = coalesce(&ops);
        assert_eq!(
            coalesced,
            vec![
                Operation::insert(0, "ab"),
                Operation::delete(0, 2),
                Operation::insert(0, "z"),
            ]
        );

        let doc = "xyz";
        let expected = crate::ot::apply_all(doc, &ops).unwrap();
        assert_eq!(crate::ot::apply_all(doc, &coalesced).unwrap(), expected);
    }

    #[test]
    fn test_coalesce_empty() {
        let ops: Vec<Operation> = Vec::new();
        assert!(coalesce(&ops).is_empty());
    }
}
