//! Transform: rewrite an operation past a concurrent one
//!
//! Given `op` and `against`, both generated against the same base document,
//! `transform(op, against, side)` yields `op'` such that applying `against`
//! then `op'` gives the same text as applying `op` then
//! `transform(against, op, side.opposite())`.
//!
//! # Rules
//!
//! | op \ against | Insert at `q`                    | Delete `q..f`                          |
//! |--------------|---------------------------------|----------------------------------------|
//! | Insert at `p`| shift right if `q < p`, or `q == p` and `op` lost the tie | `p <= q`: keep; `p >= f`: shift left; inside: collapse to `q` and drop content |
//! | Delete `p..e`| `q <= p`: shift right; `p < q < e`: grow to cover insert | before: shift left; after: keep; overlap: shrink by overlap |
//! | Retain at `p`| shift right if `q <= p`          | same as Insert, no content to drop     |
//!
//! Transforming anything against a Retain is the identity.
//!
//! An insert strictly inside a concurrent delete is swallowed by it. The
//! delete grows over the inserted text on one side, so the insert must
//! vanish on the other for both replicas to agree.

use super::operation::{char_len, Operation};
use serde::{Deserialize, Serialize};

/// Which operand takes the earlier slot when two inserts meet at one offset
///
/// Both peers must pass opposite sides for the same pair of operations.
/// Derive it from a shared total order, see [`TieBreak`](super::TieBreak).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The operation being transformed goes first
    Left,
    /// The concurrent operation goes first
    Right,
}

impl Side {
    /// The side the other peer must use
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Rewrite `op` so it applies after the concurrent `against`
///
/// # Example
///
/// ```
/// use synckit_ot::ot::{transform, Operation, Side};
///
/// let a = Operation::insert(5, "!!!");
/// let b = Operation::delete(0, 5);
///
/// assert_eq!(transform(&a, &b, Side::Left), Operation::insert(0, "!!!"));
/// assert_eq!(transform(&b, &a, Side::Right), Operation::delete(0, 5));
/// ```
pub fn transform(op: &Operation, against: &Operation, side: Side) -> Operation {
    let result = match (op, against) {
        (_, Operation::Retain { .. }) => op.clone(),

        (
            Operation::Insert { position, .. },
            Operation::Insert {
                position: other,
                content,
            },
        ) => {
            if other < position || (other == position && side == Side::Right) {
                op.with_position(position.saturating_add(char_len(content)))
            } else {
                op.clone()
            }
        }

        (
            Operation::Retain { position },
            Operation::Insert {
                position: other,
                content,
            },
        ) => {
            if other <= position {
                op.with_position(position.saturating_add(char_len(content)))
            } else {
                op.clone()
            }
        }

        (
            Operation::Insert { position, .. } | Operation::Retain { position },
            Operation::Delete {
                position: start,
                length,
            },
        ) => {
            let end = start.saturating_add(*length);
            if position <= start {
                op.clone()
            } else if *position >= end {
                op.with_position(position - length)
            } else {
                match op {
                    Operation::Insert { .. } => Operation::insert(*start, String::new()),
                    _ => op.with_position(*start),
                }
            }
        }

        (
            Operation::Delete { position, length },
            Operation::Insert {
                position: other,
                content,
            },
        ) => {
            let inserted = char_len(content);
            if other <= position {
                Operation::delete(position.saturating_add(inserted), *length)
            } else if *other < position.saturating_add(*length) {
                Operation::delete(*position, length.saturating_add(inserted))
            } else {
                op.clone()
            }
        }

        (
            Operation::Delete { position, length },
            Operation::Delete {
                position: other,
                length: other_length,
            },
        ) => {
            let (a_start, a_end) = (*position, position.saturating_add(*length));
            let (b_start, b_end) = (*other, other.saturating_add(*other_length));

            if b_end <= a_start {
                Operation::delete(a_start - other_length, *length)
            } else if b_start >= a_end {
                op.clone()
            } else {
                let overlap = a_end.min(b_end).saturating_sub(a_start.max(b_start));
                let start = if b_start <= a_start { b_start } else { a_start };
                Operation::delete(start, length.saturating_sub(overlap))
            }
        }
    };

    log::trace!("transform {} against {} ({:?}) -> {}", op, against, side, result);
    result
}

/// Transform two concurrent operations against each other
///
/// Returns `(a', b')` where `a'` applies after `b` and `b'` applies after
/// `a`. `a_side` is the side of `a`; `b` gets the opposite.
pub fn transform_pair(a: &Operation, b: &Operation, a_side: Side) -> (Operation, Operation) {
    (
        transform(a, b, a_side),
        transform(b, a, a_side.opposite()),
    )
}

/// Transform `op` past a sequence of operations applied one after another
///
/// Every operation in `against` must be concurrent with `op`, and each one
/// must be defined against the document left by the ones before it.
pub fn transform_all<'a, I>(op: &Operation, against: I, side: Side) -> Operation
where
    I: IntoIterator<Item = &'a Operation>,
{
    against
        .into_iter()
        .fold(op.clone(), |acc, other| transform(&acc, other, side))
}
