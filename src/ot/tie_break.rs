//! Tie-break keys: a total order shared by every replica
//!
//! Two inserts at the same offset need a resolution every peer agrees on.
//! Each operation carries a key made of:
//! - Author: the replica that generated the operation
//! - Seq: the author's sequence number for that operation
//!
//! The lower key takes the left slot.

use super::operation::Operation;
use super::transform::{transform, Side};
use crate::ClientID;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Total order key used to resolve same-position inserts
///
/// Ordered by author first, then by sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TieBreak {
    /// Replica that generated the operation
    pub author: ClientID,

    /// Author-local sequence number
    pub seq: u64,
}

impl TieBreak {
    /// Create a new tie-break key
    pub fn new(author: impl Into<ClientID>, seq: u64) -> Self {
        Self {
            author: author.into(),
            seq,
        }
    }

    /// Side an operation stamped with `self` takes against one stamped with `other`
    ///
    /// `None` when the keys are equal. [`Stamped::side_against`] resolves
    /// that case by content.
    pub fn side_against(&self, other: &TieBreak) -> Option<Side> {
        match self.cmp(other) {
            Ordering::Less => Some(Side::Left),
            Ordering::Greater => Some(Side::Right),
            Ordering::Equal => None,
        }
    }
}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.author.cmp(&other.author) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            other => other,
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.author, self.seq)
    }
}

/// An operation together with its tie-break key
///
/// # Example
///
/// ```
/// use synckit_ot::ot::{apply, Operation, Stamped, TieBreak};
///
/// let a = Stamped::new(Operation::insert(1, "X"), TieBreak::new("alice", 1));
/// let b = Stamped::new(Operation::insert(1, "Y"), TieBreak::new("bob", 1));
///
/// // Replica that applied `b` first
/// let left = apply(&apply("abc", &b.op).unwrap(), &a.transform(&b).op).unwrap();
/// // Replica that applied `a` first
/// let right = apply(&apply("abc", &a.op).unwrap(), &b.transform(&a).op).unwrap();
///
/// assert_eq!(left, "aXYbc");
/// assert_eq!(left, right);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stamped {
    pub op: Operation,
    pub key: TieBreak,
}

impl Stamped {
    /// Pair an operation with its key
    pub fn new(op: Operation, key: TieBreak) -> Self {
        Self { op, key }
    }

    /// Side this operation takes against `other`
    ///
    /// Equal keys fall back to comparing insert content, so two identical
    /// keys still resolve the same way on every replica.
    pub fn side_against(&self, other: &Stamped) -> Side {
        self.key
            .side_against(&other.key)
            .unwrap_or_else(|| match (&self.op, &other.op) {
                (
                    Operation::Insert { content: mine, .. },
                    Operation::Insert { content: theirs, .. },
                ) if mine > theirs => Side::Right,
                _ => Side::Left,
            })
    }

    /// Rewrite this operation past the concurrent `against`, keeping the key
    pub fn transform(&self, against: &Stamped) -> Stamped {
        let side = self.side_against(against);
        Stamped {
            op: transform(&self.op, &against.op, side),
            key: self.key.clone(),
        }
    }
}
