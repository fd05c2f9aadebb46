//! Operational transformation for plain-text documents
//!
//! Every function in this module is pure: it takes values and returns new
//! values, with no state of its own. A synchronization layer drives it:
//!
//! - [`transform`] reconciles a local operation with a concurrent remote one
//! - [`apply`] updates the local buffer
//! - [`compose`] / [`coalesce`] shrink a burst of local edits before sending
//! - [`invert`] builds undo operations
//! - [`diff`] turns editor snapshots into operations
//!
//! # Convergence
//!
//! For operations `a` and `b` generated against the same document `d`,
//! with opposite sides on the two replicas:
//!
//! ```text
//! apply(apply(d, a), transform(b, a, side.opposite()))
//!     == apply(apply(d, b), transform(a, b, side))
//! ```
//!
//! # References
//!
//! - "Concurrency Control in Groupware Systems" (Ellis & Gibbs, 1989)
//! - "Achieving Convergence, Causality Preservation, and Intention Preservation
//!   in Real-Time Cooperative Editing Systems" (Sun et al., 1998)

mod apply;
mod compose;
mod diff;
mod invert;
mod operation;
mod tie_break;
mod transform;

pub use apply::{apply, apply_all, apply_to_rope};
pub use compose::{coalesce, compose, try_compose};
pub use diff::diff;
pub use invert::invert;
pub use operation::{Operation, OperationKind};
pub use tie_break::{Stamped, TieBreak};
pub use transform::{transform, transform_all, transform_pair, Side};
