//! SyncKit OT - Operation transform engine
//!
//! This is the text-editing core of SyncKit, compiled to both native and WASM.
//! It implements:
//! - Insert/delete/retain operations on plain text
//! - Transform with an explicit tie-break order for concurrent edits
//! - Apply, compose and invert
//! - Snapshot diffing into operations
//!
//! # Examples
//!
//! ```rust
//! use synckit_ot::ot::{apply, transform, Operation, Side};
//!
//! let doc = "hello world";
//! let a = Operation::insert(5, "!!!");
//! let b = Operation::delete(0, 5);
//!
//! // Replica 1 applied `b` first, replica 2 applied `a` first
//! let r1 = apply(&apply(doc, &b).unwrap(), &transform(&a, &b, Side::Left)).unwrap();
//! let r2 = apply(&apply(doc, &a).unwrap(), &transform(&b, &a, Side::Right)).unwrap();
//!
//! assert_eq!(r1, "!!! world");
//! assert_eq!(r1, r2);
//! ```

pub mod error;
pub mod ot;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use error::{OtError, Result};
pub use ot::{Operation, Side, Stamped, TieBreak};

/// Client identifier type
pub type ClientID = String;

/// Generate a fresh random client identifier
pub fn generate_client_id() -> ClientID {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_client_id() {
        let a = generate_client_id();
        let b = generate_client_id();

        assert_eq!(a.len(), 36);
        assert_ne!(a, b);
    }
}
