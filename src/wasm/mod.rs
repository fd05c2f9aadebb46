//! WASM bindings for SyncKit OT
//!
//! This module provides JavaScript-friendly bindings for the transform engine.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod utils;

// Re-export main types
#[cfg(feature = "wasm")]
pub use bindings::WasmOperation;
