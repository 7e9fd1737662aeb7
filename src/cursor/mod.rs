//! Persisted incremental-sync watermark.
//!
//! Provides:
//! - Reading the stored cursor (healing a missing or corrupt file to `0`)
//! - Atomic replacement of the stored cursor

pub mod store;

pub use store::CursorStore;
