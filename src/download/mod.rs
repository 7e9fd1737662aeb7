//! Download module for the incremental sync.
//!
//! This module provides:
//! - The paginated listing walk
//! - Per-file name resolution and download
//! - Run state and cursor advancement policy
//! - Streaming response bodies to disk

pub mod file;
pub mod names;
pub mod outcome;
pub mod processor;
pub mod run;
pub mod state;
pub mod walker;

#[cfg(test)]
pub(crate) mod testing;

pub use names::NameCache;
pub use outcome::{FileOutcome, SkipReason};
pub use processor::{process_entry, process_file};
pub use run::sync_files;
pub use state::{RunState, RunSummary};
pub use walker::ListingWalker;
