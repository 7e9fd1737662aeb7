//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename generation and manipulation

pub mod naming;
pub mod paths;

pub use naming::{local_filename, replace_reserved, sanitize_path_component, split_extension, with_file_id};
pub use paths::{channel_dir, ensure_dir, part_path};
