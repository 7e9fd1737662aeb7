//! Slack Downloader - incremental download of files shared in a Slack workspace
//!
//! This library provides the pieces of a sync run:
//!
//! - A persisted cursor (epoch-seconds watermark) bounding each listing
//! - A paginated walk over `files.list`
//! - Per-file uploader/channel resolution with a run-scoped user name cache
//! - Streaming downloads into `<directory>/<channel>/`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use slack_downloader::{sync_files, Config, CursorStore, SlackApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("slack-downloader.toml"))?;
//!     let api = SlackApi::new(&config)?;
//!     let store = CursorStore::new(config.cursor_path());
//!
//!     let summary = sync_files(&api, &config, &store).await?;
//!     println!("{} files downloaded", summary.state.downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{SlackApi, WorkspaceApi};
pub use config::{Config, TimeZoneSetting};
pub use cursor::CursorStore;
pub use download::{sync_files, FileOutcome, ListingWalker, RunSummary, SkipReason};
pub use error::{Error, Result};
