//! The seam between the sync logic and the remote workspace.

use std::path::Path;

use async_trait::async_trait;

use crate::api::types::FilePage;
use crate::error::Result;

/// Operations the sync run needs from the workspace.
///
/// [`crate::api::SlackApi`] talks to the real Web API; tests substitute
/// in-memory implementations.
#[async_trait]
pub trait WorkspaceApi: Send + Sync {
    /// Fetch one listing page (1-based), optionally bounded below by `ts_from`.
    ///
    /// Non-success HTTP status and `ok: false` are reported as fatal errors.
    async fn list_files(&self, page: u32, ts_from: Option<i64>) -> Result<FilePage>;

    /// Resolve a channel or group identifier to its name.
    async fn conversation_name(&self, conversation_id: &str) -> Result<String>;

    /// Resolve a user identifier to its name.
    async fn user_name(&self, user_id: &str) -> Result<String>;

    /// Download the body at `url` into `dest`, returning the number of bytes written.
    async fn download_to(&self, url: &str, dest: &Path) -> Result<u64>;
}
