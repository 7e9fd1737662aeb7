//! In-memory workspace used by unit tests.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{FilePage, FileRecord, WorkspaceApi};
use crate::error::{Error, Result};

/// Scripted workspace: fixed pages, name tables and download bodies.
#[derive(Default)]
pub struct FakeWorkspace {
    /// Raw listing entries, one vector per page.
    pub pages: Vec<Vec<serde_json::Value>>,
    pub users: HashMap<String, String>,
    pub conversations: HashMap<String, String>,
    pub failing_downloads: HashSet<String>,
    /// HTTP status returned for this page number instead of its files.
    pub listing_failure: Option<(u32, u16)>,
    /// Every page is non-empty; the listing never terminates.
    pub endless: bool,

    pub list_calls: Mutex<Vec<(u32, Option<i64>)>>,
    pub user_calls: Mutex<Vec<String>>,
    pub conversation_calls: Mutex<Vec<String>>,
    pub download_calls: Mutex<Vec<String>>,
}

impl FakeWorkspace {
    pub fn with_pages(pages: Vec<Vec<FileRecord>>) -> Self {
        Self::with_raw_pages(
            pages
                .iter()
                .map(|page| page.iter().map(to_entry).collect())
                .collect(),
        )
    }

    pub fn with_raw_pages(pages: Vec<Vec<serde_json::Value>>) -> Self {
        let mut fake = Self {
            pages,
            ..Self::default()
        };
        fake.users.insert("U1".into(), "alice".into());
        fake.users.insert("U2".into(), "bob".into());
        fake.conversations.insert("C1".into(), "general".into());
        fake.conversations.insert("G1".into(), "secret-group".into());
        fake
    }

    pub fn list_calls(&self) -> Vec<(u32, Option<i64>)> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn user_calls(&self) -> Vec<String> {
        self.user_calls.lock().unwrap().clone()
    }

    pub fn conversation_calls(&self) -> Vec<String> {
        self.conversation_calls.lock().unwrap().clone()
    }

    pub fn download_calls(&self) -> Vec<String> {
        self.download_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkspaceApi for FakeWorkspace {
    async fn list_files(&self, page: u32, ts_from: Option<i64>) -> Result<FilePage> {
        self.list_calls.lock().unwrap().push((page, ts_from));

        if let Some((failing_page, status)) = self.listing_failure {
            if failing_page == page {
                return Err(Error::ListingHttp { status });
            }
        }

        if self.endless {
            return Ok(FilePage {
                files: vec![to_entry(&record(
                    &format!("E{}", page),
                    "loop.txt",
                    1,
                    "U1",
                    &["C1"],
                    &[],
                    None,
                ))],
                paging: None,
            });
        }

        let files = self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();
        Ok(FilePage { files, paging: None })
    }

    async fn conversation_name(&self, conversation_id: &str) -> Result<String> {
        self.conversation_calls
            .lock()
            .unwrap()
            .push(conversation_id.to_string());
        self.conversations
            .get(conversation_id)
            .cloned()
            .ok_or_else(|| Error::Api(format!("channel_not_found: {}", conversation_id)))
    }

    async fn user_name(&self, user_id: &str) -> Result<String> {
        self.user_calls.lock().unwrap().push(user_id.to_string());
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| Error::Api(format!("user_not_found: {}", user_id)))
    }

    async fn download_to(&self, url: &str, dest: &Path) -> Result<u64> {
        self.download_calls.lock().unwrap().push(url.to_string());
        if self.failing_downloads.contains(url) {
            return Err(Error::Download("Failed to download file: HTTP 500".into()));
        }

        let body = format!("contents of {}", url);
        tokio::fs::write(dest, body.as_bytes()).await?;
        Ok(body.len() as u64)
    }
}

/// Build a file record.
pub fn record(
    id: &str,
    name: &str,
    timestamp: i64,
    user: &str,
    channels: &[&str],
    groups: &[&str],
    url: Option<&str>,
) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        timestamp,
        user: user.to_string(),
        channels: channels.iter().map(|c| c.to_string()).collect(),
        groups: groups.iter().map(|g| g.to_string()).collect(),
        url_private_download: url.map(str::to_string),
    }
}

/// Serialize a record into the listing's JSON shape.
pub fn to_entry(file: &FileRecord) -> serde_json::Value {
    serde_json::to_value(file).unwrap()
}

/// A downloadable file in channel C1.
pub fn channel_file(id: &str, name: &str, timestamp: i64, user: &str) -> FileRecord {
    let url = format!("https://files.example/{}/{}", id, name);
    record(id, name, timestamp, user, &["C1"], &[], Some(&url))
}
