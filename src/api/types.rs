//! API response type definitions.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Response of `files.list`.
#[derive(Debug, Deserialize)]
pub struct FileListResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Raw records; each is decoded on its own so one bad entry cannot sink the page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<serde_json::Value>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Paging block attached to listing responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    pub total: Option<u64>,
    pub page: Option<u64>,
    pub pages: Option<u64>,
}

/// Metadata for one shared file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    /// Upload time in epoch seconds.
    pub timestamp: i64,
    /// Uploader identifier.
    pub user: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<String>,
    /// Authenticated download URL; absent for externally linked documents.
    #[serde(default)]
    pub url_private_download: Option<String>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl FileRecord {
    /// Decode one listing entry.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| {
            Error::Api(format!(
                "Malformed file record {}: {}",
                value.get("id").and_then(|v| v.as_str()).unwrap_or("<no id>"),
                e
            ))
        })
    }

    /// The conversation a file belongs to: first channel, else first group.
    pub fn destination_id(&self) -> Option<&str> {
        self.channels
            .first()
            .or_else(|| self.groups.first())
            .map(String::as_str)
    }

    /// The download URL, treating an empty string as absent.
    pub fn download_url(&self) -> Option<&str> {
        self.url_private_download
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// One page of the file listing.
#[derive(Debug, Clone, Default)]
pub struct FilePage {
    pub files: Vec<serde_json::Value>,
    pub paging: Option<Paging>,
}

/// Response of `conversations.info`.
#[derive(Debug, Deserialize)]
pub struct ConversationInfoResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub channel: Option<Conversation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    pub name: String,
}

/// Response of `users.info`.
#[derive(Debug, Deserialize)]
pub struct UserInfoResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub name: String,
}
