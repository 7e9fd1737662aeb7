//! Per-file processing results.

use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

/// Why a file was deliberately not downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Neither a channel nor a group is attached to the file.
    NoDestination,
    /// The file has no authenticated download URL (externally linked document).
    NoDownloadUrl,
    /// The target file is already on disk.
    AlreadyExists,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoDestination => write!(f, "no channel or group"),
            SkipReason::NoDownloadUrl => write!(f, "no download URL"),
            SkipReason::AlreadyExists => write!(f, "already downloaded"),
        }
    }
}

/// Result of processing one file record.
#[derive(Debug)]
pub enum FileOutcome {
    Downloaded {
        file_id: String,
        path: PathBuf,
        bytes: u64,
        timestamp: i64,
    },
    Skipped {
        file_id: String,
        reason: SkipReason,
        timestamp: i64,
    },
    Failed {
        file_id: String,
        /// Unknown when the record itself could not be decoded.
        timestamp: Option<i64>,
        error: Error,
    },
}

impl FileOutcome {
    pub fn file_id(&self) -> &str {
        match self {
            FileOutcome::Downloaded { file_id, .. }
            | FileOutcome::Skipped { file_id, .. }
            | FileOutcome::Failed { file_id, .. } => file_id,
        }
    }

    pub fn timestamp(&self) -> Option<i64> {
        match self {
            FileOutcome::Downloaded { timestamp, .. } | FileOutcome::Skipped { timestamp, .. } => {
                Some(*timestamp)
            }
            FileOutcome::Failed { timestamp, .. } => *timestamp,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}
