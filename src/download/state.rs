//! Run state tracking.

use std::collections::HashMap;

use crate::config::CursorConfig;
use crate::download::outcome::{FileOutcome, SkipReason};

/// Aggregated progress of one sync run.
#[derive(Debug, Default)]
pub struct RunState {
    // Statistics
    pub pages_fetched: u32,
    pub files_seen: u64,
    pub downloaded: u64,
    pub bytes_written: u64,
    pub skipped: HashMap<SkipReason, u64>,
    pub failed: u64,
    pub failed_ids: Vec<String>,

    // Cursor bookkeeping
    pub max_advancing_ts: Option<i64>,
    pub min_failed_ts: Option<i64>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's outcome into the run.
    pub fn record(&mut self, outcome: &FileOutcome, policy: &CursorConfig) {
        self.files_seen += 1;

        let advances = match outcome {
            FileOutcome::Downloaded { bytes, .. } => {
                self.downloaded += 1;
                self.bytes_written += bytes;
                true
            }
            FileOutcome::Skipped { reason, .. } => {
                *self.skipped.entry(*reason).or_insert(0) += 1;
                policy.advance_past_skipped
            }
            FileOutcome::Failed { file_id, timestamp, .. } => {
                self.failed += 1;
                self.failed_ids.push(file_id.clone());
                if let Some(ts) = *timestamp {
                    self.min_failed_ts = Some(self.min_failed_ts.map_or(ts, |min| min.min(ts)));
                }
                false
            }
        };

        if let Some(ts) = outcome.timestamp().filter(|_| advances) {
            self.max_advancing_ts = Some(self.max_advancing_ts.map_or(ts, |max| max.max(ts)));
        }
    }

    /// Cursor to persist at the end of the run, if any file moved it.
    ///
    /// One past the newest processed upload; with `hold_back_on_failure`
    /// it never passes the oldest failed upload so that file is listed again.
    pub fn next_cursor(&self, policy: &CursorConfig) -> Option<i64> {
        let next = self.max_advancing_ts?.saturating_add(1);
        match self.min_failed_ts {
            Some(failed) if policy.hold_back_on_failure => Some(next.min(failed)),
            _ => Some(next),
        }
    }

    pub fn skipped_total(&self) -> u64 {
        self.skipped.values().sum()
    }

    pub fn skipped_for(&self, reason: SkipReason) -> u64 {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }
}

/// Final report of a sync run.
#[derive(Debug)]
pub struct RunSummary {
    pub state: RunState,
    /// Cursor in effect when the run started.
    pub previous_cursor: Option<i64>,
    /// Cursor the run computed, whether or not it was persisted.
    pub next_cursor: Option<i64>,
    /// Whether `next_cursor` reached the cursor file.
    pub cursor_saved: bool,
}
