//! Paginated walk over the file listing.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::api::WorkspaceApi;
use crate::config::Config;
use crate::download::names::NameCache;
use crate::download::outcome::FileOutcome;
use crate::download::processor::process_entry;
use crate::download::state::RunState;
use crate::error::{Error, Result};

/// Walks listing pages `1, 2, 3, …` until an empty page, processing every file.
pub struct ListingWalker<'a> {
    api: &'a dyn WorkspaceApi,
    config: &'a Config,
    names: NameCache,
    claimed: HashSet<PathBuf>,
    state: RunState,
}

impl<'a> ListingWalker<'a> {
    pub fn new(api: &'a dyn WorkspaceApi, config: &'a Config) -> Self {
        Self {
            api,
            config,
            names: NameCache::new(),
            claimed: HashSet::new(),
            state: RunState::new(),
        }
    }

    /// Walk the listing, bounded below by `ts_from` when present.
    ///
    /// Listing failures abort the walk; per-file failures are recorded and
    /// the walk continues.
    pub async fn run(mut self, ts_from: Option<i64>) -> Result<RunState> {
        let max_pages = self.config.api.max_pages;
        let mut page: u32 = 1;

        loop {
            if page > max_pages {
                return Err(Error::PageLimitExceeded(max_pages));
            }

            tracing::info!(
                "Requesting files (page {}, from timestamp {})",
                page,
                ts_from.map_or_else(|| "none".to_string(), |ts| ts.to_string())
            );
            let listing = self.api.list_files(page, ts_from).await?;
            self.state.pages_fetched += 1;

            if let Some(paging) = &listing.paging {
                tracing::debug!(
                    "Paging: page {:?} of {:?}, {:?} files total",
                    paging.page,
                    paging.pages,
                    paging.total
                );
            }

            tracing::info!("Found {} files on page {}", listing.files.len(), page);
            if listing.files.is_empty() {
                break;
            }

            for entry in &listing.files {
                let outcome = process_entry(
                    self.api,
                    self.config,
                    &mut self.names,
                    &mut self.claimed,
                    entry,
                )
                .await;
                self.log_outcome(&outcome);
                self.state.record(&outcome, &self.config.cursor);
            }

            page += 1;
        }

        Ok(self.state)
    }

    fn log_outcome(&self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Downloaded { path, bytes, .. } => {
                tracing::debug!(
                    "Downloaded {} to {} ({} bytes)",
                    outcome.file_id(),
                    path.display(),
                    bytes
                );
            }
            FileOutcome::Skipped { reason, .. } => {
                tracing::debug!("Skipped {}: {}", outcome.file_id(), reason);
            }
            FileOutcome::Failed { .. } => {}
        }
    }
}
