//! One complete incremental sync: cursor → listing walk → cursor.

use crate::api::WorkspaceApi;
use crate::config::Config;
use crate::cursor::CursorStore;
use crate::download::state::RunSummary;
use crate::download::walker::ListingWalker;
use crate::error::Result;
use crate::fs::ensure_dir;

/// Download every file uploaded since the stored cursor and advance it.
///
/// A listing failure returns early and leaves the cursor file untouched.
/// Failing to persist the new cursor is logged, not returned.
pub async fn sync_files(
    api: &dyn WorkspaceApi,
    config: &Config,
    store: &CursorStore,
) -> Result<RunSummary> {
    let stored = store.read();
    let ts_from = if config.cursor.ignore_stored {
        tracing::info!("Ignoring stored cursor {:?} for this run", stored);
        None
    } else {
        stored
    };

    ensure_dir(&config.output_directory()).await?;

    let state = ListingWalker::new(api, config).run(ts_from).await?;

    // The persisted cursor never moves backwards.
    let next_cursor = state
        .next_cursor(&config.cursor)
        .map(|next| stored.map_or(next, |prev| next.max(prev)));

    let cursor_saved = match next_cursor {
        Some(ts) => match store.write(ts) {
            Ok(()) => {
                tracing::debug!("Cursor advanced to {}", ts);
                true
            }
            Err(e) => {
                tracing::warn!("Could not save cursor {}: {}", ts, e);
                false
            }
        },
        None => false,
    };

    Ok(RunSummary {
        state,
        previous_cursor: stored,
        next_cursor,
        cursor_saved,
    })
}
