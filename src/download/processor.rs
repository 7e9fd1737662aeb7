//! Per-file resolve-and-download step.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::api::{FileRecord, WorkspaceApi};
use crate::config::Config;
use crate::download::names::NameCache;
use crate::download::outcome::{FileOutcome, SkipReason};
use crate::error::Result;
use crate::fs::{channel_dir, ensure_dir, local_filename, with_file_id};

/// Decode one raw listing entry and process it.
///
/// An entry that does not decode into a [`FileRecord`] is a failure of that
/// file only.
pub async fn process_entry(
    api: &dyn WorkspaceApi,
    config: &Config,
    names: &mut NameCache,
    claimed: &mut HashSet<PathBuf>,
    entry: &serde_json::Value,
) -> FileOutcome {
    match FileRecord::from_value(entry) {
        Ok(file) => process_file(api, config, names, claimed, &file).await,
        Err(error) => {
            let file_id = entry
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or("<unknown>")
                .to_string();
            tracing::warn!("Problem during download of file {}: {}", file_id, error);
            FileOutcome::Failed {
                file_id,
                timestamp: entry.get("timestamp").and_then(|v| v.as_i64()),
                error,
            }
        }
    }
}

/// Process one file record.
///
/// Never fails: any error while resolving names, choosing the destination or
/// downloading becomes [`FileOutcome::Failed`] so the run continues.
/// `claimed` holds the targets already used in this run; a later file that
/// maps to one of them gets its file id appended to the name.
pub async fn process_file(
    api: &dyn WorkspaceApi,
    config: &Config,
    names: &mut NameCache,
    claimed: &mut HashSet<PathBuf>,
    file: &FileRecord,
) -> FileOutcome {
    match try_process(api, config, names, claimed, file).await {
        Ok(outcome) => outcome,
        Err(error) => {
            tracing::warn!("Problem during download of file {}: {}", file.id, error);
            FileOutcome::Failed {
                file_id: file.id.clone(),
                timestamp: Some(file.timestamp),
                error,
            }
        }
    }
}

async fn try_process(
    api: &dyn WorkspaceApi,
    config: &Config,
    names: &mut NameCache,
    claimed: &mut HashSet<PathBuf>,
    file: &FileRecord,
) -> Result<FileOutcome> {
    let skipped = |reason| FileOutcome::Skipped {
        file_id: file.id.clone(),
        reason,
        timestamp: file.timestamp,
    };

    let uploader = names.user_name(api, &file.user).await?;

    let Some(conversation_id) = file.destination_id() else {
        tracing::info!("No channel/group for file {}", file.id);
        return Ok(skipped(SkipReason::NoDestination));
    };
    let channel = api.conversation_name(conversation_id).await?;

    let Some(url) = file.download_url() else {
        tracing::info!(
            "Skipping linked document without download URL: {} {} {} {}",
            channel,
            file.timestamp,
            file.name,
            uploader
        );
        return Ok(skipped(SkipReason::NoDownloadUrl));
    };

    let base_dir = channel_dir(&config.output_directory(), &channel)?;
    let filename = local_filename(file.timestamp, &file.name, &uploader, &config.output.timezone)?;
    let mut target = base_dir.join(&filename);
    if claimed.contains(&target) {
        target = base_dir.join(with_file_id(&filename, &file.id));
        tracing::debug!("Name already used this run, saving {} as {}", file.id, target.display());
    }

    if config.output.skip_existing && tokio::fs::try_exists(&target).await.unwrap_or(false) {
        tracing::debug!("Skipping existing file: {}", target.display());
        claimed.insert(target);
        return Ok(skipped(SkipReason::AlreadyExists));
    }

    ensure_dir(&base_dir).await?;

    tracing::info!("Saving to {}", target.display());
    let bytes = api.download_to(url, &target).await?;
    claimed.insert(target.clone());

    Ok(FileOutcome::Downloaded {
        file_id: file.id.clone(),
        path: target,
        bytes,
        timestamp: file.timestamp,
    })
}
