//! Streaming a response body to disk.

use std::path::Path;

use futures::StreamExt;
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::fs::part_path;
use crate::output::create_download_bar;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Stream a response body into `dest`, returning the number of bytes written.
///
/// The body goes to `<dest>.part` first and is renamed over `dest` once
/// complete; the partial file is removed on failure.
pub async fn write_response_to(response: Response, dest: &Path, show_progress: bool) -> Result<u64> {
    let part = part_path(dest);

    match stream_body(response, &part, show_progress).await {
        Ok(written) => {
            tokio::fs::rename(&part, dest).await?;
            Ok(written)
        }
        Err(e) => {
            if let Err(rm) = tokio::fs::remove_file(&part).await {
                tracing::debug!("Could not remove {}: {}", part.display(), rm);
            }
            Err(e)
        }
    }
}

async fn stream_body(response: Response, part: &Path, show_progress: bool) -> Result<u64> {
    let content_length = response.content_length();
    let progress = if show_progress
        && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false)
    {
        Some(create_download_bar(content_length.unwrap_or(0)))
    } else {
        None
    };

    let mut file = File::create(part).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(downloaded)
}
