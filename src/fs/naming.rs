//! Filename generation and manipulation.

use crate::config::TimeZoneSetting;
use crate::error::{Error, Result};

/// chrono format of the date prefix on downloaded files.
pub const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Replace path separators, characters invalid on common filesystems, and
/// control characters with `_`.
pub fn replace_reserved(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Sanitize a name that becomes a directory of its own (a channel).
///
/// Reserved characters are replaced; names that are empty, whitespace-only
/// or made only of dots are rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    let sanitized = replace_reserved(name);

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    if sanitized.trim_matches('.').is_empty() {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    Ok(sanitized)
}

/// Split a filename into base name and extension (extension keeps its dot).
///
/// Leading dots do not start an extension, so `.bashrc` has none.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(pos) if filename[..pos].chars().any(|c| c != '.') => {
            (&filename[..pos], &filename[pos..])
        }
        _ => (filename, ""),
    }
}

/// Build the local filename for a download.
///
/// `{YYYYMMDD_HHMMSS}-{base}_by_{uploader}{ext}`, with the date rendered in `tz`.
pub fn local_filename(
    timestamp: i64,
    original_name: &str,
    uploader: &str,
    tz: &TimeZoneSetting,
) -> Result<String> {
    let date = tz
        .format_epoch(timestamp, DATE_FORMAT)
        .ok_or_else(|| Error::InvalidFilename(format!("Timestamp out of range: {}", timestamp)))?;

    let (base, ext) = split_extension(original_name);
    Ok(format!(
        "{}-{}_by_{}{}",
        date,
        replace_reserved(base),
        replace_reserved(uploader),
        replace_reserved(ext)
    ))
}

/// Insert a file identifier before the extension: `a_by_b.pdf` -> `a_by_b_F123.pdf`.
pub fn with_file_id(filename: &str, file_id: &str) -> String {
    let (base, ext) = split_extension(filename);
    format!("{}_{}{}", base, replace_reserved(file_id), ext)
}
