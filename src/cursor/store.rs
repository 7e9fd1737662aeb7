//! Plain-text cursor file holding a single epoch timestamp.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Reads and writes the high-water mark of the last processed upload.
#[derive(Debug, Clone)]
pub struct CursorStore {
    path: PathBuf,
}

impl CursorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored cursor.
    ///
    /// A missing, unparseable or negative value yields `None` for this call and is
    /// rewritten as `0`, so the next read returns `Some(0)`.
    pub fn read(&self) -> Option<i64> {
        let parsed = fs::read_to_string(&self.path)
            .map_err(Error::Io)
            .and_then(|text| {
                let text = text.trim();
                match text.parse::<i64>() {
                    Ok(ts) if ts >= 0 => Ok(ts),
                    Ok(_) => Err(Error::Cursor(format!("'{}': negative timestamp", text))),
                    Err(e) => Err(Error::Cursor(format!("'{}': {}", text, e))),
                }
            });

        match parsed {
            Ok(ts) => Some(ts),
            Err(e) => {
                tracing::debug!("No usable cursor at {}: {}", self.path.display(), e);
                if let Err(e) = self.write(0) {
                    tracing::debug!("Could not reset cursor file: {}", e);
                }
                None
            }
        }
    }

    /// Replace the stored cursor.
    ///
    /// Written to a sibling temporary file and renamed into place.
    pub fn write(&self, value: i64) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.tmp_path();
        let result = (|| -> Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.to_string().as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result.map_err(|e| Error::Cursor(format!("writing {}: {}", self.path.display(), e)))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
