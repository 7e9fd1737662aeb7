//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::timezone::TimeZoneSetting;
use crate::error::{Error, Result};

/// Slack Web API base URL.
pub const DEFAULT_API_BASE: &str = "https://slack.com/api";

/// Output directory name used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Cursor file name used when none is configured.
pub const DEFAULT_CURSOR_FILE: &str = "offset.txt";

/// Main configuration structure.
///
/// Built once at startup and passed by reference to every component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub cursor: CursorConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

/// Workspace credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Slack API token (bot or user token).
    #[serde(default)]
    pub token: String,
}

/// Where and how downloaded files are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base directory for downloads.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Time zone used to render upload timestamps into filenames.
    #[serde(default)]
    pub timezone: TimeZoneSetting,

    /// Leave an already present target file alone instead of downloading again.
    #[serde(default = "default_true")]
    pub skip_existing: bool,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            timezone: TimeZoneSetting::default(),
            skip_existing: true,
            show_progress: true,
        }
    }
}

/// Incremental-sync watermark settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Location of the persisted cursor file.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Skipped files (no channel, no download URL, already present) move the cursor forward.
    #[serde(default = "default_true")]
    pub advance_past_skipped: bool,

    /// Never write a cursor beyond the timestamp of a file that failed this run.
    ///
    /// Off by default: a file that fails permanently (deleted upstream, unknown
    /// uploader) would otherwise pin the cursor on every later run.
    #[serde(default)]
    pub hold_back_on_failure: bool,

    /// List everything regardless of the stored cursor.
    #[serde(default)]
    pub ignore_stored: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            path: None,
            advance_past_skipped: true,
            hold_back_on_failure: false,
            ignore_stored: false,
        }
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Web API, without trailing method name.
    #[serde(default = "default_api_base")]
    pub base_url: String,

    /// Upper bound on listing pages before the run is aborted.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base(),
            max_pages: default_max_pages(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connection establishment timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_max_pages() -> u32 {
    10_000
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    format!("slack-downloader/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn output_directory(&self) -> PathBuf {
        self.output
            .directory
            .clone()
            .unwrap_or_else(|| program_dir().join(DEFAULT_OUTPUT_DIR))
    }

    /// Get the effective cursor file location.
    pub fn cursor_path(&self) -> PathBuf {
        self.cursor
            .path
            .clone()
            .unwrap_or_else(|| program_dir().join(DEFAULT_CURSOR_FILE))
    }

    /// Parse the API base URL.
    pub fn api_base(&self) -> Result<Url> {
        let base = self.api.base_url.trim_end_matches('/');
        Ok(Url::parse(base)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http.connect_timeout_seconds)
    }
}

/// Directory holding the running executable, or the working directory if unknown.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
