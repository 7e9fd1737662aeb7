//! Error types for the slack-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Listing errors (fatal for the run)
    #[error("Error fetching file list: HTTP {status}")]
    ListingHttp { status: u16 },

    #[error("File listing rejected by server: {0}")]
    ListingRejected(String),

    #[error("Listing did not terminate after {0} pages")]
    PageLimitExceeded(u32),

    // Per-file errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // Cursor persistence
    #[error("Cursor error: {0}")]
    Cursor(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
}
