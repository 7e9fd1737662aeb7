//! Configuration module for the slack-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Time zone selection for filenames
//! - Configuration validation

pub mod loader;
pub mod timezone;
pub mod validation;

pub use loader::{
    program_dir, AccountConfig, ApiConfig, Config, CursorConfig, HttpConfig, OutputConfig,
};
pub use timezone::TimeZoneSetting;
pub use validation::{validate_config, validate_token};
