//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, TimeZoneSetting};

/// Slack file downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "slack-downloader",
    version,
    about = "Incrementally download files shared in a Slack workspace",
    long_about = "Downloads every file shared in the workspace's channels and groups into\n\
                  <directory>/<channel>/, remembering the newest upload it has processed\n\
                  so later runs only fetch what is new."
)]
pub struct Args {
    /// Slack API token.
    #[arg(short, long, env = "SLACK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "slack-downloader.toml")]
    pub config: PathBuf,

    /// Path to the cursor file recording sync progress.
    #[arg(long)]
    pub cursor_file: Option<PathBuf>,

    /// Time zone for filename dates: local, utc, or an offset like +02:00.
    #[arg(long)]
    pub timezone: Option<TimeZoneSetting>,

    /// Abort if the listing has not ended after this many pages.
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Web API base URL.
    #[arg(long = "api-base")]
    pub api_base: Option<String>,

    /// Download files again even if the target already exists.
    #[arg(long)]
    pub no_skip_existing: bool,

    /// List all files, ignoring the stored cursor for this run.
    #[arg(long)]
    pub full: bool,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Also log raw API responses.
    #[arg(long)]
    pub extreme_debug: bool,
}

impl Args {
    /// Log filter directive implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.extreme_debug {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            "info"
        }
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(token) = self.token {
            config.account.token = token;
        }

        if let Some(dir) = self.output_directory {
            config.output.directory = Some(dir);
        }

        if let Some(path) = self.cursor_file {
            config.cursor.path = Some(path);
        }

        if let Some(tz) = self.timezone {
            config.output.timezone = tz;
        }

        if let Some(max_pages) = self.max_pages {
            config.api.max_pages = max_pages;
        }

        if let Some(base) = self.api_base {
            config.api.base_url = base;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_skip_existing {
            config.output.skip_existing = false;
        }

        if self.full {
            config.cursor.ignore_stored = true;
        }

        if self.quiet {
            config.output.show_progress = false;
        }
    }
}
