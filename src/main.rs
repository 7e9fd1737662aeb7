//! Slack Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use slack_downloader::{
    api::SlackApi,
    cli::Args,
    config::{validate_config, Config},
    cursor::CursorStore,
    download::sync_files,
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::ListingHttp { .. }
                | Error::ListingRejected(_)
                | Error::PageLimitExceeded(_)
                | Error::Api(_)
                | Error::Http(_)
                | Error::Json(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Io(_) | Error::Cursor(_) | Error::Download(_) | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::IO_ERROR as u8)
                }
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    let cursor_path = config.cursor_path();
    print_config_summary(
        &config.output_directory().display().to_string(),
        &cursor_path.display().to_string(),
        &config.output.timezone.to_string(),
    );

    let api = SlackApi::new(&config)?;
    let store = CursorStore::new(cursor_path);

    let summary = sync_files(&api, &config, &store).await?;
    print_run_stats(&summary);

    if summary.next_cursor.is_some() && !summary.cursor_saved {
        print_warning(&format!(
            "Progress could not be saved to {}; the next run will fetch these files again",
            store.path().display()
        ));
    }

    print_success("Finished.");
    Ok(())
}
