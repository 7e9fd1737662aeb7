//! Configuration validation logic.

use regex::Regex;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_token(&config.account.token)?;
    validate_api_base(config)?;
    validate_limits(config)?;

    Ok(())
}

/// Validate the API token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::MissingConfig(
            "token (set SLACK_TOKEN, pass --token, or add [account] token)".to_string(),
        ));
    }

    // Check for placeholder values
    let lower = token.to_lowercase();
    if lower.contains("replaceme") || lower.contains("your_token") || lower.ends_with("aaaaaaaaa9")
    {
        return Err(Error::ConfigValidation {
            field: "token".to_string(),
            message: "Token appears to be a placeholder. Please provide your actual Slack token."
                .to_string(),
        });
    }

    // Slack tokens: xoxb- (bot), xoxp- (user), xoxe- (refresh), and rotating
    // access tokens prefixed with `xoxe.`
    let token_pattern = Regex::new(r"^xox[a-z](\.xox[a-z])?-\S+$").unwrap();
    if !token_pattern.is_match(token) {
        return Err(Error::ConfigValidation {
            field: "token".to_string(),
            message: "Token must look like 'xoxb-...' or 'xoxp-...'".to_string(),
        });
    }

    Ok(())
}

fn validate_api_base(config: &Config) -> Result<()> {
    let url = config.api_base().map_err(|e| Error::ConfigValidation {
        field: "api.base_url".to_string(),
        message: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::ConfigValidation {
            field: "api.base_url".to_string(),
            message: format!("Unsupported scheme '{}'", other),
        }),
    }
}

fn validate_limits(config: &Config) -> Result<()> {
    if config.api.max_pages == 0 {
        return Err(Error::ConfigValidation {
            field: "api.max_pages".to_string(),
            message: "Must be at least 1".to_string(),
        });
    }

    if config.http.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "http.timeout_seconds".to_string(),
            message: "Must be at least 1".to_string(),
        });
    }

    Ok(())
}
