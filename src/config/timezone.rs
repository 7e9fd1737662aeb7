//! Time zone selection for rendering upload timestamps into filenames.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Time zone used to render a file's epoch timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    /// The system's local time zone (default).
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A fixed offset from UTC, written as `+HH:MM` or `-HH:MM`.
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// Format an epoch timestamp (seconds) with a chrono format string.
    ///
    /// Returns `None` when the timestamp is outside chrono's range.
    pub fn format_epoch(&self, epoch: i64, fmt: &str) -> Option<String> {
        let utc: DateTime<Utc> = Utc.timestamp_opt(epoch, 0).single()?;
        let rendered = match self {
            TimeZoneSetting::Local => utc.with_timezone(&Local).format(fmt).to_string(),
            TimeZoneSetting::Utc => utc.format(fmt).to_string(),
            TimeZoneSetting::Fixed(offset) => utc.with_timezone(offset).format(fmt).to_string(),
        };
        Some(rendered)
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => write!(f, "local"),
            TimeZoneSetting::Utc => write!(f, "utc"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for TimeZoneSetting {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => return Ok(TimeZoneSetting::Local),
            "utc" | "z" => return Ok(TimeZoneSetting::Utc),
            _ => {}
        }

        parse_offset(trimmed)
            .map(TimeZoneSetting::Fixed)
            .ok_or_else(|| {
                format!(
                    "Unknown time zone: '{}'. Use 'local', 'utc', or an offset like '+02:00'",
                    s
                )
            })
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(tz: TimeZoneSetting) -> Self {
        tz.to_string()
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `+HHMM` or `+HH`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.chars().next()? {
        '+' => (1, &s[1..]),
        '-' => (-1, &s[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };

    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
