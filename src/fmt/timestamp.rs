//! Wall-clock rendering for the optional timestamp column.

use chrono::{Local, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which representation the timestamp column uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimestampFormat {
    /// `2026-10-19T08:30:00.123Z`, always UTC.
    #[default]
    Iso,
    /// Human-readable local time, e.g. `10/19/2026, 8:30:00 AM`.
    Locale,
    /// Milliseconds since the Unix epoch.
    Unix,
}

impl TimestampFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "ISO",
            Self::Locale => "LOCALE",
            Self::Unix => "UNIX",
        }
    }

    /// Unknown names render as ISO instead of failing the call.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimestampFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ISO" => Ok(Self::Iso),
            "LOCALE" => Ok(Self::Locale),
            "UNIX" => Ok(Self::Unix),
            _ => Err(s.to_string()),
        }
    }
}

/// A rendered timestamp. UNIX stays numeric so JSON records carry a number, not a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Unix(i64),
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Unix(ms) => write!(f, "{ms}"),
        }
    }
}

/// Renders the current instant in `format`.
#[must_use]
pub fn timestamp(format: TimestampFormat) -> Timestamp {
    match format {
        TimestampFormat::Iso => {
            Timestamp::Text(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        TimestampFormat::Locale => {
            Timestamp::Text(Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        }
        TimestampFormat::Unix => Timestamp::Unix(Utc::now().timestamp_millis()),
    }
}
