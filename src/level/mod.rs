//! Severity levels that gate which calls reach the backend.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a call's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Plain output, the lowest priority and the default threshold.
    #[default]
    Log = 0,
    /// Normal operational milestones such as startup or a loaded config.
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warn = 2,
    /// Failures that prevent an operation from completing.
    Error = 3,
}

impl Level {
    /// Lowercase because option records and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Tag text rendered in output lines (`[INFO]`, JSON `"level"` field).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Log => "LOG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Numeric priority; a call is emitted only when its priority is at least the threshold's.
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Whether a call at `self` passes a threshold of `min`.
    #[must_use]
    pub const fn passes(self, min: Self) -> bool {
        self.priority() >= min.priority()
    }

    /// Every level in priority order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Log, Self::Info, Self::Warn, Self::Error]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input, kept for diagnostics.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
