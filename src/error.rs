//! Unified error type for all envlog operations.

/// Error type for envlog operations.
///
/// Configuration-time variants are returned from `Logger::initialize`; per-call variants
/// (`NotInitialized`, `InvalidLogLevel`, `InvalidLogFormat`, `ColorizeJsonConflict`) are
/// only ever reported on the diagnostic stream.
#[derive(Debug)]
pub enum Error {
    /// `initialize` called twice without a `reset` in between.
    AlreadyInitialized,
    /// A logging call arrived before `initialize`.
    NotInitialized,
    /// Production requires an API key.
    MissingApiKey,
    /// Production requires an API endpoint.
    MissingApiEndpoint,
    /// Environment name outside `development`/`production`.
    InvalidEnvironment(String),
    /// Level name outside `log`/`info`/`warn`/`error`.
    InvalidLogLevel(String),
    /// Output format name outside `raw`/`text`/`json`.
    InvalidLogFormat(String),
    /// JSON output was requested together with colors; colors were turned off.
    ColorizeJsonConflict,
    /// I/O error.
    Io(std::io::Error),
    /// TOML options file parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Serialization error.
    Format(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "Logger has already been initialized"),
            Self::NotInitialized => write!(
                f,
                "Logger must be initialized before use. Call initialize() first."
            ),
            Self::MissingApiKey => write!(f, "API key is required in production environment"),
            Self::MissingApiEndpoint => {
                write!(f, "API endpoint is required in production environment")
            }
            Self::InvalidEnvironment(env) => write!(
                f,
                "Invalid environment '{env}'. Must be 'development' or 'production'."
            ),
            Self::InvalidLogLevel(level) => write!(
                f,
                "Invalid log level '{level}'. Must be one of the following: 'log', 'info', 'warn', 'error'."
            ),
            Self::InvalidLogFormat(format) => write!(
                f,
                "Invalid log format '{format}'. Must be one of the following: 'raw', 'text', 'json'."
            ),
            Self::ColorizeJsonConflict => write!(
                f,
                "Colorized output is not supported with JSON format. Colors have been disabled."
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Format(s) => write!(f, "format error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
