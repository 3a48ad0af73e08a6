//! Options accepted by `Logger::initialize`, and the places they can come from:
//! the typed builder, an untyped JSON record, or a TOML file.
//!
//! Untyped sources follow one rule: a key whose value has the wrong type is ignored
//! as if it were absent.

mod structs;

pub use structs::LoggerConfig;

use crate::internal;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Env var that points at an options file, overriding the default location.
pub const CONFIG_PATH_VAR: &str = "ENVLOG_CONFIG";

/// Every field is optional; only supplied values override the defaults.
///
/// Enum-like fields stay strings until `initialize`, which owns the decision of
/// what an unknown name means (error, warning, or fallback).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// `development` or `production`; falls back to the env source.
    pub environment: Option<String>,
    pub log_level: Option<String>,
    pub api_key: Option<String>,
    pub api_endpoint: Option<String>,
    pub show_timestamp: Option<bool>,
    /// `ISO`, `LOCALE`, or `UNIX`.
    pub timestamp_format: Option<String>,
    pub colorize_logs: Option<bool>,
    /// `raw`, `text`, or `json`.
    pub log_format: Option<String>,
    pub show_error_stack: Option<bool>,
    pub show_execution_time: Option<bool>,
}

impl InitOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn environment(mut self, environment: impl Display) -> Self {
        self.environment = Some(environment.to_string());
        self
    }

    #[must_use]
    pub fn log_level(mut self, level: impl Display) -> Self {
        self.log_level = Some(level.to_string());
        self
    }

    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    #[must_use]
    pub const fn show_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = Some(show);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Display) -> Self {
        self.timestamp_format = Some(format.to_string());
        self
    }

    #[must_use]
    pub const fn colorize_logs(mut self, colorize: bool) -> Self {
        self.colorize_logs = Some(colorize);
        self
    }

    #[must_use]
    pub fn log_format(mut self, format: impl Display) -> Self {
        self.log_format = Some(format.to_string());
        self
    }

    #[must_use]
    pub const fn show_error_stack(mut self, show: bool) -> Self {
        self.show_error_stack = Some(show);
        self
    }

    #[must_use]
    pub const fn show_execution_time(mut self, show: bool) -> Self {
        self.show_execution_time = Some(show);
        self
    }

    /// Reads the recognized keys of a JSON object. Aliases: `timestampFormat`,
    /// `colorLogs`, `showStackTrace`. Non-objects yield empty options.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            internal::warn("CONFIG", "Options record is not an object, ignoring it");
            return Self::default();
        };

        Self {
            environment: string(obj, &["environment"]),
            log_level: string(obj, &["logLevel"]),
            api_key: string(obj, &["apiKey"]),
            api_endpoint: string(obj, &["apiEndpoint"]),
            show_timestamp: boolean(obj, &["showTimestamp"]),
            timestamp_format: string(obj, &["timeStampFormat", "timestampFormat"]),
            colorize_logs: boolean(obj, &["colorizeLogs", "colorLogs"]),
            log_format: string(obj, &["logFormat"]),
            show_error_stack: boolean(obj, &["showErrorStack", "showStackTrace"]),
            show_execution_time: boolean(obj, &["showExecutionTime"]),
        }
    }

    /// Parses a TOML document with the same keys as [`InitOptions::from_json`].
    ///
    /// # Errors
    /// Fails only on TOML syntax errors; wrong-typed keys are ignored.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        let table: toml::Table = toml::from_str(content)?;
        let value = serde_json::to_value(table)
            .map_err(|e| crate::Error::Format(format!("TOML conversion failed: {e}")))?;
        Ok(Self::from_json(&value))
    }

    /// Loads options from the default location: `$ENVLOG_CONFIG` if set, else
    /// `<config dir>/envlog/envlog.toml`. A missing file yields empty options.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads options from an explicit path. `~` is expanded.
    ///
    /// # Errors
    /// Fails if the file exists but can't be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            internal::log("CONFIG", "Options file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let options = Self::from_toml_str(&content)?;
        internal::info(
            "CONFIG",
            &format!("Options loaded from {}", path.display()),
        );
        Ok(options)
    }

    /// # Errors
    /// Fails when the platform has no config directory and `$ENVLOG_CONFIG` is unset.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        directories::ProjectDirs::from("", "", "envlog")
            .map(|dirs| dirs.config_dir().join("envlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Fills fields still unset in `self` from `other`; values already in `self` win.
    pub fn merge(&mut self, other: Self) {
        fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
            if slot.is_none() {
                *slot = value;
            }
        }

        fill(&mut self.environment, other.environment);
        fill(&mut self.log_level, other.log_level);
        fill(&mut self.api_key, other.api_key);
        fill(&mut self.api_endpoint, other.api_endpoint);
        fill(&mut self.show_timestamp, other.show_timestamp);
        fill(&mut self.timestamp_format, other.timestamp_format);
        fill(&mut self.colorize_logs, other.colorize_logs);
        fill(&mut self.log_format, other.log_format);
        fill(&mut self.show_error_stack, other.show_error_stack);
        fill(&mut self.show_execution_time, other.show_execution_time);
    }
}

fn string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(ToString::to_string)
}

fn boolean(obj: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_bool))
}
