//! Resolved logger configuration.

use crate::environment::Environment;
use crate::fmt::{FormatOptions, OutputFormat, TimestampFormat};
use crate::level::Level;
use std::time::{Duration, Instant};

use super::InitOptions;

/// The state every emission reads. `Copy` so the dispatcher can snapshot it under
/// the lock and format without holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Calls below this level are dropped.
    pub level: Level,
    pub environment: Environment,
    pub show_timestamp: bool,
    pub timestamp_format: TimestampFormat,
    /// Always `false` when `output_format` is JSON.
    pub colorize: bool,
    pub output_format: OutputFormat,
    pub show_error_stack: bool,
    pub show_execution_time: bool,
    /// Monotonic origin for execution time; survives `reset`.
    pub start_time: Instant,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl LoggerConfig {
    #[must_use]
    pub const fn new(start_time: Instant) -> Self {
        Self {
            level: Level::Log,
            environment: Environment::Development,
            show_timestamp: true,
            timestamp_format: TimestampFormat::Iso,
            colorize: true,
            output_format: OutputFormat::Raw,
            show_error_stack: false,
            show_execution_time: false,
            start_time,
        }
    }

    /// Back to defaults, keeping the start instant so execution time stays meaningful.
    pub fn reset(&mut self) {
        *self = Self::new(self.start_time);
    }

    #[must_use]
    pub const fn format_options(&self) -> FormatOptions {
        FormatOptions {
            format: self.output_format,
            colorize: self.colorize,
            show_error_stack: self.show_error_stack,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Applies the formatting overrides present in `options`.
    ///
    /// Unknown level or format names leave the field untouched; they come back as
    /// warnings for the caller to report, together with a JSON/colorize conflict.
    pub fn apply(&mut self, options: &InitOptions) -> Vec<crate::Error> {
        let mut warnings = Vec::new();

        if let Some(level) = &options.log_level {
            match level.parse() {
                Ok(level) => self.level = level,
                Err(_) => warnings.push(crate::Error::InvalidLogLevel(level.clone())),
            }
        }
        if let Some(show) = options.show_timestamp {
            self.show_timestamp = show;
        }
        if let Some(format) = &options.timestamp_format {
            self.timestamp_format = TimestampFormat::from_str_lossy(format);
        }
        if let Some(colorize) = options.colorize_logs {
            self.colorize = colorize;
        }
        if let Some(format) = &options.log_format {
            match format.parse() {
                Ok(format) => self.output_format = format,
                Err(e) => warnings.push(e),
            }
        }
        if let Some(show) = options.show_error_stack {
            self.show_error_stack = show;
        }
        if let Some(show) = options.show_execution_time {
            self.show_execution_time = show;
        }

        // Escape codes inside a JSON record would break every consumer.
        if self.output_format == OutputFormat::Json && self.colorize {
            self.colorize = false;
            if options.colorize_logs == Some(true) {
                warnings.push(crate::Error::ColorizeJsonConflict);
            }
        }

        warnings
    }
}
