//! CLI module for envlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use crate::config::InitOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Log,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Log => Self::Log,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// Output format for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    Raw,
    Text,
    Json,
}

impl From<FormatArg> for crate::fmt::OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Raw => Self::Raw,
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Timestamp format for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TimestampArg {
    Iso,
    Locale,
    Unix,
}

impl From<TimestampArg> for crate::fmt::TimestampFormat {
    fn from(format: TimestampArg) -> Self {
        match format {
            TimestampArg::Iso => Self::Iso,
            TimestampArg::Locale => Self::Locale,
            TimestampArg::Unix => Self::Unix,
        }
    }
}

/// envlog - Emit log lines from the command line.
#[derive(Parser)]
#[command(
    name = "envlog",
    version,
    about = "Emit log lines through the envlog facade"
)]
pub struct Cli {
    #[command(flatten)]
    pub options: OptionArgs,
    #[command(subcommand)]
    pub command: Command,
}

/// Flags mirroring the `initialize` option keys. Unset flags fall back to the options file.
#[derive(Debug, Default, Args)]
pub struct OptionArgs {
    /// Options file (defaults to $ENVLOG_CONFIG or the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Runtime environment (development, production)
    #[arg(long = "env", global = true)]
    pub environment: Option<String>,
    /// Minimum level to emit
    #[arg(long, global = true, value_enum)]
    pub level: Option<LogLevel>,
    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,
    /// Timestamp format
    #[arg(long, global = true, value_enum)]
    pub timestamp_format: Option<TimestampArg>,
    /// Hide the timestamp column
    #[arg(long, global = true)]
    pub no_timestamp: bool,
    /// Force colors on
    #[arg(long, global = true, conflicts_with = "no_color")]
    pub color: bool,
    /// Force colors off
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Include error stacks
    #[arg(long, global = true)]
    pub stack: bool,
    /// Append elapsed time to every line
    #[arg(long, global = true)]
    pub exec_time: bool,
    /// Remote service API key (production)
    #[arg(long, global = true)]
    pub api_key: Option<String>,
    /// Remote service endpoint (production)
    #[arg(long, global = true)]
    pub api_endpoint: Option<String>,
}

impl OptionArgs {
    /// Only flags the user actually passed become options.
    #[must_use]
    pub fn to_options(&self) -> InitOptions {
        let mut options = InitOptions::new();
        options.environment.clone_from(&self.environment);
        options.log_level = self.level.map(|l| crate::level::Level::from(l).to_string());
        options.log_format = self
            .format
            .map(|f| crate::fmt::OutputFormat::from(f).to_string());
        options.timestamp_format = self
            .timestamp_format
            .map(|f| crate::fmt::TimestampFormat::from(f).to_string());
        if self.no_timestamp {
            options.show_timestamp = Some(false);
        }
        if self.color {
            options.colorize_logs = Some(true);
        } else if self.no_color {
            options.colorize_logs = Some(false);
        }
        if self.stack {
            options.show_error_stack = Some(true);
        }
        if self.exec_time {
            options.show_execution_time = Some(true);
        }
        options.api_key.clone_from(&self.api_key);
        options.api_endpoint.clone_from(&self.api_endpoint);
        options
    }
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Emit one call at the given level.
    Emit {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Message parts; JSON objects and arrays are logged as structured values
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Walk through every format, timestamp style, and level filter.
    Demo,
}

pub use commands::{cmd_demo, cmd_emit};
pub use util::{load_options, parse_message_arg};
