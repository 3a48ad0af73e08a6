//! Turns a [`LogRecord`] into the parts a console prints: timestamp, level tag, payload.

use super::color::{Color, colorize};
use super::error::normalize_error;
use super::timestamp::Timestamp;
use crate::arg::Arg;
use crate::level::Level;
use crate::output::LogRecord;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Serialization style applied before the local backend writes a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Parts joined as-is, objects rendered compactly.
    #[default]
    Raw,
    /// Like raw, but objects are pretty-printed across lines.
    Text,
    /// One JSON record per call.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(crate::Error::InvalidLogFormat(s.to_string())),
        }
    }
}

/// The subset of logger configuration the formatter reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub format: OutputFormat,
    /// Ignored for JSON.
    pub colorize: bool,
    pub show_error_stack: bool,
}

/// Flat record shape consumers can `jq` without knowing the payload structure.
#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<&'a Timestamp>,
    level: &'static str,
    data: Data<'a>,
}

/// A single argument is logged bare; several become an array.
#[derive(Serialize)]
#[serde(untagged)]
enum Data<'a> {
    One(&'a Arg),
    Many(&'a [Arg]),
}

/// Errors are flattened per the stack/format settings; everything else passes through.
#[must_use]
pub fn normalize_arg(arg: &Arg, opts: &FormatOptions) -> Arg {
    match arg {
        Arg::Error(err) => normalize_error(err, opts.show_error_stack, opts.format)
            .map_or_else(|| arg.clone(), Arg::Value),
        Arg::Value(_) => arg.clone(),
    }
}

/// `1234.5678ms` style elapsed time with two decimals.
#[must_use]
pub fn execution_time(elapsed: Duration) -> String {
    format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0)
}

fn execution_time_arg(elapsed: Duration) -> Arg {
    let mut obj = Map::new();
    obj.insert("executionTime".into(), Value::String(execution_time(elapsed)));
    Arg::Value(Value::Object(obj))
}

/// `[INFO]`, wrapped in the level color when `colorize` is set.
#[must_use]
pub fn level_tag(level: Level, colorize_tag: bool) -> String {
    let tag = format!("[{}]", level.label());
    if colorize_tag {
        colorize(&tag, Color::for_level(level))
    } else {
        tag
    }
}

fn render_arg(arg: &Arg, pretty: bool) -> String {
    match arg {
        Arg::Value(Value::String(s)) => s.clone(),
        Arg::Value(v @ (Value::Object(_) | Value::Array(_))) if pretty => format!("{v:#}"),
        Arg::Value(v) => v.to_string(),
        Arg::Error(err) => err.to_string(),
    }
}

/// The ordered parts of one output line. JSON yields a single serialized record.
///
/// # Errors
/// Returns `Error::Format` if the JSON record cannot be serialized.
pub fn format_parts(record: &LogRecord, opts: &FormatOptions) -> Result<Vec<String>, crate::Error> {
    let mut args: Vec<Arg> = record
        .payload
        .iter()
        .map(|arg| normalize_arg(arg, opts))
        .collect();
    if let Some(elapsed) = record.execution_time {
        args.push(execution_time_arg(elapsed));
    }

    if opts.format == OutputFormat::Json {
        let entry = JsonEntry {
            timestamp: record.timestamp.as_ref(),
            level: record.level.label(),
            data: match args.as_slice() {
                [only] => Data::One(only),
                all => Data::Many(all),
            },
        };
        let json = serde_json::to_string(&entry)
            .map_err(|e| crate::Error::Format(format!("JSON serialization failed: {e}")))?;
        return Ok(vec![json]);
    }

    let mut parts = Vec::with_capacity(args.len() + 2);
    // A hidden or empty timestamp must not leave a leading space.
    if let Some(ts) = record
        .timestamp
        .as_ref()
        .map(ToString::to_string)
        .filter(|ts| !ts.is_empty())
    {
        if opts.colorize {
            parts.push(colorize(&ts, Color::Dim));
        } else {
            parts.push(ts);
        }
    }
    parts.push(level_tag(record.level, opts.colorize));

    let pretty = opts.format == OutputFormat::Text;
    parts.extend(args.iter().map(|arg| render_arg(arg, pretty)));
    Ok(parts)
}

/// Parts joined with single spaces: the line a console would print.
///
/// # Errors
/// Returns `Error::Format` if the JSON record cannot be serialized.
pub fn format_record(record: &LogRecord, opts: &FormatOptions) -> Result<String, crate::Error> {
    Ok(format_parts(record, opts)?.join(" "))
}
