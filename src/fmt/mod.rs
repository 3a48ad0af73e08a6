//! Log rendering touches timestamps, colors, error flattening, and line assembly; each
//! concern gets its own module so the formatter itself stays a short pipeline.

mod color;
pub mod error;
mod format;
mod timestamp;

pub use color::{Color, colorize, strip_ansi};
pub use error::{ErrorLike, ErrorRecord, normalize_error};
pub use format::{
    FormatOptions, OutputFormat, execution_time, format_parts, format_record, level_tag,
    normalize_arg,
};
pub use timestamp::{Timestamp, TimestampFormat, timestamp};
