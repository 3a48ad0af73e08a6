//! Where formatted lines go. The terminal is the default sink; the `Output` trait lets
//! callers capture or redirect lines without touching the dispatcher.

mod memory;
mod terminal;

pub use memory::MemoryOutput;
pub use terminal::TerminalOutput;

use crate::arg::Arg;
use crate::fmt::Timestamp;
use crate::level::Level;
use std::time::Duration;

/// One logging call, assembled by the dispatcher and consumed by the formatter.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    /// `None` when timestamps are hidden.
    pub timestamp: Option<Timestamp>,
    pub payload: Vec<Arg>,
    /// Elapsed time since the logger started, when execution time is shown.
    pub execution_time: Option<Duration>,
}

impl LogRecord {
    #[must_use]
    pub fn new(level: Level, payload: Vec<Arg>) -> Self {
        Self {
            level,
            timestamp: None,
            payload,
            execution_time: None,
        }
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub const fn execution_time(mut self, elapsed: Duration) -> Self {
        self.execution_time = Some(elapsed);
        self
    }
}

/// Console-equivalent stream a line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// `log`/`info` go to stdout, `warn`/`error` to stderr.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Log | Level::Info => Self::Stdout,
            Level::Warn | Level::Error => Self::Stderr,
        }
    }
}

/// `Send + Sync` bounds let one logger be shared across threads.
pub trait Output: Send + Sync {
    /// Writes one already-formatted line to `stream`.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, stream: Stream, line: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
