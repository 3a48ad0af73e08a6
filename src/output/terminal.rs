//! Default output: stdout and stderr of the current process.

use super::{Output, Stream};
use std::io::{self, Write};

/// Writes each line to the process's stdout or stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write(&self, stream: Stream, line: &str) -> Result<(), crate::Error> {
        match stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}")?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
