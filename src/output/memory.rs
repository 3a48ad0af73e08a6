//! In-memory sink. Tests and embedders inspect exactly what would have been printed.

use super::{Output, Stream};
use std::sync::{Arc, Mutex, MutexGuard};

/// Clones share one buffer, so a handle kept by the caller sees lines the logger writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    lines: Arc<Mutex<Vec<(Stream, String)>>>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<(Stream, String)>> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Every line written so far, in order, with its stream.
    #[must_use]
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.buffer().clone()
    }

    #[must_use]
    pub fn stdout(&self) -> Vec<String> {
        self.stream(Stream::Stdout)
    }

    #[must_use]
    pub fn stderr(&self) -> Vec<String> {
        self.stream(Stream::Stderr)
    }

    fn stream(&self, stream: Stream) -> Vec<String> {
        self.buffer()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl Output for MemoryOutput {
    fn write(&self, stream: Stream, line: &str) -> Result<(), crate::Error> {
        self.buffer().push((stream, line.to_string()));
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
