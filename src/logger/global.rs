//! Process-wide logger for callers that want the singleton shape.

use super::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Lazily built with terminal output and the process environment. Still needs
/// `initialize` before it emits anything.
#[must_use]
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}
