//! The most common CLI operation: shell scripts need a way to emit a single
//! formatted line (or remote send) without writing any Rust.

use crate::cli::util::parse_message_arg;
use crate::config::InitOptions;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

/// Initializes `logger` with `options` and emits `message` at `level`.
#[must_use]
pub fn cmd_emit(
    logger: &Logger,
    options: InitOptions,
    level: Level,
    message: &[String],
) -> ExitCode {
    if let Err(e) = logger.initialize(options) {
        internal::error("CLI", &format!("Failed to initialize logger: {e}"));
        eprintln!("envlog: {e}");
        return ExitCode::FAILURE;
    }

    logger.emit(level, message.iter().map(|m| parse_message_arg(m)));

    if let Err(e) = logger.flush() {
        eprintln!("envlog: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
