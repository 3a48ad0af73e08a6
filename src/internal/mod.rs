//! envlog's own diagnostic logger: lifecycle traces (initialize, reset, options
//! loading) go through the same formatting pipeline as user calls.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! several entry points (CLI, tests, embedders) race to call `init`.

use crate::config::InitOptions;
use crate::level::Level;
use crate::logger::Logger;
use std::cell::Cell;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

thread_local! {
    /// Set while this thread is inside the internal logger, so a failing sink
    /// can't trace its own failure recursively.
    static EMITTING: Cell<bool> = const { Cell::new(false) };
}

/// Env var holding the internal threshold (`log`, `info`, `warn`, `error`).
pub const LEVEL_VAR: &str = "ENVLOG_INTERNAL_LEVEL";

/// Fallback initializer. Threshold from `$ENVLOG_INTERNAL_LEVEL`, default `warn`.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init() {
    let level = std::env::var(LEVEL_VAR)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Level::Warn);
    init_with_level(level);
}

/// Preferred when the caller already knows how chatty envlog itself should be.
pub fn init_with_level(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(level));
    if !was_init {
        self::log("INTERNAL", &format!("Internal logger ready, level={level}"));
    }
}

fn build_internal_logger(level: Level) -> Logger {
    let logger = Logger::builder().env_source(|_: &str| None).build();
    let options = InitOptions::new()
        .environment("development")
        .log_level(level)
        .show_timestamp(false);
    // Development with a valid level cannot fail validation.
    let _ = logger.initialize(options);
    logger
}

/// Calls made before `init` are no-ops, as are calls made from inside an
/// internal emission.
fn emit(level: Level, scope: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    if EMITTING.replace(true) {
        return;
    }
    logger.emit(level, [scope, msg]);
    EMITTING.set(false);
}

/// Lifecycle detail, visible only at the `log` threshold.
pub fn log(scope: &str, msg: &str) {
    emit(Level::Log, scope, msg);
}

/// Normal milestones: options loaded, backend bound.
pub fn info(scope: &str, msg: &str) {
    emit(Level::Info, scope, msg);
}

/// Non-fatal anomalies: ignored options, rejected initialization.
pub fn warn(scope: &str, msg: &str) {
    emit(Level::Warn, scope, msg);
}

/// Failures inside envlog itself, such as a sink that refused a write.
pub fn error(scope: &str, msg: &str) {
    emit(Level::Error, scope, msg);
}
