//! The dispatcher. A `Logger` owns its configuration, enforces the initialize-once
//! lifecycle, and routes each call through the level filter to either the local
//! formatting pipeline or the remote service.

mod builder;
mod global;

pub use builder::{EnvSource, LoggerBuilder};
pub use global::global;

use crate::arg::Arg;
use crate::config::{InitOptions, LoggerConfig};
use crate::environment::Environment;
use crate::fmt::{format_record, timestamp};
use crate::internal;
use crate::level::Level;
use crate::output::{LogRecord, Output, Stream};
use crate::remote::{self, RemoteService};
use std::sync::{Arc, Mutex, MutexGuard};

/// Sink that consumes a call once it passes the level filter.
#[derive(Clone)]
pub enum Backend {
    /// Format locally and write to the logger's output.
    Local,
    /// Forward the raw arguments to the remote service.
    Remote(Arc<dyn RemoteService>),
}

impl Backend {
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Local => BackendKind::Local,
            Self::Remote(_) => BackendKind::Remote,
        }
    }
}

/// Data-less view of [`Backend`] for assertions and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Local,
    Remote,
}

struct State {
    config: LoggerConfig,
    backend: Backend,
    initialized: bool,
}

/// Shareable across threads; every state change and every emission snapshot goes
/// through one mutex, so a call never observes a half-applied configuration.
pub struct Logger {
    state: Mutex<State>,
    output: Arc<dyn Output>,
    remote: Arc<dyn RemoteService>,
    env: EnvSource,
    /// First write failure since the last `flush`.
    write_error: Mutex<Option<crate::Error>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Terminal output, the stand-in remote service, and the process environment.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Swaps the output, remote service, or env source before the logger exists.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Diagnostic channel: the violation's message on the error stream.
    fn report(&self, err: &crate::Error) {
        self.write(Stream::Stderr, &err.to_string());
    }

    /// A failed write is traced and kept for the next [`Logger::flush`].
    fn write(&self, stream: Stream, line: &str) {
        if let Err(e) = self.output.write(stream, line) {
            internal::error("LOGGER", &format!("Failed to write: {e}"));
            self.write_error
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .get_or_insert(e);
        }
    }

    /// Validates `options`, binds a backend, and applies the overrides.
    ///
    /// Nothing is applied unless every check passes. Unknown level or format names
    /// and a JSON/colorize conflict don't fail the call; they are reported on the
    /// diagnostic channel.
    ///
    /// # Errors
    /// - `AlreadyInitialized` when called again without [`Logger::reset`].
    /// - `InvalidEnvironment` when the resolved environment is unknown.
    /// - `MissingApiKey` / `MissingApiEndpoint` for production without credentials.
    pub fn initialize(&self, options: InitOptions) -> Result<(), crate::Error> {
        let mut state = self.lock();
        if state.initialized {
            internal::warn("LOGGER", "Already initialized, keeping current configuration");
            return Err(crate::Error::AlreadyInitialized);
        }

        let environment = Environment::resolve(options.environment.as_deref(), &self.env)
            .inspect_err(|e| internal::warn("LOGGER", &e.to_string()))?;

        let backend = match environment {
            Environment::Production => {
                let api_key = non_empty(options.api_key.as_deref())
                    .ok_or(crate::Error::MissingApiKey)
                    .inspect_err(|e| internal::warn("LOGGER", &e.to_string()))?;
                let api_endpoint = non_empty(options.api_endpoint.as_deref())
                    .ok_or(crate::Error::MissingApiEndpoint)
                    .inspect_err(|e| internal::warn("LOGGER", &e.to_string()))?;
                self.remote.init(api_key, api_endpoint);
                Backend::Remote(Arc::clone(&self.remote))
            }
            Environment::Development => Backend::Local,
        };

        let mut config = state.config;
        config.environment = environment;
        let warnings = config.apply(&options);

        state.config = config;
        state.backend = backend;
        state.initialized = true;
        drop(state);

        for warning in &warnings {
            self.report(warning);
        }
        internal::info(
            "LOGGER",
            &format!(
                "Initialized: environment={environment}, level={}, format={}",
                config.level, config.output_format
            ),
        );
        Ok(())
    }

    /// Back to the uninitialized defaults. The start instant is kept.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.config.reset();
        state.backend = Backend::Local;
        state.initialized = false;
        drop(state);
        internal::log("LOGGER", "Reset to defaults");
    }

    /// Parses and applies a new threshold. Unknown names are reported and the
    /// previous level stays.
    pub fn set_level(&self, level: &str) -> bool {
        match level.parse() {
            Ok(level) => {
                self.set_min_level(level);
                true
            }
            Err(_) => {
                self.report(&crate::Error::InvalidLogLevel(level.to_string()));
                false
            }
        }
    }

    pub fn set_min_level(&self, level: Level) {
        self.lock().config.level = level;
    }

    /// Drops the call unless initialized and at or above the threshold, then hands it to the backend.
    pub fn emit<I>(&self, level: Level, args: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let (config, backend) = {
            let state = self.lock();
            if !state.initialized {
                drop(state);
                self.report(&crate::Error::NotInitialized);
                return;
            }
            (state.config, state.backend.clone())
        };

        if !level.passes(config.level) {
            return;
        }

        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        match backend {
            Backend::Remote(service) => remote::send(service.as_ref(), level, &args),
            Backend::Local => self.write_local(&config, level, args),
        }
    }

    fn write_local(&self, config: &LoggerConfig, level: Level, args: Vec<Arg>) {
        let mut record = LogRecord::new(level, args);
        if config.show_timestamp {
            record = record.timestamp(timestamp(config.timestamp_format));
        }
        if config.show_execution_time {
            record = record.execution_time(config.elapsed());
        }

        match format_record(&record, &config.format_options()) {
            Ok(line) => self.write(Stream::for_level(level), &line),
            Err(e) => self.report(&e),
        }
    }

    pub fn log<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.emit(Level::Log, args);
    }

    pub fn info<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.emit(Level::Info, args);
    }

    pub fn warn<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.emit(Level::Warn, args);
    }

    pub fn error<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.emit(Level::Error, args);
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.lock().initialized
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.lock().config.level
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        self.lock().config
    }

    #[must_use]
    pub fn backend_kind(&self) -> BackendKind {
        self.lock().backend.kind()
    }

    /// Flushes the output, then hands back the first write failure since the
    /// previous flush.
    ///
    /// # Errors
    /// The output's flush error, or the pending write error.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let pending = self
            .write_error
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take();
        self.output.flush()?;
        pending.map_or(Ok(()), Err)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
