//! Production logging goes to a third-party service. The dispatcher only needs its
//! `init` and four level-named sends, so that contract is a trait and the real
//! client stays outside this crate.

use crate::arg::Arg;
use crate::internal;
use crate::level::Level;
use crate::output::{Output, Stream, TerminalOutput};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Contract for a remote logging service. Arguments arrive filtered but unformatted.
pub trait RemoteService: Send + Sync {
    /// Configures the client with its credentials. Called once per successful
    /// production `initialize`.
    fn init(&self, api_key: &str, api_endpoint: &str);

    fn log(&self, args: &[Arg]);
    fn info(&self, args: &[Arg]);
    fn warn(&self, args: &[Arg]);
    fn error(&self, args: &[Arg]);
}

/// Routes a call to the level-named send.
pub fn send(service: &dyn RemoteService, level: Level, args: &[Arg]) {
    match level {
        Level::Log => service.log(args),
        Level::Info => service.info(args),
        Level::Warn => service.warn(args),
        Level::Error => service.error(args),
    }
}

/// Credentials handed to [`RemoteService::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_endpoint: String,
}

/// Stand-in client that announces each send on an [`Output`] instead of the network.
/// Used when no real service is plugged in.
#[derive(Clone)]
pub struct ConsoleService {
    output: Arc<dyn Output>,
    credentials: Arc<Mutex<Option<Credentials>>>,
}

impl Default for ConsoleService {
    fn default() -> Self {
        Self::new(Arc::new(TerminalOutput::new()))
    }
}

impl ConsoleService {
    #[must_use]
    pub fn new(output: Arc<dyn Output>) -> Self {
        Self {
            output,
            credentials: Arc::new(Mutex::new(None)),
        }
    }

    /// Credentials from the last `init`, if any.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn announce(&self, level: Level, args: &[Arg]) {
        let mut line = format!(
            "{} - Logging message to 3rd party service:",
            level.label()
        );
        for arg in args {
            line.push(' ');
            match arg {
                Arg::Value(Value::String(s)) => line.push_str(s),
                other => line.push_str(&serde_json::to_string(other).unwrap_or_default()),
            }
        }
        if let Err(e) = self.output.write(Stream::for_level(level), &line) {
            internal::error("REMOTE", &format!("Failed to write: {e}"));
        }
    }
}

impl RemoteService for ConsoleService {
    fn init(&self, api_key: &str, api_endpoint: &str) {
        internal::info(
            "REMOTE",
            &format!("Initializing logging service at {api_endpoint}"),
        );
        *self
            .credentials
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(Credentials {
            api_key: api_key.to_string(),
            api_endpoint: api_endpoint.to_string(),
        });
    }

    fn log(&self, args: &[Arg]) {
        self.announce(Level::Log, args);
    }

    fn info(&self, args: &[Arg]) {
        self.announce(Level::Info, args);
    }

    fn warn(&self, args: &[Arg]) {
        self.announce(Level::Warn, args);
    }

    fn error(&self, args: &[Arg]) {
        self.announce(Level::Error, args);
    }
}
