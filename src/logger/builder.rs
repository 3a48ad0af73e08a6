//! Swapping sinks after construction would race with emission, so the builder fixes
//! the output, remote service, and env source up front.

use super::{Backend, Logger, State};
use crate::config::LoggerConfig;
use crate::output::{Output, TerminalOutput};
use crate::remote::{ConsoleService, RemoteService};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Key-value lookup consulted for the environment when no explicit one is given.
pub type EnvSource = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

#[derive(Default)]
pub struct LoggerBuilder {
    output: Option<Arc<dyn Output>>,
    remote: Option<Arc<dyn RemoteService>>,
    env: Option<EnvSource>,
    start_time: Option<Instant>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Where local lines and diagnostics go. Defaults to the terminal.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Arc::new(output));
        self
    }

    /// Client used in production. Defaults to [`ConsoleService`] on the same output.
    #[must_use]
    pub fn remote(mut self, service: impl RemoteService + 'static) -> Self {
        self.remote = Some(Arc::new(service));
        self
    }

    /// Tests can't mutate the process environment safely, so the lookup is injectable.
    #[must_use]
    pub fn env_source<F>(mut self, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Some(Box::new(env));
        self
    }

    /// Origin for execution time. Defaults to the moment `build` runs.
    #[must_use]
    pub const fn start_time(mut self, start: Instant) -> Self {
        self.start_time = Some(start);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let output = self
            .output
            .unwrap_or_else(|| Arc::new(TerminalOutput::new()));
        let remote = self
            .remote
            .unwrap_or_else(|| Arc::new(ConsoleService::new(Arc::clone(&output))));
        let env = self
            .env
            .unwrap_or_else(|| Box::new(|key: &str| std::env::var(key).ok()));
        let start_time = self.start_time.unwrap_or_else(Instant::now);

        Logger {
            state: Mutex::new(State {
                config: LoggerConfig::new(start_time),
                backend: Backend::Local,
                initialized: false,
            }),
            output,
            remote,
            env,
            write_error: Mutex::new(None),
        }
    }
}
