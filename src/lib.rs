#![forbid(unsafe_code)]

//! `envlog` - Environment-aware logging facade.
//!
//! A logger that picks its backend from the runtime environment:
//! - `development`: lines are formatted locally (raw, text, or JSON) and written
//!   to stdout/stderr, optionally colorized and timestamped
//! - `production`: calls are forwarded unformatted to a remote logging service
//!
//! Calls below the configured level are dropped, and error values are flattened
//! into plain records or strings before they are printed.
//!
//! # Example
//!
//! ```
//! use envlog::{Arg, ErrorRecord, InitOptions, Logger, MemoryOutput};
//! use serde_json::json;
//!
//! let output = MemoryOutput::new();
//! let logger = Logger::builder().output(output.clone()).build();
//!
//! logger
//!     .initialize(InitOptions::new().environment("development").log_format("json"))
//!     .unwrap();
//!
//! logger.info(["Server started"]);
//! logger.warn([Arg::text("High CPU usage"), json!({ "usage": "85%" }).into()]);
//! logger.error([ErrorRecord::new("Error", "Database connection failed").with("code", "DB_001")]);
//!
//! assert_eq!(output.stdout().len(), 1);
//! assert_eq!(output.stderr().len(), 2);
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `envlog` command-line binary

pub mod arg;
pub mod config;
pub mod environment;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod remote;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use arg::Arg;
pub use config::{InitOptions, LoggerConfig};
pub use environment::Environment;
pub use error::Error;
pub use fmt::{ErrorLike, ErrorRecord, OutputFormat, Timestamp, TimestampFormat};
pub use level::Level;
pub use logger::{Backend, BackendKind, Logger, LoggerBuilder, global};
pub use output::{LogRecord, MemoryOutput, Output, Stream, TerminalOutput};
pub use remote::{ConsoleService, RemoteService};
