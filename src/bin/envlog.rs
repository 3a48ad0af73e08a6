//! Command-line front end: `envlog emit <level> <message>...` for scripts, and
//! `envlog demo` for a tour of the output options.
//!
//! Usage:
//!   envlog [OPTIONS] emit <LEVEL> <MESSAGE>...   Emit one call
//!   envlog demo                                  Show every format and filter
//!   envlog help                                  Show help

use clap::Parser;
use envlog::Logger;
use envlog::cli::{Cli, Command, cmd_demo, cmd_emit, load_options};
use envlog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Internal logger must be ready before any command runs so diagnostics are captured
    internal::init();

    let logger = Logger::new();

    match cli.command {
        Command::Demo => cmd_demo(&logger),
        Command::Emit { level, message } => {
            // Options file drives environment and formatting, so it loads before initialize
            let options = match load_options(&cli.options) {
                Ok(o) => o,
                Err(e) => {
                    eprintln!("Error loading options: {e}");
                    return ExitCode::FAILURE;
                }
            };
            cmd_emit(&logger, options, level.into(), &message)
        }
    }
}
