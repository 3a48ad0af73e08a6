//! A guided tour is the fastest way to see what each option does to a line.

use crate::arg::Arg;
use crate::config::InitOptions;
use crate::fmt::ErrorRecord;
use crate::internal;
use crate::logger::Logger;
use serde_json::json;
use std::process::ExitCode;

fn section(title: &str) {
    println!("\n=== {title} ===");
}

/// Runs each scenario on one logger, resetting between them.
#[must_use]
pub fn cmd_demo(logger: &Logger) -> ExitCode {
    let scenarios: [(&str, InitOptions, fn(&Logger)); 7] = [
        (
            "Basic Usage (Default Settings)",
            InitOptions::new().environment("development"),
            |l| {
                l.log(["This is a regular log message"]);
                l.info(["Starting application..."]);
                l.warn(["Memory usage is high"]);
                l.error(["Failed to connect to database"]);
            },
        ),
        (
            "JSON Format with Execution Time",
            InitOptions::new()
                .environment("development")
                .log_format("json")
                .show_execution_time(true),
            |l| {
                l.info([Arg::text("Server started"), json!({ "port": 3000 }).into()]);
                l.warn([Arg::text("High CPU usage"), json!({ "usage": "85%" }).into()]);
            },
        ),
        (
            "Text Format with Colors and Error Stack",
            InitOptions::new()
                .environment("development")
                .log_format("text")
                .colorize_logs(true)
                .show_error_stack(true),
            |l| {
                let err = ErrorRecord::new("Error", "Database connection failed")
                    .with("code", "DB_001")
                    .with_backtrace();
                l.error([err]);
            },
        ),
        (
            "UNIX Timestamp",
            InitOptions::new()
                .environment("development")
                .timestamp_format("UNIX"),
            |l| l.info(["Using UNIX timestamp"]),
        ),
        (
            "LOCALE Timestamp",
            InitOptions::new()
                .environment("development")
                .timestamp_format("LOCALE"),
            |l| l.info(["Using LOCALE timestamp"]),
        ),
        (
            "Log Level Filtering",
            InitOptions::new().environment("development").log_level("warn"),
            |l| {
                l.log(["This log message won't show"]);
                l.info(["This info message won't show"]);
                l.warn(["This warning will show"]);
                l.error(["This error will show"]);
            },
        ),
        (
            "Production Environment",
            InitOptions::new()
                .environment("production")
                .api_key("your-api-key")
                .api_endpoint("https://logging-service.example.com/api"),
            |l| l.info(["This message would be sent to the logging service"]),
        ),
    ];

    for (title, options, run) in scenarios {
        section(title);
        if let Err(e) = logger.initialize(options) {
            internal::error("DEMO", &format!("{title}: {e}"));
            return ExitCode::FAILURE;
        }
        run(logger);
        logger.reset();
    }

    ExitCode::SUCCESS
}
