use envlog::fmt::{FormatOptions, OutputFormat, execution_time, format_parts, format_record, level_tag};
use envlog::{Arg, ErrorRecord, Level, LogRecord, Timestamp};
use serde_json::{Value, json};
use std::time::Duration;

fn opts(format: OutputFormat, colorize: bool) -> FormatOptions {
    FormatOptions {
        format,
        colorize,
        show_error_stack: false,
    }
}

fn record(level: Level, payload: Vec<Arg>) -> LogRecord {
    LogRecord::new(level, payload).timestamp(Timestamp::Text("2026-10-19T08:30:00.000Z".into()))
}

#[test]
fn raw_joins_parts_with_compact_objects() {
    let rec = record(Level::Info, vec!["hello".into(), json!({ "a": 1 }).into()]);
    let line = format_record(&rec, &opts(OutputFormat::Raw, false)).unwrap();
    assert_eq!(line, r#"2026-10-19T08:30:00.000Z [INFO] hello {"a":1}"#);
}

#[test]
fn text_pretty_prints_objects() {
    let rec = record(Level::Info, vec!["hello".into(), json!({ "a": 1 }).into()]);
    let line = format_record(&rec, &opts(OutputFormat::Text, false)).unwrap();
    assert_eq!(line, "2026-10-19T08:30:00.000Z [INFO] hello {\n  \"a\": 1\n}");
}

#[test]
fn text_leaves_scalars_alone() {
    let rec = LogRecord::new(Level::Log, vec![Value::Null.into(), 42.into(), true.into()]);
    let line = format_record(&rec, &opts(OutputFormat::Text, false)).unwrap();
    assert_eq!(line, "[LOG] null 42 true");
}

#[test]
fn colorized_parts() {
    let rec = record(Level::Info, vec!["hello".into()]);
    let parts = format_parts(&rec, &opts(OutputFormat::Raw, true)).unwrap();
    assert_eq!(parts[0], "\x1b[2m2026-10-19T08:30:00.000Z\x1b[0m");
    assert_eq!(parts[1], "\x1b[36m[INFO]\x1b[0m");
    assert_eq!(parts[2], "hello");
}

#[test]
fn missing_timestamp_leaves_no_gap() {
    let rec = LogRecord::new(Level::Warn, vec!["careful".into()]);
    let line = format_record(&rec, &opts(OutputFormat::Raw, true)).unwrap();
    assert_eq!(line, format!("{} careful", level_tag(Level::Warn, true)));
}

#[test]
fn json_single_arg_is_bare_data() {
    let rec = record(Level::Info, vec!["Test message".into()]);
    let line = format_record(&rec, &opts(OutputFormat::Json, false)).unwrap();
    let parsed: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(parsed["level"], "INFO");
    assert_eq!(parsed["data"], "Test message");
    assert_eq!(parsed["timestamp"], "2026-10-19T08:30:00.000Z");
}

#[test]
fn json_several_args_become_array() {
    let rec = LogRecord::new(Level::Warn, vec!["High CPU usage".into(), json!({ "usage": "85%" }).into()])
        .timestamp(Timestamp::Unix(1_700_000_000_000));
    let line = format_record(&rec, &opts(OutputFormat::Json, false)).unwrap();
    let parsed: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(parsed["timestamp"], 1_700_000_000_000_i64);
    assert_eq!(parsed["data"], json!(["High CPU usage", { "usage": "85%" }]));
}

#[test]
fn json_without_timestamp_omits_field() {
    let rec = LogRecord::new(Level::Error, vec!["x".into()]);
    let line = format_record(&rec, &opts(OutputFormat::Json, true)).unwrap();
    let parsed: Value = serde_json::from_str(&line).unwrap();
    assert!(parsed.get("timestamp").is_none());
    assert!(!line.contains('\x1b'));
}

#[test]
fn json_normalizes_errors() {
    let err = ErrorRecord::new("Error", "Database connection failed").with("code", "DB_001");
    let rec = LogRecord::new(Level::Error, vec![err.into()]);
    let line = format_record(&rec, &opts(OutputFormat::Json, false)).unwrap();
    let parsed: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(
        parsed["data"],
        json!({
            "type": "error",
            "name": "Error",
            "message": "Database connection failed",
            "code": "DB_001",
        })
    );
}

#[test]
fn raw_with_stack_prints_error_as_is() {
    let err = ErrorRecord::new("Error", "boom").stack("Error: boom\n    at main (main.rs:1:1)");
    let rec = LogRecord::new(Level::Error, vec![err.into()]);
    let options = FormatOptions {
        format: OutputFormat::Raw,
        colorize: false,
        show_error_stack: true,
    };
    let line = format_record(&rec, &options).unwrap();
    assert_eq!(line, "[ERROR] Error: boom\n    at main (main.rs:1:1)");
}

#[test]
fn execution_time_appended_last() {
    let rec = LogRecord::new(Level::Info, vec!["Server started".into()])
        .execution_time(Duration::from_micros(1500));
    let line = format_record(&rec, &opts(OutputFormat::Json, false)).unwrap();
    let parsed: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(
        parsed["data"],
        json!(["Server started", { "executionTime": "1.50ms" }])
    );
}

#[test]
fn execution_time_has_two_decimals() {
    assert_eq!(execution_time(Duration::from_millis(50)), "50.00ms");
    assert_eq!(execution_time(Duration::ZERO), "0.00ms");
}
