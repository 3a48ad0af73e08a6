use envlog::{Error, InitOptions, Logger, MemoryOutput};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn from_json_reads_recognized_keys() {
    let options = InitOptions::from_json(&json!({
        "environment": "production",
        "logLevel": "warn",
        "apiKey": "key",
        "apiEndpoint": "https://logs.example.com",
        "showTimestamp": false,
        "timeStampFormat": "UNIX",
        "colorizeLogs": true,
        "logFormat": "text",
        "showErrorStack": true,
        "showExecutionTime": true,
    }));

    assert_eq!(options.environment.as_deref(), Some("production"));
    assert_eq!(options.log_level.as_deref(), Some("warn"));
    assert_eq!(options.api_key.as_deref(), Some("key"));
    assert_eq!(options.api_endpoint.as_deref(), Some("https://logs.example.com"));
    assert_eq!(options.show_timestamp, Some(false));
    assert_eq!(options.timestamp_format.as_deref(), Some("UNIX"));
    assert_eq!(options.colorize_logs, Some(true));
    assert_eq!(options.log_format.as_deref(), Some("text"));
    assert_eq!(options.show_error_stack, Some(true));
    assert_eq!(options.show_execution_time, Some(true));
}

#[test]
fn from_json_accepts_aliases() {
    let options = InitOptions::from_json(&json!({
        "colorLogs": false,
        "showStackTrace": true,
        "timestampFormat": "LOCALE",
    }));
    assert_eq!(options.colorize_logs, Some(false));
    assert_eq!(options.show_error_stack, Some(true));
    assert_eq!(options.timestamp_format.as_deref(), Some("LOCALE"));
}

#[test]
fn from_json_ignores_wrong_types() {
    let options = InitOptions::from_json(&json!({
        "showTimestamp": "yes",
        "logLevel": 3,
        "colorizeLogs": null,
        "unknownKey": true,
    }));
    assert_eq!(options, InitOptions::default());
}

#[test]
fn from_json_non_object_is_empty() {
    assert_eq!(InitOptions::from_json(&json!(["logLevel"])), InitOptions::default());
}

#[test]
fn wrong_typed_options_do_not_affect_initialize() {
    let logger = Logger::builder()
        .output(MemoryOutput::new())
        .env_source(|_: &str| None)
        .build();
    let options = InitOptions::from_json(&json!({ "showTimestamp": "no", "logFormat": false }));
    logger.initialize(options).unwrap();
    assert!(logger.config().show_timestamp);
}

#[test]
fn from_toml_str_parses_keys() {
    let options = InitOptions::from_toml_str(
        r#"
environment = "development"
logLevel = "info"
logFormat = "json"
showExecutionTime = true
showTimestamp = "sometimes"
"#,
    )
    .unwrap();
    assert_eq!(options.environment.as_deref(), Some("development"));
    assert_eq!(options.log_level.as_deref(), Some("info"));
    assert_eq!(options.log_format.as_deref(), Some("json"));
    assert_eq!(options.show_execution_time, Some(true));
    assert_eq!(options.show_timestamp, None);
}

#[test]
fn from_toml_str_rejects_bad_syntax() {
    let err = InitOptions::from_toml_str("logLevel = ").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn load_from_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("envlog.toml");
    fs::write(&path, "logLevel = \"error\"\ncolorLogs = false\n").unwrap();

    let options = InitOptions::load_from(&path).unwrap();
    assert_eq!(options.log_level.as_deref(), Some("error"));
    assert_eq!(options.colorize_logs, Some(false));
}

#[test]
fn load_from_missing_file_is_empty() {
    let tmp_dir = TempDir::new().unwrap();
    let options = InitOptions::load_from(&tmp_dir.path().join("missing.toml")).unwrap();
    assert_eq!(options, InitOptions::default());
}

#[test]
fn merge_keeps_existing_values() {
    let mut flags = InitOptions::new().log_level("warn");
    let file = InitOptions::new()
        .log_level("error")
        .log_format("json")
        .api_key("from-file");
    flags.merge(file);

    assert_eq!(flags.log_level.as_deref(), Some("warn"));
    assert_eq!(flags.log_format.as_deref(), Some("json"));
    assert_eq!(flags.api_key.as_deref(), Some("from-file"));
}
