use envlog::fmt::{ErrorLike, ErrorRecord, FormatOptions, OutputFormat, normalize_arg, normalize_error};
use envlog::Arg;
use serde_json::{Map, Value, json};
use std::borrow::Cow;

const STACK: &str = "Error: Test message\n    at connect (db.rs:10:5)\n    at main (main.rs:3:1)";

fn test_error() -> ErrorRecord {
    ErrorRecord::new("Error", "Test message")
        .stack(STACK)
        .with("code", "TEST_001")
}

#[test]
fn without_stack_is_record_without_stack_field() {
    let result = normalize_error(&test_error(), false, OutputFormat::Json).unwrap();
    assert_eq!(
        result,
        json!({
            "type": "error",
            "name": "Error",
            "message": "Test message",
            "code": "TEST_001",
        })
    );
    assert!(result.get("stack").is_none());
}

#[test]
fn without_stack_ignores_format() {
    let raw = normalize_error(&test_error(), false, OutputFormat::Raw).unwrap();
    let text = normalize_error(&test_error(), false, OutputFormat::Text).unwrap();
    assert_eq!(raw, text);
}

#[test]
fn text_with_stack_reindents_frames() {
    let result = normalize_error(&test_error(), true, OutputFormat::Text).unwrap();
    let Value::String(text) = result else {
        panic!("expected a string");
    };
    assert_eq!(
        text,
        "Error: Test message\n  at connect (db.rs:10:5)\n  at main (main.rs:3:1)"
    );
}

#[test]
fn json_with_stack_keeps_everything() {
    let result = normalize_error(&test_error(), true, OutputFormat::Json).unwrap();
    assert_eq!(result["type"], "error");
    assert_eq!(result["name"], "Error");
    assert_eq!(result["message"], "Test message");
    assert_eq!(result["stack"], STACK);
    assert_eq!(result["code"], "TEST_001");
}

#[test]
fn raw_with_stack_is_unchanged() {
    assert!(normalize_error(&test_error(), true, OutputFormat::Raw).is_none());

    let opts = FormatOptions {
        format: OutputFormat::Raw,
        colorize: false,
        show_error_stack: true,
    };
    let arg = Arg::Error(test_error());
    assert_eq!(normalize_arg(&arg, &opts), arg);
}

#[test]
fn non_error_values_pass_through() {
    let opts = FormatOptions::default();
    let arg = Arg::Value(json!({ "name": "not an error", "message": "plain object" }));
    assert_eq!(normalize_arg(&arg, &opts), arg);
}

struct DbError {
    code: u32,
}

impl ErrorLike for DbError {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("DbError")
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(format!("query failed with {}", self.code))
    }

    fn extra(&self) -> Cow<'_, Map<String, Value>> {
        let mut extra = Map::new();
        extra.insert("code".into(), Value::from(self.code));
        Cow::Owned(extra)
    }
}

#[test]
fn custom_error_like_types_normalize() {
    let err = DbError { code: 42 };
    let result = normalize_error(&err, false, OutputFormat::Text).unwrap();
    assert_eq!(result["name"], "DbError");
    assert_eq!(result["message"], "query failed with 42");
    assert_eq!(result["code"], 42);

    let snapshot = ErrorRecord::from_error_like(&err);
    assert_eq!(snapshot.extra.get("code"), Some(&Value::from(42)));
    assert!(snapshot.stack.is_none());
}

#[test]
fn std_errors_become_records() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config missing");
    let Arg::Error(record) = Arg::error(&io) else {
        panic!("expected an error arg");
    };
    assert_eq!(record.name, "Error");
    assert_eq!(record.message, "config missing");
}

#[test]
fn backtrace_stack_starts_with_headline() {
    let err = ErrorRecord::new("Error", "boom").with_backtrace();
    assert!(err.stack.unwrap().starts_with("Error: boom\n"));
}
