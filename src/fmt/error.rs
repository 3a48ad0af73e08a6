//! Error values travel through the payload like any other argument, but consoles and
//! JSON consumers need them flattened into plain records or strings first.

use super::OutputFormat;
use serde_json::{Map, Value};
use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt;

/// The shape the normalizer needs from an error. Implemented by [`ErrorRecord`] and
/// open to caller types that already carry a name, code, or stack of their own.
pub trait ErrorLike {
    /// Short type name, e.g. `Error` or `DatabaseError`.
    fn name(&self) -> Cow<'_, str>;
    fn message(&self) -> Cow<'_, str>;
    /// Multi-line trace; the first line repeats `name: message` like a JS stack.
    fn stack(&self) -> Option<Cow<'_, str>> {
        None
    }
    /// Additional own properties (`code`, `status`, ...).
    fn extra(&self) -> Cow<'_, Map<String, Value>> {
        Cow::Owned(Map::new())
    }
}

/// Owned error value, copied out of the original error, no back-reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorRecord {
    pub name: String,
    pub message: String,
    pub stack: Option<String>,
    pub extra: Map<String, Value>,
}

impl ErrorRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
            extra: Map::new(),
        }
    }

    /// Copies a Rust error. The name is the short type name and the `source()` chain
    /// becomes the stack frames.
    #[must_use]
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        let name = short_type_name(std::any::type_name::<E>());
        let message = err.to_string();

        let mut frames = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            frames.push(format!("    caused by: {cause}"));
            source = cause.source();
        }

        let mut record = Self::new(name, message);
        if !frames.is_empty() {
            record.stack = Some(format!("{}\n{}", record.headline(), frames.join("\n")));
        }
        record
    }

    /// Replaces the stack with a backtrace captured at the call site.
    #[must_use]
    pub fn with_backtrace(mut self) -> Self {
        let trace = Backtrace::force_capture().to_string();
        self.stack = Some(format!("{}\n{}", self.headline(), trace.trim_end()));
        self
    }

    #[must_use]
    pub fn stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Attaches an extra property such as an error code.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Snapshot of any [`ErrorLike`] value.
    #[must_use]
    pub fn from_error_like(err: &dyn ErrorLike) -> Self {
        Self {
            name: err.name().into_owned(),
            message: err.message().into_owned(),
            stack: err.stack().map(Cow::into_owned),
            extra: err.extra().into_owned(),
        }
    }

    fn headline(&self) -> String {
        format!("{}: {}", self.name, self.message)
    }
}

impl ErrorLike for ErrorRecord {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn stack(&self) -> Option<Cow<'_, str>> {
        self.stack.as_deref().map(Cow::Borrowed)
    }

    fn extra(&self) -> Cow<'_, Map<String, Value>> {
        Cow::Borrowed(&self.extra)
    }
}

/// Raw output prints an error the way a console would: the stack if there is one.
impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.stack {
            Some(stack) => f.write_str(stack),
            None => write!(f, "{}: {}", self.name, self.message),
        }
    }
}

fn short_type_name(full: &str) -> String {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

/// `{type: "error", name, message, [stack], ...extra}`. Extra keys never shadow the
/// fixed fields.
#[must_use]
pub fn error_object(err: &dyn ErrorLike, include_stack: bool) -> Value {
    let mut obj = Map::new();
    obj.insert("type".into(), Value::from("error"));
    obj.insert("name".into(), Value::from(err.name().into_owned()));
    obj.insert("message".into(), Value::from(err.message().into_owned()));
    if include_stack {
        if let Some(stack) = err.stack() {
            obj.insert("stack".into(), Value::from(stack.into_owned()));
        }
    }
    for (k, v) in err.extra().iter() {
        if k == "stack" && !include_stack {
            continue;
        }
        obj.entry(k.clone()).or_insert_with(|| v.clone());
    }
    Value::Object(obj)
}

/// `name: message` followed by the stack minus its headline, each frame trimmed and
/// indented by two spaces.
#[must_use]
pub fn error_text(err: &dyn ErrorLike) -> String {
    let mut out = format!("{}: {}", err.name(), err.message());
    if let Some(stack) = err.stack() {
        for line in stack.lines().skip(1) {
            out.push_str("\n  ");
            out.push_str(line.trim());
        }
    }
    out
}

/// Flattens an error for the given output settings. `None` means the error is kept
/// as-is (stack requested with raw output).
#[must_use]
pub fn normalize_error(
    err: &dyn ErrorLike,
    show_error_stack: bool,
    format: OutputFormat,
) -> Option<Value> {
    if !show_error_stack {
        return Some(error_object(err, false));
    }
    match format {
        OutputFormat::Text => Some(Value::String(error_text(err))),
        OutputFormat::Json => Some(error_object(err, true)),
        OutputFormat::Raw => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("socket closed")
        }
    }

    impl std::error::Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("query failed")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn from_error_uses_short_name_and_source_chain() {
        let record = ErrorRecord::from_error(&Outer(Inner));
        assert_eq!(record.name, "Outer");
        assert_eq!(record.message, "query failed");
        let stack = record.stack.unwrap();
        assert!(stack.starts_with("Outer: query failed\n"));
        assert!(stack.contains("caused by: socket closed"));
    }

    #[test]
    fn from_error_without_source_has_no_stack() {
        let record = ErrorRecord::from_error(&Inner);
        assert!(record.stack.is_none());
    }

    #[test]
    fn extras_cannot_shadow_fixed_fields() {
        let err = ErrorRecord::new("Error", "boom").with("name", "Spoofed");
        let obj = error_object(&err, false);
        assert_eq!(obj["name"], "Error");
    }

    #[test]
    fn text_without_stack_is_headline_only() {
        let err = ErrorRecord::new("TypeError", "bad input");
        assert_eq!(error_text(&err), "TypeError: bad input");
    }

    #[test]
    fn short_type_name_strips_path_and_generics() {
        assert_eq!(short_type_name("std::io::error::Error"), "Error");
        assert_eq!(short_type_name("my::Wrapper<alloc::string::String>"), "Wrapper");
    }
}
