//! Utility functions for the CLI.

use super::OptionArgs;
use crate::arg::Arg;
use crate::config::InitOptions;
use serde_json::Value;

/// Shell arguments are strings; ones that are JSON objects or arrays are worth
/// keeping structured so text and JSON output can render them properly.
#[must_use]
pub fn parse_message_arg(s: &str) -> Arg {
    match serde_json::from_str::<Value>(s) {
        Ok(v @ (Value::Object(_) | Value::Array(_))) => Arg::Value(v),
        _ => Arg::text(s),
    }
}

/// Flags first, then the options file for anything the flags left unset.
///
/// # Errors
/// Fails if the options file exists but can't be read or parsed.
pub fn load_options(args: &OptionArgs) -> Result<InitOptions, crate::Error> {
    let file = match &args.config {
        Some(path) => InitOptions::load_from(path)?,
        None => InitOptions::load()?,
    };
    let mut options = args.to_options();
    options.merge(file);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_objects_stay_structured() {
        assert_eq!(
            parse_message_arg(r#"{"port":3000}"#),
            Arg::Value(json!({"port": 3000}))
        );
    }

    #[test]
    fn scalars_stay_text() {
        assert_eq!(parse_message_arg("42"), Arg::text("42"));
        assert_eq!(parse_message_arg("started"), Arg::text("started"));
    }
}
