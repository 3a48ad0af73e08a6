//! Message parts. A call carries an ordered sequence of arbitrary values, so each part
//! is either a JSON-shaped value or an error that still needs normalizing.

use crate::fmt::ErrorRecord;
use crate::fmt::error::error_object;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// One argument of a logging call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Value),
    Error(ErrorRecord),
}

impl Arg {
    /// Shorthand for a plain text part.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Value(Value::String(s.into()))
    }

    /// Snapshot of a Rust error as an error part.
    #[must_use]
    pub fn error<E: std::error::Error>(err: &E) -> Self {
        Self::Error(ErrorRecord::from_error(err))
    }
}

/// Unnormalized errors serialize with their stack; the remote service and
/// `Serialize` consumers get everything the error carried.
impl Serialize for Arg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Error(e) => error_object(e, true).serialize(serializer),
        }
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<ErrorRecord> for Arg {
    fn from(e: ErrorRecord) -> Self {
        Self::Error(e)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Self::text(s.clone())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Self::Value(Value::Bool(b))
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Self::Value(Value::from(n))
    }
}

impl From<u64> for Arg {
    fn from(n: u64) -> Self {
        Self::Value(Value::from(n))
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Self::Value(Value::from(n))
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Self::Value(Value::from(n))
    }
}
