//! Runtime environment that decides which backend a logger binds to.

use std::fmt;
use std::str::FromStr;

/// Env source keys consulted, in order, when no environment is passed explicitly.
pub const ENVIRONMENT_VARS: &[&str] = &["LOGGER_ENV", "ENVIRONMENT"];

/// Development formats locally; production forwards to the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Explicit value first, then the first non-empty env source key, then `development`.
    ///
    /// # Errors
    /// Returns `Error::InvalidEnvironment` when the winning value is not a known environment.
    pub fn resolve<F>(explicit: Option<&str>, env: F) -> Result<Self, crate::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = explicit.map(ToString::to_string).or_else(|| {
            ENVIRONMENT_VARS
                .iter()
                .filter_map(|key| env(key))
                .find(|v| !v.trim().is_empty())
        });

        match value {
            Some(v) => v
                .parse()
                .map_err(|_| crate::Error::InvalidEnvironment(v.clone())),
            None => Ok(Self::Development),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(crate::Error::InvalidEnvironment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_to_development() {
        assert_eq!(
            Environment::resolve(None, no_env).unwrap(),
            Environment::Development
        );
    }

    #[test]
    fn explicit_wins_over_env() {
        let env = |_: &str| Some("production".to_string());
        assert_eq!(
            Environment::resolve(Some("development"), env).unwrap(),
            Environment::Development
        );
    }

    #[test]
    fn env_keys_checked_in_order() {
        let env = |key: &str| match key {
            "LOGGER_ENV" => Some(String::new()),
            "ENVIRONMENT" => Some("production".to_string()),
            _ => None,
        };
        assert_eq!(
            Environment::resolve(None, env).unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn unknown_environment_rejected() {
        let err = Environment::resolve(Some("staging"), no_env).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidEnvironment(ref v) if v == "staging"));
    }

    #[test]
    fn environment_names_are_exact() {
        for name in ["PRODUCTION", " production", "Development"] {
            let err = Environment::resolve(Some(name), no_env).unwrap_err();
            assert!(matches!(err, crate::Error::InvalidEnvironment(ref v) if v == name));
        }
    }
}
