//! Environment variable helpers shared by the client, store and runner
//! configuration.
//!
//! A required variable that is absent (or blank) is a setup failure and
//! must surface before the first scenario runs.

use std::str::FromStr;

use crate::error::ConfigError;

/// Read a required environment variable.
pub fn require_env(var: &'static str, hint: &'static str) -> Result<String, ConfigError> {
    require_value(var, std::env::var(var).ok(), hint)
}

/// Read an optional environment variable, treating blank values as absent.
pub fn optional_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional environment variable, falling back to `default`.
pub fn parse_env_or<T: FromStr>(
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    parse_value_or(var, optional_env(var), default, expected)
}

fn require_value(
    var: &'static str,
    value: Option<String>,
    hint: &'static str,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing { var, hint }),
    }
}

fn parse_value_or<T: FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn present_value_is_returned() {
        let value = require_value("BASE_URL", Some("http://localhost:3001".into()), "");
        assert_eq!(value.unwrap(), "http://localhost:3001");
    }

    #[test]
    fn absent_value_names_the_variable() {
        let err = require_value("MONGO_URI", None, "Add it to .env").unwrap_err();
        assert_matches!(err, ConfigError::Missing { var: "MONGO_URI", .. });
        assert_eq!(err.to_string(), "MONGO_URI is not defined. Add it to .env");
    }

    #[test]
    fn blank_value_counts_as_absent() {
        let err = require_value("MONGO_DB_NAME", Some("   ".into()), "").unwrap_err();
        assert_matches!(err, ConfigError::Missing { .. });
    }

    #[test]
    fn parse_falls_back_to_default() {
        let secs: u64 = parse_value_or("SCENARIO_TIMEOUT_SECS", None, 30, "a number").unwrap();
        assert_eq!(secs, 30);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_value_or::<u64>("SCENARIO_TIMEOUT_SECS", Some("soon".into()), 30, "a number")
            .unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "SCENARIO_TIMEOUT_SECS", .. });
    }
}
