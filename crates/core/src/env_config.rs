//! Environment variable parsing with warn-level logging for invalid values.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an already looked-up variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently.
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn parse_with_default<T: FromStr + Display>(var: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(
                var,
                value = %raw,
                default = %default,
                "invalid env var value, using default"
            );
            default
        },
    }
}
