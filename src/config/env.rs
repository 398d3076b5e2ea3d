//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with common type conversions.
//! Every reader falls back to a default when the variable is missing or
//! malformed; each has a `_from` variant taking a provider closure so
//! parsing can be tested without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use evr_booking::config::env::{read_flag, read_string};
//!
//! let follow = read_flag("BOOKING_END_TIME_FOLLOWS_START", true);
//! let tz = read_string("BOOKING_TIMEZONE", "UTC");
//! ```

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn unquote(v: &str) -> &str {
    v.trim().trim_matches(|c| c == '"' || c == '\'')
}

/// Reads a boolean flag from an environment variable.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(process_env, name, default)
}

/// Reads a boolean flag using a custom provider function.
///
/// # Example
/// ```rust
/// use evr_booking::config::env::read_flag_from;
///
/// let val = read_flag_from(|_| Some("true".into()), "ENABLE_FEATURE", false);
/// assert!(val);
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => matches!(
            unquote(&v).to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

/// Reads a `u32`, returning `default` if missing or unparsable.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(process_env, name, default)
}

pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| unquote(&s).parse::<u32>().ok())
        .unwrap_or(default)
}

/// Reads a non-empty string, returning `default` if missing or blank.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(process_env, name, default)
}

pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|s| unquote(&s).to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}
