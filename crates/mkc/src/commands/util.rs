//! Shared helpers for command handlers.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::CliError;

/// Parse a filter token, reporting the offending flag on failure.
pub fn parse_flag<T>(field: &str, raw: &str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|e| CliError::invalid(field, format!("'{raw}' ({e})")))
}

/// Prefer the registry's own human-readable date, else the calendar date.
pub fn date(human: Option<&str>, exact: Option<&DateTime<Utc>>) -> String {
    match (human, exact) {
        (Some(h), _) => h.to_owned(),
        (None, Some(dt)) => dt.format("%Y-%m-%d").to_string(),
        (None, None) => "-".into(),
    }
}

/// Tri-state flag for values that only exist on fully loaded entities.
pub fn loaded_flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes".into(),
        Some(false) => "no".into(),
        None => "-".into(),
    }
}
