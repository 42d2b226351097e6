//! Serde helper functions for event form deserialization.
//!
//! Form payloads come from loosely-typed sources (JSON files, text fields)
//! where blank strings mean "not provided" and date-times may be written
//! with either a space or a `T` separator.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a local date-time such as `2025-03-15 10:00` or `2025-03-15T10:00:00`.
pub fn parse_datetime_local(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize a local date-time in any of the accepted form formats.
pub fn deserialize_datetime_local<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_datetime_local(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {s}")))
}
