use chrono::NaiveDateTime;
use serde::Serializer;

use crate::types::errors::TimestampError;

/// Text form of a transaction timestamp, used in the dataset file and when binding the
/// insert statement so that the warehouse parses the value itself.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const ACCEPTED_FORMATS: [&str; 2] = [FORMAT, "%Y-%m-%dT%H:%M:%S%.f"];

pub fn format(value: &NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

/// Parses either [`FORMAT`] or its ISO 8601 `T`-separated variant.
pub fn parse(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let value = value.trim();

    ACCEPTED_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| TimestampError { value: value.to_string() })
}

/// Serializes an optional timestamp as [`FORMAT`] text, or an empty cell when absent.
pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.serialize_str(&format(value)),
        None => serializer.serialize_none()
    }
}
