use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Deserializes a field that is present in the payload into `Some`, keeping a
/// literal `null` as `Some(None)`. Combined with `#[serde(default)]` an absent
/// field stays `None`, which lets partial updates tell "leave as is" apart
/// from "clear".
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
  T: Deserialize<'de>,
  D: Deserializer<'de>,
{
  Deserialize::deserialize(deserializer).map(Some)
}

/// Deserializes a timestamp written either as RFC 3339 or as a naive ISO 8601
/// string without an offset. Naive values are read as UTC.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = String::deserialize(deserializer)?;
  parse_timestamp(&value).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {value}")))
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
  if let Ok(time) = DateTime::parse_from_rfc3339(value) {
    return Some(time.with_timezone(&Utc));
  }
  NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
    .ok()
    .map(|naive| naive.and_utc())
}

/// Returns at most `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
  text.chars().take(max_chars).collect()
}
