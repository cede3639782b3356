//! Field-level decoders applied to raw payloads before validation.

use chrono::NaiveDateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Timestamp layout used by the service.
pub(crate) const DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Required `DD.MM.YYYY HH:MM:SS` timestamp.
pub(crate) fn datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, DATE_FORMAT).map_err(D::Error::custom)
}

/// Optional timestamp: the service sends an empty string (or nothing)
/// when the moment has not happened yet.
pub(crate) fn maybe_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => NaiveDateTime::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(D::Error::custom),
    }
}

/// Integer that may arrive as a JSON number or a numeric string.
pub(crate) fn int_like<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Str(value) => value.trim().parse().map_err(D::Error::custom),
    }
}

/// Merchant custom fields: a JSON object shipped as a string with `"`
/// escaped as `&quot;`. Absent or empty input decodes to `None`;
/// malformed JSON after unescaping is a hard error.
pub(crate) fn custom_fields<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => {
            let unescaped = value.replace("&quot;", "\"");
            serde_json::from_str(&unescaped)
                .map(Some)
                .map_err(D::Error::custom)
        }
    }
}
