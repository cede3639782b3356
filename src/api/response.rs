//! Response envelope validation and list-entity extraction.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::Error;

/// Raise a typed error when the envelope reports `status = "error"`.
///
/// This runs on every decoded response before any entity mapping, so a
/// failure payload never reaches the entity decoders.
pub(crate) fn check(value: &Value) -> Result<(), Error> {
    if value.get("status").and_then(Value::as_str) != Some("error") {
        return Ok(());
    }

    let code = match value.get("error_code") {
        Some(Value::String(code)) => code.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    // The message field name varies across endpoints.
    let message = value
        .get("error_text")
        .or_else(|| value.get("text"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    Err(Error::Api { code, message })
}

/// Map a list response into entities.
///
/// List payloads are objects keyed by arbitrary identifiers plus the
/// `status` discriminator; the discriminator is dropped and the
/// remaining values decode in payload key order.
pub(crate) fn entities<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, Error> {
    let map: Map<String, Value> = serde_json::from_value(value)?;
    map.into_iter()
        .filter(|(key, _)| key != "status")
        .map(|(_, raw)| serde_json::from_value(raw).map_err(Error::from))
        .collect()
}
