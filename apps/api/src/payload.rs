//! JSON request-body helpers shared by every endpoint that takes a form.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    #[error("no JSON payload was supplied")]
    MissingPayload,

    /// Field names, in declaration order.
    #[error("missing required fields: {}", missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },
}

/// Parses a request body into a non-empty JSON object.
///
/// Empty bodies, malformed JSON, `null`, non-objects and `{}` all count as
/// "no payload".
pub fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, PayloadError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(PayloadError::MissingPayload);
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(map),
        _ => Err(PayloadError::MissingPayload),
    }
}

/// Reads `key` as a trimmed, non-empty string. Absent, null, non-string and
/// blank values all yield `None`.
pub fn text_field(payload: &Map<String, Value>, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
