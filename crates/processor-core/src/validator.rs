//! Shallow structural check run before anything is sent to the backend.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The provided input is not valid JSON.")]
    NotJson,
    #[error("The JSON should include a 'data' array.")]
    MissingDataArray,
}

/// Parsed input known to carry a `data` array.
///
/// The whole parsed value is kept so that any extra top-level properties are
/// forwarded along with `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedRequest(Value);

impl ParsedRequest {
    /// The value exactly as parsed from the input.
    pub fn body(&self) -> &Value {
        &self.0
    }

    pub fn data(&self) -> &[Value] {
        self.0
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub fn validate(raw: &str) -> Result<ParsedRequest, ValidationError> {
    let value: Value = serde_json::from_str(raw).map_err(|_| ValidationError::NotJson)?;

    // Element types inside `data` are deliberately not inspected.
    match value.get("data") {
        Some(Value::Array(_)) => Ok(ParsedRequest(value)),
        _ => Err(ValidationError::MissingDataArray),
    }
}
