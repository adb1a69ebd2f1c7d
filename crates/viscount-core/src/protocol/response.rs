//! Counter response decoding (status check, JSON parse, field extraction).

use std::fmt;

use serde_json::{Number, Value};

use crate::error::{CounterError, Result};
use crate::policy::CountField;

/// A successfully fetched counter value.
///
/// Kept as a JSON number so it renders exactly as the endpoint sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterReading(Number);

impl CounterReading {
    pub fn new(n: impl Into<Number>) -> Self {
        Self(n.into())
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    pub fn number(&self) -> &Number {
        &self.0
    }
}

impl fmt::Display for CounterReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether a status code counts as success (2xx).
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a counting endpoint response into a reading.
///
/// Order matters: status first, then JSON, then the field. A non-2xx response
/// is rejected without looking at its body.
pub fn decode_reading(status: u16, body: &[u8], field: CountField) -> Result<CounterReading> {
    if !is_success(status) {
        return Err(CounterError::Status(status));
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| CounterError::InvalidJson(e.to_string()))?;

    match value.get(field.as_str()) {
        Some(Value::Number(n)) => Ok(CounterReading(n.clone())),
        Some(other) => {
            tracing::debug!(field = field.as_str(), value = %other, "count field is not a number");
            Err(CounterError::MissingField(field.as_str().to_string()))
        }
        None => Err(CounterError::MissingField(field.as_str().to_string())),
    }
}
