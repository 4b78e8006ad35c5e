//! Unwrapping of the `{"data": ..., "status": ...}` envelope used by every
//! upstream response.
//!
//! Decoding is all-or-nothing: a missing or mistyped `data` field, or a single
//! element that does not decode, fails the whole call.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::employee::Employee;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::upstream::JsonObject;

const DATA_KEY: &str = "data";

/// Stateless conversion from one JSON value to a record.
pub type Decoder<T> = fn(Value) -> Result<T, serde_json::Error>;

/// Extracts and decodes the `data` field of upstream envelopes.
pub struct Envelope<T> {
    decode: Decoder<T>,
}

impl<T> Clone for Envelope<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Envelope<T> {}

impl<T> std::fmt::Debug for Envelope<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope").finish_non_exhaustive()
    }
}

impl<T: DeserializeOwned> Default for Envelope<T> {
    fn default() -> Self {
        Self::new(serde_json::from_value::<T>)
    }
}

impl<T> Envelope<T> {
    pub const fn new(decode: Decoder<T>) -> Self {
        Self { decode }
    }

    /// Decodes `data` as a list of records.
    pub fn unwrap_list(&self, mut body: JsonObject) -> RepositoryResult<Vec<T>> {
        match take_data(&mut body)? {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    (self.decode)(item).map_err(|e| {
                        RepositoryError::Decode(format!("element {index} of `data`: {e}"))
                    })
                })
                .collect(),
            other => Err(RepositoryError::Decode(format!(
                "expected `data` to be an array, got {}",
                kind(&other)
            ))),
        }
    }

    /// Decodes `data` as a single record.
    pub fn unwrap_one(&self, mut body: JsonObject) -> RepositoryResult<T> {
        match take_data(&mut body)? {
            item @ Value::Object(_) => (self.decode)(item).map_err(RepositoryError::from),
            other => Err(RepositoryError::Decode(format!(
                "expected `data` to be an object, got {}",
                kind(&other)
            ))),
        }
    }
}

/// Envelope decoding employee records with serde.
pub type EmployeeEnvelope = Envelope<Employee>;

fn take_data(body: &mut JsonObject) -> RepositoryResult<Value> {
    match body.remove(DATA_KEY) {
        None => Err(RepositoryError::Decode(
            "response has no `data` field".to_string(),
        )),
        Some(Value::Null) => Err(RepositoryError::Decode("`data` is null".to_string())),
        Some(value) => Ok(value),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
