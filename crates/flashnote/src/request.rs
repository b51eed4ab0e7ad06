//! Internal request and response types for the AnkiConnect protocol.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// AnkiConnect API version spoken by this crate.
pub(crate) const API_VERSION: u8 = 6;

/// The request format expected by AnkiConnect.
#[derive(Debug, Serialize)]
pub(crate) struct AnkiRequest<'a, T> {
    /// The action to perform.
    pub action: &'a str,
    /// The API version (always 6).
    pub version: u8,
    /// Optional API key for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
    /// Parameters for the action, always a JSON object.
    pub params: T,
}

impl<'a, T> AnkiRequest<'a, T> {
    /// Create a new request with parameters.
    pub fn new(action: &'a str, params: T, key: Option<&'a str>) -> Self {
        Self {
            action,
            version: API_VERSION,
            key,
            params,
        }
    }
}

/// Parameters for actions that take none. Serializes as `{}`.
#[derive(Debug, Default, Serialize)]
pub(crate) struct NoParams {}

/// Decode a raw AnkiConnect body into its `result` value.
///
/// The body must be an object with exactly the two fields `error` and
/// `result`. A non-null, non-empty `error` fails with its value verbatim.
pub(crate) fn decode_response(body: &[u8]) -> Result<Value> {
    let Value::Object(mut envelope) = serde_json::from_slice::<Value>(body)? else {
        return Err(Error::UnexpectedFieldCount(0));
    };

    if envelope.len() != 2 {
        return Err(Error::UnexpectedFieldCount(envelope.len()));
    }
    let error = envelope.remove("error").ok_or(Error::MissingErrorField)?;
    let result = envelope.remove("result").ok_or(Error::MissingResultField)?;

    match error {
        Value::Null | Value::Bool(false) => Ok(result),
        Value::String(message) if message.is_empty() => Ok(result),
        Value::String(message) => Err(Error::AnkiConnect(message)),
        other => Err(Error::AnkiConnect(other.to_string())),
    }
}
