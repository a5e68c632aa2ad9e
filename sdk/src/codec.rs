//! JSON encoding and decoding for API payloads.
//!
//! Wraps serde_json so failures map onto the SDK error taxonomy instead of
//! leaking serde error types through the public API.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Error;

/// Encodes a request value as JSON bytes.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the value cannot be encoded.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decodes a JSON response body into a typed value.
///
/// Unknown fields are ignored, so server-side additions do not break
/// existing clients.
///
/// # Errors
///
/// Returns [`Error::Deserialization`] if the body is not valid JSON or
/// does not match the expected shape.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(bytes).map_err(|e| Error::Deserialization(e.to_string()))
}
