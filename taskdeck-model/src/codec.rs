//! Serialization and deserialization for the stored record shapes.
//!
//! Every value in the backing store is a JSON string. These helpers wrap
//! `serde_json` so the storage layers deal in one error type and callers
//! never touch the JSON crate directly.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error type for codec encode/decode operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Encodes a record into its stored JSON string.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the value cannot be serialized.
pub fn encode<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Decodes a record from its stored JSON string.
///
/// # Errors
///
/// Returns `CodecError::Serialization` if the string cannot be deserialized.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, CodecError> {
    serde_json::from_str(json).map_err(|e| CodecError::Serialization(e.to_string()))
}
