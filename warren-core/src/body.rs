//! # Payload Decoding
//!
//! Payloads are decoded as JSON first. Anything that is not well-formed JSON
//! falls back to the untouched payload bytes; decoding itself never fails, and the
//! fallback is visible in the [`Body`] variant rather than hidden in control flow.

use crate::error::BodyError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// A decoded message payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// The payload decoded as structured data.
    Json(Value),
    /// The payload was not structured data; these are its original bytes.
    Raw(Vec<u8>),
}

impl Body {
    /// Decode a raw payload.
    ///
    /// An empty payload decodes to `null`.
    ///
    /// ```rust
    /// use warren_core::Body;
    /// use serde_json::json;
    ///
    /// assert_eq!(Body::decode(br#"{"id": 1}"#), Body::Json(json!({"id": 1})));
    /// assert_eq!(Body::decode(b"{\"id\":"), Body::Raw(b"{\"id\":".to_vec()));
    /// ```
    pub fn decode(payload: &[u8]) -> Self {
        if payload.is_empty() {
            return Body::Json(Value::Null);
        }
        match serde_json::from_slice(payload) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::Raw(payload.to_vec()),
        }
    }

    /// The structured value, if the payload decoded.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Raw(_) => None,
        }
    }

    /// The raw payload, if it did not decode.
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Body::Json(_) => None,
            Body::Raw(raw) => Some(raw),
        }
    }

    /// The raw payload as text, if it did not decode and is valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        self.as_raw().and_then(|raw| std::str::from_utf8(raw).ok())
    }

    /// Returns true if decoding fell back to the raw payload.
    pub fn is_raw(&self) -> bool {
        matches!(self, Body::Raw(_))
    }

    /// Consume the body, keeping the structured value if there is one.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Raw(_) => None,
        }
    }

    /// Deserialize the structured value into a concrete type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, BodyError> {
        match self {
            Body::Json(value) => Ok(<T as serde::Deserialize>::deserialize(value)?),
            Body::Raw(_) => Err(BodyError::NotStructured),
        }
    }

    /// A human-readable rendering for diagnostics: pretty-printed JSON, or the
    /// raw payload as lossy UTF-8 text.
    pub fn dump(&self) -> String {
        match self {
            Body::Json(value) => format!("{value:#}"),
            Body::Raw(raw) => String::from_utf8_lossy(raw).into_owned(),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Json(value) => write!(f, "{value}"),
            Body::Raw(raw) => f.write_str(&String::from_utf8_lossy(raw)),
        }
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}
