//! String-keyed action envelopes.
//!
//! UI event handlers and the CLI speak in `{kind, payload}` pairs. Every
//! action enum derives `Deserialize` with `#[serde(tag = "kind", content =
//! "payload")]`, so decoding an envelope is a single serde call. A kind the
//! enum does not know, or a payload of the wrong shape, decodes to `None`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An action in its untyped wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    /// Action kind, e.g. `"ADD_ITEM"` or `"increment"`.
    pub kind: String,
    /// Optional payload; absent for kinds that carry no data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl ActionEnvelope {
    /// Create an envelope without a payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Create an envelope carrying a payload.
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("kind".to_string(), Value::String(self.kind.clone()));
        if let Some(payload) = &self.payload {
            map.insert("payload".to_string(), payload.clone());
        }
        Value::Object(map)
    }
}

/// Decode an envelope into a typed action.
///
/// Returns `None` for unknown kinds and malformed payloads. Callers treat
/// `None` as a no-op, never as an error.
pub fn decode_action<A: DeserializeOwned>(envelope: &ActionEnvelope) -> Option<A> {
    match serde_json::from_value(envelope.to_value()) {
        Ok(action) => Some(action),
        Err(err) => {
            tracing::debug!(kind = %envelope.kind, error = %err, "Undecodable action envelope");
            None
        }
    }
}
