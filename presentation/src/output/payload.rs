//! Machine-readable error payload.
//!
//! The `{error, details}` body callers receive on failure: `error` is a
//! short human-readable message prefixed with the error class, `details`
//! carries diagnostics such as the raw model reply on a parse failure.

use coach_domain::ErrorKind;
use serde::Serialize;

/// Serializable error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorPayload {
    pub fn new(kind: ErrorKind, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            error: format!("{kind} error: {}", message.into()),
            details,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
