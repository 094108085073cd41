//! Text generator port
//!
//! Defines the interface to the upstream generative-text API. The whole
//! upstream surface is one call: a text prompt in, generated text out. There
//! are no retries anywhere — every failure is terminal for its request and
//! surfaces to the caller as an upstream error.

use async_trait::async_trait;
use coach_domain::ErrorKind;
use thiserror::Error;

/// Errors that can occur on an upstream generate call
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Upstream request failed: {0}")]
    Http(String),

    #[error("Upstream API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Upstream quota exceeded")]
    QuotaExceeded,

    #[error("Empty response from upstream")]
    EmptyResponse,

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Unexpected upstream response: {0}")]
    InvalidResponse(String),
}

impl GeneratorError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Upstream
    }
}

/// Gateway to the generative-text upstream
///
/// This port is how the application layer reaches the model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
