//! Error types for the Gemini adapter

use coach_application::GeneratorError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Prompt blocked by safety filter: {0}")]
    Blocked(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("No API key configured; set gemini.api_key or GEMINI_API_KEY")]
    MissingApiKey,
}

impl From<GeminiError> for GeneratorError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::Request(inner) => GeneratorError::Http(inner.to_string()),
            GeminiError::Api { status, message } => GeneratorError::Api { status, message },
            GeminiError::QuotaExceeded(_) => GeneratorError::QuotaExceeded,
            GeminiError::Blocked(reason) => {
                GeneratorError::InvalidResponse(format!("prompt blocked: {reason}"))
            }
            GeminiError::EmptyResponse => GeneratorError::EmptyResponse,
            GeminiError::MissingApiKey => {
                GeneratorError::Http("no API key configured".to_string())
            }
        }
    }
}
