//! Domain error types

use thiserror::Error;

/// Coarse error classification shared by every layer.
///
/// Mirrors the three failure families of the system: caller mistakes,
/// upstream generative-API failures, and malformed model output. The
/// presentation layer maps these to exit codes and error payloads
/// (`Validation` behaves like an HTTP 400, the other two like a 500).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input from the caller (role, session id, out-of-order request)
    Validation,
    /// The generative-text upstream failed or timed out
    Upstream,
    /// The model replied, but not in the expected structure
    Parse,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Upstream => write!(f, "upstream"),
            ErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Domain-level errors
///
/// Every variant is a caller mistake; upstream and parse failures have their
/// own types closer to where they occur.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid job role: {0}")]
    InvalidRole(String),

    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    #[error("Unknown session: {0}")]
    SessionNotFound(String),

    #[error("Response must not be empty")]
    EmptyResponse,

    #[error("Interview already complete after {answered} answers")]
    SessionComplete { answered: u32 },

    #[error("Feedback requires {required} answers, only {answered} given")]
    FeedbackNotReady { answered: u32, required: u32 },
}

impl DomainError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}
