//! Infrastructure layer for interview-coach
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileInterviewConfig,
    FileLogConfig, FileReplConfig,
};
pub use gemini::{client::GeminiTextGenerator, error::GeminiError};
pub use logging::JsonlTranscriptLogger;
