//! Application layer for interview-coach
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::InterviewParams;
pub use ports::{
    text_generator::{GeneratorError, TextGenerator},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::advance_interview::{
    AdvanceError, AdvanceInput, AdvanceInterviewUseCase, AdvanceOutput,
};
pub use use_cases::generate_feedback::{
    FeedbackError, FeedbackInput, GenerateFeedbackUseCase,
};
