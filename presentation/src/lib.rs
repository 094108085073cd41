//! Presentation layer for interview-coach
//!
//! This crate contains CLI definitions, output formatters, the progress
//! spinner, and the interactive interview REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::InterviewRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::payload::ErrorPayload;
pub use progress::reporter::ThinkingSpinner;
