//! Gemini adapter
//!
//! Implements the application [`TextGenerator`] port against the Gemini
//! `generateContent` REST endpoint.
//!
//! [`TextGenerator`]: coach_application::TextGenerator

pub mod client;
pub mod error;
pub mod protocol;
