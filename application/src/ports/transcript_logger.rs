//! Port for structured transcript logging.
//!
//! Records interview events (turns taken, feedback produced, parse failures)
//! to a machine-readable log. Separate from `tracing`: tracing carries
//! human-readable diagnostics, this port captures what actually happened in
//! each interview for later inspection.

use serde_json::Value;

/// A structured transcript event.
pub struct TranscriptEvent {
    /// Event type identifier (e.g., "interview_turn", "feedback_generated").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording transcript events.
///
/// `log` is synchronous and non-fallible so a broken log file can never fail
/// an interview turn; adapters deal with I/O errors themselves.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when transcript logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
