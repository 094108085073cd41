//! Session domain entities

use crate::core::role::JobRole;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Role of a message in the visible transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A message in the transcript (Entity)
///
/// The transcript is append-only from the caller's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// One candidate's in-progress interview (Entity)
///
/// Created on the first request carrying a new session id. `question_count`
/// only ever grows: each recorded answer appends to `responses` and bumps the
/// count by exactly one, so `question_count == responses.len()` always holds.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    role: JobRole,
    responses: Vec<String>,
    question_count: u32,
    last_activity: Instant,
}

impl Session {
    pub fn new(id: impl Into<String>, role: JobRole) -> Self {
        Self {
            id: id.into(),
            role,
            responses: Vec::new(),
            question_count: 0,
            last_activity: Instant::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> &JobRole {
        &self.role
    }

    /// Answers given so far, in submission order.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Number of questions answered so far.
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Whether the candidate has answered at least `max_questions` questions.
    pub fn has_answered_all(&self, max_questions: u32) -> bool {
        self.question_count >= max_questions
    }

    /// Record an answer: append it and advance the question counter.
    ///
    /// Returns the new question count.
    pub fn record_response(&mut self, response: impl Into<String>) -> u32 {
        self.responses.push(response.into());
        self.question_count += 1;
        self.last_activity = Instant::now();
        self.question_count
    }

    /// Refresh the activity timestamp without mutating interview state.
    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    /// How long ago this session was last used.
    pub fn idle_for(&self) -> std::time::Duration {
        self.last_activity.elapsed()
    }
}
