//! Interview parameters — flow control for the use cases.
//!
//! [`InterviewParams`] groups the static knobs that shape an interview:
//! how many questions are asked, how long an upstream call may run, and how
//! long an idle session survives. Application-layer concerns, not domain
//! policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of interview questions.
pub const DEFAULT_MAX_QUESTIONS: u32 = 6;

/// Interview flow parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewParams {
    /// Questions asked before feedback becomes available.
    pub max_questions: u32,
    /// Hard ceiling on a single upstream generate call.
    pub upstream_timeout: Duration,
    /// Idle time after which a session may be evicted.
    pub session_ttl: Duration,
}

impl Default for InterviewParams {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
            upstream_timeout: Duration::from_secs(30),
            session_ttl: Duration::from_secs(30 * 60),
        }
    }
}

impl InterviewParams {
    pub fn with_max_questions(mut self, max: u32) -> Self {
        self.max_questions = max;
        self
    }

    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = InterviewParams::default();
        assert_eq!(params.max_questions, 6);
        assert_eq!(params.upstream_timeout, Duration::from_secs(30));
        assert_eq!(params.session_ttl, Duration::from_secs(1800));
    }

    #[test]
    fn test_builder() {
        let params = InterviewParams::default()
            .with_max_questions(3)
            .with_upstream_timeout(Duration::from_secs(5));
        assert_eq!(params.max_questions, 3);
        assert_eq!(params.upstream_timeout, Duration::from_secs(5));
    }
}
