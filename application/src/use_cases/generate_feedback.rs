//! Generate Feedback use case.
//!
//! Produces the structured end-of-interview assessment: builds the feedback
//! prompt over the full answer transcript, sends it upstream, and parses the
//! reply against the [`Feedback`] contract. Only available once every
//! question has been answered.
//!
//! A malformed model reply is not repaired or re-prompted; the parse error
//! keeps the raw text and the caller may simply ask again.

use crate::config::InterviewParams;
use crate::ports::text_generator::{GeneratorError, TextGenerator};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use crate::use_cases::shared::generate_bounded;
use coach_domain::{
    DomainError, ErrorKind, Feedback, FeedbackParseError, InterviewPrompt, Persona, SessionStore,
    parse_feedback,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while generating feedback.
#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Upstream error: {0}")]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Parse(#[from] FeedbackParseError),
}

impl FeedbackError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedbackError::Validation(e) => e.kind(),
            FeedbackError::Generator(e) => e.kind(),
            FeedbackError::Parse(e) => e.kind(),
        }
    }

    /// Diagnostic detail: the raw model reply, when a parse failed.
    pub fn details(&self) -> Option<&str> {
        match self {
            FeedbackError::Parse(e) => Some(e.raw_text()),
            _ => None,
        }
    }
}

/// Input for the [`GenerateFeedbackUseCase`].
#[derive(Debug, Clone)]
pub struct FeedbackInput {
    pub session_id: String,
}

impl FeedbackInput {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

/// Use case for generating end-of-interview feedback.
pub struct GenerateFeedbackUseCase {
    store: Arc<SessionStore>,
    generator: Arc<dyn TextGenerator>,
    persona: Persona,
    params: InterviewParams,
    transcript: Arc<dyn TranscriptLogger>,
}

impl GenerateFeedbackUseCase {
    pub fn new(
        store: Arc<SessionStore>,
        generator: Arc<dyn TextGenerator>,
        params: InterviewParams,
    ) -> Self {
        Self {
            store,
            generator,
            persona: Persona::default(),
            params,
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    /// Use a different interviewer persona.
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    /// Record results to a transcript log.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Generate feedback for a completed interview.
    pub async fn execute(&self, input: FeedbackInput) -> Result<Feedback, FeedbackError> {
        let session = self
            .store
            .get(&input.session_id)
            .await
            .ok_or_else(|| DomainError::SessionNotFound(input.session_id.clone()))?;
        let mut session = session.lock().await;

        if !session.has_answered_all(self.params.max_questions) {
            return Err(DomainError::FeedbackNotReady {
                answered: session.question_count(),
                required: self.params.max_questions,
            }
            .into());
        }

        info!(
            session = %session.id(),
            role = %session.role(),
            answers = session.responses().len(),
            "Generating feedback"
        );

        let prompt =
            InterviewPrompt::feedback_request(&self.persona, session.role(), session.responses());
        let raw = generate_bounded(&*self.generator, &prompt, self.params.upstream_timeout).await?;
        session.touch();

        let feedback = match parse_feedback(&raw) {
            Ok(feedback) => feedback,
            Err(e) => {
                warn!(session = %session.id(), error = %e, "Feedback reply failed to parse");
                self.transcript.log(TranscriptEvent::new(
                    "feedback_parse_failed",
                    serde_json::json!({
                        "session": session.id(),
                        "error": e.to_string(),
                        "raw": e.raw_text(),
                    }),
                ));
                return Err(e.into());
            }
        };

        self.transcript.log(TranscriptEvent::new(
            "feedback_generated",
            serde_json::json!({
                "session": session.id(),
                "role": session.role().title(),
                "rating": feedback.rating,
                "feedback": feedback,
            }),
        ));

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use coach_domain::JobRole;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGenerator {
        replies: Mutex<VecDeque<Result<String, GeneratorError>>>,
    }

    impl MockGenerator {
        fn new(replies: Vec<Result<String, GeneratorError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected generate call"))
        }
    }

    const WELL_FORMED: &str = r#"```json
{
    "overallFeedback": "Consistent, specific answers across all six questions.",
    "strengths": [{"point": "Concrete examples", "action": "Keep anchoring claims in shipped work."}],
    "improvements": [{"point": "Team credit", "action": "A rising tide lifts all boats: name your collaborators."}],
    "rating": 8,
    "conclusion": "Well prepared for the real thing."
}
```"#;

    async fn completed_store(answers: u32) -> Arc<SessionStore> {
        let store = Arc::new(SessionStore::new());
        let session = store
            .get_or_create("s1", &JobRole::new("Software Engineer"))
            .await;
        let mut guard = session.lock().await;
        for n in 0..answers {
            guard.record_response(format!("answer {}", n + 1));
        }
        drop(guard);
        store
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_feedback_for_completed_interview() {
        let store = completed_store(6).await;
        let generator = Arc::new(MockGenerator::new(vec![Ok(WELL_FORMED.to_string())]));
        let use_case =
            GenerateFeedbackUseCase::new(store, generator, InterviewParams::default());

        let feedback = use_case
            .execute(FeedbackInput::new("s1"))
            .await
            .unwrap();

        assert_eq!(feedback.rating, 8);
        assert!((1..=10).contains(&feedback.rating));
        assert_eq!(feedback.strengths.len(), 1);
    }

    #[tokio::test]
    async fn test_feedback_before_completion_is_rejected() {
        let store = completed_store(4).await;
        let generator = Arc::new(MockGenerator::new(vec![]));
        let use_case =
            GenerateFeedbackUseCase::new(store, generator, InterviewParams::default());

        let err = use_case
            .execute(FeedbackInput::new("s1"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FeedbackError::Validation(DomainError::FeedbackNotReady {
                answered: 4,
                required: 6,
            })
        ));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_unknown_session_is_rejected() {
        let store = Arc::new(SessionStore::new());
        let generator = Arc::new(MockGenerator::new(vec![]));
        let use_case =
            GenerateFeedbackUseCase::new(store, generator, InterviewParams::default());

        let err = use_case
            .execute(FeedbackInput::new("nope"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FeedbackError::Validation(DomainError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_reply_keeps_raw_text() {
        let store = completed_store(6).await;
        let generator = Arc::new(MockGenerator::new(vec![Ok("not json".to_string())]));
        let use_case =
            GenerateFeedbackUseCase::new(store, generator, InterviewParams::default());

        let err = use_case
            .execute(FeedbackInput::new("s1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.details(), Some("not json"));
    }

    #[tokio::test]
    async fn test_parse_failure_allows_retry() {
        // No repair pass: the caller just asks again, and a well-formed second
        // reply succeeds.
        let store = completed_store(6).await;
        let generator = Arc::new(MockGenerator::new(vec![
            Ok("Sorry, here are my thoughts instead.".to_string()),
            Ok(WELL_FORMED.to_string()),
        ]));
        let use_case =
            GenerateFeedbackUseCase::new(store, generator, InterviewParams::default());

        assert!(use_case.execute(FeedbackInput::new("s1")).await.is_err());
        let feedback = use_case
            .execute(FeedbackInput::new("s1"))
            .await
            .unwrap();
        assert_eq!(feedback.rating, 8);
    }

    #[tokio::test]
    async fn test_full_interview_scenario() {
        // Software Engineer, six questions: opening + five follow-ups come
        // from the model, the sixth answer completes locally, and feedback
        // parses with a rating in range.
        use crate::use_cases::advance_interview::{AdvanceInput, AdvanceInterviewUseCase};

        let store = Arc::new(SessionStore::new());
        let params = InterviewParams::default();

        let interviewer = Arc::new(MockGenerator::new(
            (0..6).map(|n| Ok(format!("Question {}?", n + 1))).collect(),
        ));
        let advance = AdvanceInterviewUseCase::new(
            Arc::clone(&store),
            interviewer,
            params.clone(),
        );

        advance
            .execute(AdvanceInput::new("scenario", "Software Engineer"))
            .await
            .unwrap();
        for n in 1..=6u32 {
            let output = advance
                .execute(
                    AdvanceInput::new("scenario", "Software Engineer")
                        .with_response(format!("answer {n}")),
                )
                .await
                .unwrap();
            assert_eq!(output.question_count, n);
            assert_eq!(output.is_complete, n == 6);
        }

        let reviewer = Arc::new(MockGenerator::new(vec![Ok(WELL_FORMED.to_string())]));
        let feedback_use_case = GenerateFeedbackUseCase::new(store, reviewer, params);
        let feedback = feedback_use_case
            .execute(FeedbackInput::new("scenario"))
            .await
            .unwrap();
        assert!((1..=10).contains(&feedback.rating));
        assert!(!feedback.strengths.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let store = completed_store(6).await;
        let generator = Arc::new(MockGenerator::new(vec![Err(GeneratorError::Api {
            status: 503,
            message: "overloaded".to_string(),
        })]));
        let use_case =
            GenerateFeedbackUseCase::new(store, generator, InterviewParams::default());

        let err = use_case
            .execute(FeedbackInput::new("s1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert!(err.details().is_none());
    }
}
