//! Advance Interview use case.
//!
//! The interview state machine: given a session id and an optional candidate
//! response, decide the next action — ask the opening question, comment and
//! ask the next question, or declare the interview complete.
//!
//! The decision and every session mutation run under the session's lock, so
//! two concurrent requests for the same id cannot interleave and lose an
//! answer. The upstream call happens under that lock too (one in-flight model
//! call per session) and is bounded by the configured timeout.

use crate::config::InterviewParams;
use crate::ports::text_generator::{GeneratorError, TextGenerator};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use crate::use_cases::shared::generate_bounded;
use coach_domain::util::preview;
use coach_domain::{
    DomainError, ErrorKind, InterviewPrompt, JobRole, Persona, SessionStore,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while advancing an interview.
#[derive(Error, Debug)]
pub enum AdvanceError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Upstream error: {0}")]
    Generator(#[from] GeneratorError),
}

impl AdvanceError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdvanceError::Validation(e) => e.kind(),
            AdvanceError::Generator(e) => e.kind(),
        }
    }
}

/// Input for the [`AdvanceInterviewUseCase`].
///
/// Mirrors the start-interview request body: a caller-supplied session id,
/// the job role, and — on every call after the first — the candidate's
/// answer to the previous question.
#[derive(Debug, Clone)]
pub struct AdvanceInput {
    pub session_id: String,
    pub role: String,
    pub user_response: Option<String>,
}

impl AdvanceInput {
    pub fn new(session_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            role: role.into(),
            user_response: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.user_response = Some(response.into());
        self
    }
}

/// Result of one interview turn.
#[derive(Debug, Clone)]
pub struct AdvanceOutput {
    /// Interviewer text to show the candidate.
    pub message: String,
    /// Questions answered so far.
    pub question_count: u32,
    /// Whether the interview just finished.
    pub is_complete: bool,
    /// Whether feedback can now be requested.
    pub can_generate_feedback: bool,
}

/// Use case for advancing an interview by one turn.
///
/// 1. Validate the session id and role
/// 2. Load or create the session, take its lock
/// 3. Decide the turn: opening / follow-up / complete
/// 4. For opening and follow-up turns, generate the interviewer text upstream,
///    then commit the answer
///
/// Completion never calls the model: the terminal message is produced
/// locally and the candidate is pointed at feedback instead. An answer is
/// committed only on a successful turn, so upstream failures leave the
/// session resumable.
pub struct AdvanceInterviewUseCase {
    store: Arc<SessionStore>,
    generator: Arc<dyn TextGenerator>,
    persona: Persona,
    params: InterviewParams,
    transcript: Arc<dyn TranscriptLogger>,
}

impl AdvanceInterviewUseCase {
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

    /// Record turns to a transcript log.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Execute one interview turn.
    pub async fn execute(&self, input: AdvanceInput) -> Result<AdvanceOutput, AdvanceError> {
        if input.session_id.trim().is_empty() {
            return Err(DomainError::InvalidSessionId(input.session_id).into());
        }
        let role = JobRole::try_new(input.role.as_str())
            .ok_or_else(|| DomainError::InvalidRole(input.role.clone()))?;

        let session = self.store.get_or_create(&input.session_id, &role).await;
        let mut session = session.lock().await;

        let output = match input.user_response {
            None => {
                if session.question_count() > 0 {
                    return Err(DomainError::EmptyResponse.into());
                }
                info!(
                    session = %session.id(),
                    role = %session.role(),
                    "Opening interview"
                );
                let prompt = InterviewPrompt::opening(&self.persona, session.role());
                let message =
                    generate_bounded(&*self.generator, &prompt, self.params.upstream_timeout)
                        .await?;
                session.touch();
                AdvanceOutput {
                    message,
                    question_count: 0,
                    is_complete: false,
                    can_generate_feedback: false,
                }
            }
            Some(response) => {
                let response = response.trim().to_string();
                if response.is_empty() {
                    return Err(DomainError::EmptyResponse.into());
                }
                if session.has_answered_all(self.params.max_questions) {
                    return Err(DomainError::SessionComplete {
                        answered: session.question_count(),
                    }
                    .into());
                }

                // The answer commits only once the turn can no longer fail, so
                // an upstream error leaves the session unchanged and the
                // candidate free to resubmit.
                let count_after = session.question_count() + 1;

                if count_after >= self.params.max_questions {
                    let count = session.record_response(response);
                    info!(session = %session.id(), count, "Interview complete");
                    AdvanceOutput {
                        message: InterviewPrompt::closing_message(session.role()),
                        question_count: count,
                        is_complete: true,
                        can_generate_feedback: true,
                    }
                } else {
                    let prompt = InterviewPrompt::follow_up(
                        &self.persona,
                        session.role(),
                        &response,
                        count_after + 1,
                        self.params.max_questions,
                    );
                    let message = generate_bounded(
                        &*self.generator,
                        &prompt,
                        self.params.upstream_timeout,
                    )
                    .await?;
                    debug!(
                        session = %session.id(),
                        count = count_after,
                        answer = preview(&response, 80),
                        "Recorded answer"
                    );
                    let count = session.record_response(response);
                    AdvanceOutput {
                        message,
                        question_count: count,
                        is_complete: false,
                        can_generate_feedback: false,
                    }
                }
            }
        };

        self.transcript.log(TranscriptEvent::new(
            "interview_turn",
            serde_json::json!({
                "session": session.id(),
                "role": session.role().title(),
                "questionCount": output.question_count,
                "isComplete": output.is_complete,
                "message": output.message,
            }),
        ));

        Ok(output)
    }
}
