//! Gemini `generateContent` client.
//!
//! One prompt in, one generated text out — the adapter behind the
//! application's [`TextGenerator`] port. Errors are never retried here;
//! classification happens in [`GeminiError`] and the use cases surface the
//! mapped [`GeneratorError`] to the caller.

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use coach_application::{GeneratorError, TextGenerator};
use tracing::{debug, info};

/// Public REST endpoint for the generative-language API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Text generator backed by the Gemini REST API.
pub struct GeminiTextGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiTextGenerator {
    /// Create a client for `model` authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }
        info!("GeminiTextGenerator initialized");
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!(model = %self.model, prompt_bytes = prompt.len(), "Calling generateContent");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            if status.as_u16() == 429 {
                return Err(GeminiError::QuotaExceeded(message));
            }
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        if let Some(feedback) = &parsed.prompt_feedback
            && let Some(reason) = &feedback.block_reason
        {
            return Err(GeminiError::Blocked(reason.clone()));
        }

        parsed.text().ok_or(GeminiError::EmptyResponse)
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GeneratorError> {
        self.generate_content(prompt).await.map_err(Into::into)
    }
}
