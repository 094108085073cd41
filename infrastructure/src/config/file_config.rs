//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field has a default, so an empty file is valid.

use coach_application::InterviewParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("interview.max_questions must be at least 1")]
    InvalidMaxQuestions,

    #[error("interview.upstream_timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("gemini.model cannot be empty")]
    EmptyModelName,
}

/// `[interview]` — flow parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInterviewConfig {
    /// Questions asked before feedback becomes available.
    pub max_questions: u32,
    /// Hard ceiling on a single upstream call, in seconds.
    pub upstream_timeout_secs: u64,
    /// Idle seconds after which a session may be evicted.
    pub session_ttl_secs: u64,
}

impl Default for FileInterviewConfig {
    fn default() -> Self {
        Self {
            max_questions: 6,
            upstream_timeout_secs: 30,
            session_ttl_secs: 30 * 60,
        }
    }
}

/// `[gemini]` — upstream API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// API key; falls back to the GEMINI_API_KEY environment variable.
    pub api_key: Option<String>,
    /// Model name passed to generateContent.
    pub model: String,
    /// Endpoint override (proxies, tests).
    pub base_url: Option<String>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: crate::gemini::client::DEFAULT_MODEL.to_string(),
            base_url: None,
        }
    }
}

/// `[log]` — transcript logging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path to the JSONL transcript file; unset disables transcript logging.
    pub transcript_file: Option<String>,
}

/// `[repl]` — interactive mode settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the thinking spinner while waiting on the model.
    pub show_progress: bool,
    /// Path to the readline history file.
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub interview: FileInterviewConfig,
    pub gemini: FileGeminiConfig,
    pub log: FileLogConfig,
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.interview.max_questions == 0 {
            return Err(ConfigValidationError::InvalidMaxQuestions);
        }
        if self.interview.upstream_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        Ok(())
    }

    /// Application-layer parameters derived from this file.
    pub fn interview_params(&self) -> InterviewParams {
        InterviewParams::default()
            .with_max_questions(self.interview.max_questions)
            .with_upstream_timeout(Duration::from_secs(self.interview.upstream_timeout_secs))
            .with_session_ttl(Duration::from_secs(self.interview.session_ttl_secs))
    }

    /// API key from the file, or the GEMINI_API_KEY environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.gemini
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }
}
