//! Configuration file handling
//!
//! - [`file_config`] — raw TOML structure with defaults and validation
//! - [`loader`] — multi-source merging (defaults, global file, project file, env)

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileInterviewConfig, FileLogConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
