//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final feedback
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted feedback with all sections
    Full,
    /// Only the rating and overall feedback
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for interview-coach
#[derive(Parser, Debug)]
#[command(name = "interview-coach")]
#[command(version, about = "Mock interview practice against a generative interviewer")]
#[command(long_about = r#"
interview-coach runs a six-question mock interview for a job role you pick.
An AI interviewer asks one question at a time, comments on each answer, and
once every question is answered produces structured feedback: strengths,
improvements, and a 1-10 rating.

Configuration files are loaded from (in priority order):
1. COACH_* environment variables
2. --config <path>      Explicit config file
3. ./coach.toml         Project-level config
4. ~/.config/interview-coach/config.toml   Global config

The Gemini API key comes from gemini.api_key or GEMINI_API_KEY.

Example:
  interview-coach "Software Engineer"
  interview-coach --output json "Product Manager"
"#)]
pub struct Cli {
    /// Job title to interview for (prompted interactively if omitted)
    pub role: Option<String>,

    /// Session identifier (useful when inspecting transcript logs)
    #[arg(long, value_name = "ID", default_value = "local")]
    pub session: String,

    /// Model to use for the interviewer
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format for the final feedback
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the thinking spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
