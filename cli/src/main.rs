//! CLI entrypoint for interview-coach
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use clap::Parser;
use coach_application::{
    AdvanceInterviewUseCase, GenerateFeedbackUseCase, NoTranscriptLogger, TextGenerator,
    TranscriptLogger,
};
use coach_domain::SessionStore;
use coach_infrastructure::{ConfigLoader, GeminiTextGenerator, JsonlTranscriptLogger};
use coach_presentation::{Cli, InterviewRepl};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load and validate configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };
    config.validate()?;

    let params = config.interview_params();

    let Some(api_key) = config.resolve_api_key() else {
        bail!(
            "No Gemini API key configured. Set gemini.api_key in coach.toml \
             or the GEMINI_API_KEY environment variable."
        );
    };

    // === Dependency Injection ===
    // Create infrastructure adapter (Gemini upstream)
    let model = cli
        .model
        .clone()
        .unwrap_or_else(|| config.gemini.model.clone());
    let mut gemini = GeminiTextGenerator::new(api_key, model)?;
    if let Some(base_url) = &config.gemini.base_url {
        gemini = gemini.with_base_url(base_url);
    }
    let generator: Arc<dyn TextGenerator> = Arc::new(gemini);

    let transcript: Arc<dyn TranscriptLogger> = match &config.log.transcript_file {
        Some(path) => match JsonlTranscriptLogger::new(path) {
            Some(logger) => {
                info!("Transcript log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoTranscriptLogger),
        },
        None => Arc::new(NoTranscriptLogger),
    };

    let store = Arc::new(SessionStore::new());
    spawn_eviction_sweeper(Arc::clone(&store), params.session_ttl);

    let advance =
        AdvanceInterviewUseCase::new(Arc::clone(&store), Arc::clone(&generator), params.clone())
            .with_transcript_logger(Arc::clone(&transcript));
    let feedback = GenerateFeedbackUseCase::new(store, generator, params.clone())
        .with_transcript_logger(transcript);

    info!("Starting interview-coach");

    let repl = InterviewRepl::new(advance, feedback, params.max_questions, cli.session.clone())
        .with_role(cli.role.clone())
        .with_output(cli.output)
        .with_progress(!cli.quiet && config.repl.show_progress)
        .with_history_file(config.repl.history_file.clone().map(PathBuf::from));

    repl.run().await?;

    Ok(())
}

/// Periodically drop sessions idle past the TTL.
fn spawn_eviction_sweeper(store: Arc<SessionStore>, ttl: Duration) {
    // Sweep at most once a minute; sub-minute TTLs only matter in tests.
    let period = ttl.max(Duration::from_secs(60));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            let evicted = store.evict_idle(ttl).await;
            if evicted > 0 {
                debug!("Evicted {evicted} idle sessions");
            }
        }
    });
}
