//! Helpers shared by the interview use cases.

use crate::ports::text_generator::{GeneratorError, TextGenerator};
use std::time::Duration;

/// Run one upstream generate call under a hard timeout.
///
/// The caller holds the session lock while this awaits, so an unbounded hang
/// would pin that session forever; expiry maps to [`GeneratorError::Timeout`].
/// A successful call with an all-whitespace body counts as an empty response.
pub(crate) async fn generate_bounded(
    generator: &dyn TextGenerator,
    prompt: &str,
    timeout: Duration,
) -> Result<String, GeneratorError> {
    let text = tokio::time::timeout(timeout, generator.generate(prompt))
        .await
        .map_err(|_| GeneratorError::Timeout)??;

    if text.trim().is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }
    Ok(text)
}
