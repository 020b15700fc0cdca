//! Engine error types.

use thiserror::Error;

/// Failure reasons for insight generation.
///
/// All external-service failures collapse into one of these; nothing
/// here is fatal to the process. The UI layer decides how a failure
/// is rendered.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,

    #[error("Completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion API error (HTTP {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Completion API returned no choices")]
    EmptyCompletion,
}
