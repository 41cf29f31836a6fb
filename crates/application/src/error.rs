//! Application-level errors

use ai_core::CompletionError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Upstream completion call failed
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Upstream text was not the demanded JSON shape
    #[error("Failed to parse model response")]
    MalformedModelOutput,

    /// Configured provider is not supported
    #[error("Unsupported LLM provider: {0}")]
    UnsupportedProvider(String),
}
