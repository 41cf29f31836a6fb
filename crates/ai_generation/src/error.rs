//! Generation errors

use thiserror::Error;

/// Errors that can occur while loading or running the generation model
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The GGUF model file was not found at the given path
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// llama.cpp backend or model initialization failed
    #[error("Backend error: {0}")]
    Backend(String),

    /// Tokenizing the prompt failed
    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    /// The decoding loop failed
    #[error("Generation failed: {0}")]
    Generation(String),
}
