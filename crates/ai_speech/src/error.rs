//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during audio decoding or transcription
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The GGML model file was not found at the given path
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// whisper.cpp failed to initialize a context or state
    #[error("Whisper context initialization failed: {0}")]
    ContextInit(String),

    /// The uploaded bytes could not be decoded as audio
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// The inference pass failed
    #[error("Transcription failed: {0}")]
    Transcription(String),
}
