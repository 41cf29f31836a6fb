//! Router state shared across handlers
//!
//! Each service carries its model/upstream dependency as a trait object so
//! handler tests can stand in a stub.

use std::sync::Arc;

use ai_generation::TextGeneration;
use ai_speech::SpeechToText;
use application::TutorService;

/// State for the chat/writing gateway
#[derive(Clone)]
pub struct GatewayState {
    /// Tutor service wrapping the upstream chat-completion endpoint
    pub tutor: Arc<TutorService>,
}

/// State for the generation service
#[derive(Clone)]
pub struct GenerationState {
    /// Loaded causal language model
    pub generator: Arc<dyn TextGeneration>,
}

/// State for the transcription service
#[derive(Clone)]
pub struct SpeechState {
    /// Loaded speech-to-text model
    pub speech: Arc<dyn SpeechToText>,
}
