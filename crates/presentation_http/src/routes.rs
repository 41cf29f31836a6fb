//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{
    handlers,
    state::{GatewayState, GenerationState, SpeechState},
};

/// Uploaded audio files can be large; the axum default of 2 MiB is too
/// small for a minute of WAV.
const AUDIO_UPLOAD_LIMIT: usize = 50 * 1024 * 1024;

/// Router for the chat/writing gateway
pub fn gateway_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/chat", post(handlers::chat::chat))
        .route("/writing/analyze", post(handlers::writing::analyze_writing))
        .route("/writing/improve", post(handlers::writing::improve_writing))
        .route("/model", get(handlers::models::get_model_info))
        .with_state(state)
}

/// Router for the generation service
pub fn generation_router(state: GenerationState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/generate", post(handlers::generate::generate))
        .with_state(state)
}

/// Router for the transcription service
pub fn speech_router(state: SpeechState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/transcribe", post(handlers::speech::transcribe))
        .route("/detect-language", post(handlers::speech::detect_language))
        .layer(DefaultBodyLimit::max(AUDIO_UPLOAD_LIMIT))
        .with_state(state)
}
