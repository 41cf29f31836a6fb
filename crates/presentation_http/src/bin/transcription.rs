//! LinguaTutor transcription service
//!
//! Serves speech-to-text and language detection from a locally loaded
//! Whisper model.

use std::sync::Arc;

use ai_speech::{SpeechConfig, SpeechToText, WhisperSpeechEngine};
use presentation_http::{SpeechState, routes, server};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing("linguatutor_transcription=debug,tower_http=debug");

    let config = SpeechConfig::from_env();
    info!(model_path = %config.model_path, "Loading speech model");

    let engine = WhisperSpeechEngine::load(config)
        .map_err(|e| anyhow::anyhow!("Failed to load speech model: {e}"))?;
    let speech: Arc<dyn SpeechToText> = Arc::new(engine);

    info!("Speech model ready");

    let state = SpeechState { speech };

    let app = routes::speech_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = server::bind_address(8002);
    let listener = TcpListener::bind(&addr).await?;

    info!("Transcription service listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    info!("Transcription service shutdown complete");
    Ok(())
}
