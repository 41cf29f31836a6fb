//! LinguaTutor generation service
//!
//! Serves sampling-based text generation from a locally loaded GGUF model.

use std::sync::Arc;

use ai_generation::{GeneratorConfig, LlamaGenerator, TextGeneration};
use presentation_http::{GenerationState, routes, server};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing("linguatutor_generation=debug,tower_http=debug");

    let config = GeneratorConfig::from_env();
    info!(model_path = %config.model_path, "Loading generation model");

    let generator = LlamaGenerator::load(config)
        .map_err(|e| anyhow::anyhow!("Failed to load generation model: {e}"))?;
    let generator: Arc<dyn TextGeneration> = Arc::new(generator);

    info!("Generation model ready");

    let state = GenerationState { generator };

    let app = routes::generation_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = server::bind_address(8001);
    let listener = TcpListener::bind(&addr).await?;

    info!("Generation service listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    info!("Generation service shutdown complete");
    Ok(())
}
