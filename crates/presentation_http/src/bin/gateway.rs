//! LinguaTutor chat/writing gateway
//!
//! Forwards templated tutoring prompts to the configured chat-completion
//! server and reshapes the responses.

use std::sync::Arc;

use ai_core::{ChatCompletion, CompletionConfig, LmStudioClient};
use application::TutorService;
use presentation_http::{GatewayState, openapi, routes, server};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing("linguatutor_gateway=debug,tower_http=debug");

    let config = CompletionConfig::from_env();
    info!(
        provider = %config.provider,
        base_url = %config.base_url,
        "Gateway configuration loaded"
    );

    let client = LmStudioClient::new(config.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize upstream client: {e}"))?;
    let completion: Arc<dyn ChatCompletion> = Arc::new(client);

    let tutor = TutorService::new(completion, config);

    let state = GatewayState {
        tutor: Arc::new(tutor),
    };

    let app = routes::gateway_router(state)
        .merge(openapi::docs_router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = server::bind_address(8000);
    let listener = TcpListener::bind(&addr).await?;

    info!("Gateway listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    info!("Gateway shutdown complete");
    Ok(())
}
