//! OpenAPI documentation for the gateway
//!
//! Serves a Swagger UI at `/docs` backed by the generated document.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;

/// OpenAPI documentation for the LinguaTutor gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LinguaTutor Gateway API",
        version = "0.2.1",
        description = "Chat and writing endpoints backed by an OpenAI-style chat-completion server",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Liveness endpoint"),
        (name = "chat", description = "Conversational tutoring"),
        (name = "writing", description = "Writing analysis and improvement"),
        (name = "model", description = "Upstream model information")
    ),
    paths(
        handlers::health::health_check,
        handlers::chat::chat,
        handlers::writing::analyze_writing,
        handlers::writing::improve_writing,
        handlers::models::get_model_info,
    )
)]
pub struct ApiDoc;

/// Router serving the Swagger UI and the raw document
pub fn docs_router() -> Router {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
