//! Chat handler

use axum::{Json, extract::State};
use domain::ChatExchange;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, state::GatewayState};

/// Chat request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The student's message
    pub message: String,
    /// Proficiency level tag
    #[serde(default = "default_level")]
    pub level: String,
    /// Prior turns of the conversation, oldest first
    #[serde(default)]
    pub previous_messages: Vec<String>,
}

fn default_level() -> String {
    "intermediate".to_string()
}

/// Chat response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    /// The tutor's reply
    pub message: String,
}

/// Handle a chat turn
#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Tutor reply", body = ChatResponse),
        (status = 400, description = "Unsupported provider configuration"),
        (status = 500, description = "Upstream call failed")
    )
)]
#[instrument(skip(state, request), fields(message_len = request.message.len()))]
pub async fn chat(
    State(state): State<GatewayState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let exchange = ChatExchange {
        message: request.message,
        level: request.level,
        previous_messages: request.previous_messages,
    };

    let message = state.tutor.chat(&exchange).await?;

    Ok(Json(ChatResponse { message }))
}
