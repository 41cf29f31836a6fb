//! Generation handler

use axum::{Json, extract::State};
use domain::{GenerationParams, GenerationResult};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::GenerationState};

/// Generation request body: the prompt plus the decoding knobs, all of
/// which default when omitted.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(flatten)]
    pub params: GenerationParams,
}

/// Generate a continuation for a prompt
#[instrument(skip(state, request), fields(prompt_len = request.prompt.len()))]
pub async fn generate(
    State(state): State<GenerationState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerationResult>, ApiError> {
    let generator = state.generator.clone();
    let GenerateRequest { prompt, params } = request;

    // Model inference is synchronous; keep it off the async runtime.
    let result = tokio::task::spawn_blocking(move || generator.generate(&prompt, &params))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(result))
}
