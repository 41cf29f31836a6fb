//! Writing analysis and improvement handlers

use axum::{Json, extract::State};
use domain::{WritingAnalysis, WritingSample};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, state::GatewayState};

/// Writing request body, shared by analyze and improve
#[derive(Debug, Deserialize, ToSchema)]
pub struct WritingRequest {
    /// Raw text to analyze or improve
    pub text: String,
    /// Proficiency level tag
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "intermediate".to_string()
}

impl From<WritingRequest> for WritingSample {
    fn from(request: WritingRequest) -> Self {
        Self {
            text: request.text,
            level: request.level,
        }
    }
}

/// Improvement response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ImproveResponse {
    /// The upstream's free-text improvement
    pub improved_text: String,
}

/// Analyze a writing sample into scores, corrections and suggestions
#[utoipa::path(
    post,
    path = "/writing/analyze",
    tag = "writing",
    request_body = WritingRequest,
    responses(
        (status = 200, description = "Structured writing analysis"),
        (status = 500, description = "Upstream failed or returned unparseable output")
    )
)]
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn analyze_writing(
    State(state): State<GatewayState>,
    Json(request): Json<WritingRequest>,
) -> Result<Json<WritingAnalysis>, ApiError> {
    let analysis = state.tutor.analyze_writing(&request.into()).await?;
    Ok(Json(analysis))
}

/// Improve a writing sample
#[utoipa::path(
    post,
    path = "/writing/improve",
    tag = "writing",
    request_body = WritingRequest,
    responses(
        (status = 200, description = "Improved text", body = ImproveResponse),
        (status = 500, description = "Upstream call failed")
    )
)]
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn improve_writing(
    State(state): State<GatewayState>,
    Json(request): Json<WritingRequest>,
) -> Result<Json<ImproveResponse>, ApiError> {
    let improved_text = state.tutor.improve_writing(&request.into()).await?;
    Ok(Json(ImproveResponse { improved_text }))
}
