//! API error handling
//!
//! Maps service failures onto the three HTTP error kinds: generic 500 with
//! the underlying message, a distinct 500 with a fixed message when the
//! model output could not be parsed, and 400 for unsupported configuration.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream model output was not the demanded JSON shape
    #[error("Failed to parse model response")]
    MalformedModelOutput,

    /// Upstream call failed (network error or non-success status)
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::MalformedModelOutput => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "malformed_model_output",
                "Failed to parse model response".to_string(),
            ),
            Self::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "upstream_error", msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Completion(e) => Self::Upstream(e.to_string()),
            ApplicationError::MalformedModelOutput => Self::MalformedModelOutput,
            ApplicationError::UnsupportedProvider(provider) => {
                Self::BadRequest(format!("Unsupported LLM provider: {provider}"))
            }
        }
    }
}

impl From<ai_generation::GenerationError> for ApiError {
    fn from(err: ai_generation::GenerationError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<ai_speech::SpeechError> for ApiError {
    fn from(err: ai_speech::SpeechError) -> Self {
        Self::Internal(err.to_string())
    }
}
