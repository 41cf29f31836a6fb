//! Model info handler

use application::ModelInfo;
use axum::{Json, extract::State};
use tracing::instrument;

use crate::{error::ApiError, state::GatewayState};

/// Report the model the upstream currently serves
#[utoipa::path(
    get,
    path = "/model",
    tag = "model",
    responses(
        (status = 200, description = "Current model info, or the default record when the upstream lists nothing"),
        (status = 500, description = "Upstream unreachable")
    )
)]
#[instrument(skip(state))]
pub async fn get_model_info(
    State(state): State<GatewayState>,
) -> Result<Json<ModelInfo>, ApiError> {
    let info = state.tutor.model_info().await?;
    Ok(Json(info))
}
