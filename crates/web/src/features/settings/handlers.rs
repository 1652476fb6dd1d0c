use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use scoring::models::{PartialScoringConfig, ScoringConfig};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Active scoring settings", body = ScoringConfig)
    ),
    tag = "settings"
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<Response, WebError> {
    Ok(Json(state.settings().await).into_response())
}

#[utoipa::path(
    get,
    path = "/api/settings/defaults",
    responses(
        (status = 200, description = "Default scoring settings", body = ScoringConfig)
    ),
    tag = "settings"
)]
pub async fn get_default_settings(State(state): State<AppState>) -> Result<Response, WebError> {
    Ok(Json(*state.defaults()).into_response())
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = PartialScoringConfig,
    responses(
        (status = 200, description = "Settings replaced", body = ScoringConfig),
        (status = 400, description = "Settings violate scoring invariants")
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<PartialScoringConfig>,
) -> Result<Response, WebError> {
    let config = services::update_settings(&state, settings).await?;

    Ok(Json(config).into_response())
}
