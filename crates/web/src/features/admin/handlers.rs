use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::error::WebError;
use crate::state::AppState;

use super::services::{self, SnapshotReloadResponse};

#[utoipa::path(
    post,
    path = "/api/admin/snapshot/reload",
    responses(
        (status = 200, description = "Snapshot reloaded from its source", body = SnapshotReloadResponse),
        (status = 500, description = "Snapshot could not be loaded; the previous one stays active")
    ),
    tag = "admin"
)]
pub async fn reload_snapshot(State(state): State<AppState>) -> Result<Response, WebError> {
    let response = services::reload_snapshot(&state).await?;

    Ok(Json(response).into_response())
}
