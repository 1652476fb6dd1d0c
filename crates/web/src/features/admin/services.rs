use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SnapshotReloadResponse {
    pub participants: usize,
    pub scores: usize,
    pub games: usize,
}

pub async fn reload_snapshot(state: &AppState) -> ApiResult<SnapshotReloadResponse> {
    let snapshot = state.reload().await?;

    Ok(SnapshotReloadResponse {
        participants: snapshot.participants.len(),
        scores: snapshot.scores.len(),
        games: snapshot.games.len(),
    })
}
