use scoring::models::HistoryPoint;
use scoring::services::participant_history;

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn get_history(state: &AppState, participant_id: &str) -> ApiResult<Vec<HistoryPoint>> {
    let history = state
        .with_snapshot(|snapshot, settings| {
            participant_history(
                &snapshot.participants,
                participant_id,
                &snapshot.scores,
                &snapshot.games,
                settings,
            )
        })
        .await?;
    Ok(history)
}
