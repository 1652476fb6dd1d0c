use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use scoring::models::HistoryPoint;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/participants/{participant_id}/history",
    params(
        ("participant_id" = String, Path, description = "Participant id")
    ),
    responses(
        (status = 200, description = "Every scored record, oldest first", body = Vec<HistoryPoint>),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_history(
    State(state): State<AppState>,
    Path(participant_id): Path<String>,
) -> Result<Response, WebError> {
    let history = services::get_history(&state, &participant_id).await?;

    Ok(Json(history).into_response())
}

#[cfg(test)]
mod tests {
    use crate::routes::app;
    use crate::state::fixtures;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = app(fixtures::state().await)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_history_lists_records_oldest_first() {
        let (status, body) = get("/api/participants/p1/history").await;

        assert_eq!(status, StatusCode::OK);
        let points = body.as_array().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0]["scoreId"], "s1");
        assert_eq!(points[0]["totalScore"], 40.0);
        assert_eq!(points[1]["scoreId"], "s2");
        assert_eq!(points[1]["totalScore"], 220.0);
    }

    #[tokio::test]
    async fn test_participant_without_scores_has_empty_history() {
        let (status, body) = get("/api/participants/p3/history").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_participant_is_not_found() {
        let (status, body) = get("/api/participants/ghost/history").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("ghost"));
    }
}
