use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use scoring::dto::{CategoryQuery, LeaderboardQuery, LeaderboardSummaryResponse, PaginatedResponse};
use scoring::models::{CategoryStanding, ChallengeCategory, LeaderboardEntry};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Leaderboard computed successfully", body = PaginatedResponse<LeaderboardEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let response = services::get_leaderboard(&state, &query).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/summary",
    responses(
        (status = 200, description = "Leaderboard summary", body = LeaderboardSummaryResponse)
    ),
    tag = "leaderboard"
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<Response, WebError> {
    let response = services::get_summary(&state).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/categories/{category}",
    params(
        ("category" = String, Path, description = "physical, mental or extra"),
        CategoryQuery
    ),
    responses(
        (status = 200, description = "Top participants of the category", body = Vec<CategoryStanding>),
        (status = 400, description = "Unknown category or invalid limit")
    ),
    tag = "leaderboard"
)]
pub async fn get_category_standings(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Result<Response, WebError> {
    let category: ChallengeCategory = category.parse().map_err(WebError::BadRequest)?;
    query.validate().map_err(WebError::BadRequest)?;

    let standings = services::get_category_standings(&state, category, query.limit).await?;

    Ok(Json(standings).into_response())
}
