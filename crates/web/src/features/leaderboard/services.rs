use scoring::dto::{LeaderboardQuery, LeaderboardSummaryResponse, PaginatedResponse};
use scoring::models::{CategoryStanding, ChallengeCategory, LeaderboardEntry};
use scoring::services::{category_standings, distribution, sort_entries, summarize};

use crate::error::ApiResult;
use crate::state::AppState;

/// Computes, sorts for display, then slices one page
pub async fn get_leaderboard(
    state: &AppState,
    query: &LeaderboardQuery,
) -> ApiResult<PaginatedResponse<LeaderboardEntry>> {
    let mut entries = state.leaderboard().await?;
    sort_entries(&mut entries, query.sort, query.direction);
    Ok(PaginatedResponse::paginate(entries, &query.pagination()))
}

pub async fn get_summary(state: &AppState) -> ApiResult<LeaderboardSummaryResponse> {
    let entries = state.leaderboard().await?;
    Ok(LeaderboardSummaryResponse {
        summary: summarize(&entries),
        distribution: distribution(&entries),
    })
}

pub async fn get_category_standings(
    state: &AppState,
    category: ChallengeCategory,
    limit: usize,
) -> ApiResult<Vec<CategoryStanding>> {
    let entries = state.leaderboard().await?;
    Ok(category_standings(&entries, category, limit))
}
