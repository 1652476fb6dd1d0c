use utoipa::OpenApi;

use crate::features::{admin, leaderboard, participants, settings};

#[derive(OpenApi)]
#[openapi(
    paths(
        leaderboard::handlers::get_leaderboard,
        leaderboard::handlers::get_summary,
        leaderboard::handlers::get_category_standings,
        participants::handlers::get_history,
        settings::handlers::get_settings,
        settings::handlers::get_default_settings,
        settings::handlers::update_settings,
        admin::handlers::reload_snapshot,
    ),
    components(
        schemas(
            scoring::dto::common::PaginationMeta,
            scoring::dto::leaderboard::SortColumn,
            scoring::dto::leaderboard::SortDirection,
            scoring::dto::leaderboard::LeaderboardSummaryResponse,
            scoring::models::LeaderboardEntry,
            scoring::models::LeaderboardSummary,
            scoring::models::PointsDistribution,
            scoring::models::CategoryStanding,
            scoring::models::HistoryPoint,
            scoring::models::ExtraStatus,
            scoring::models::ChallengeCategory,
            scoring::models::ScoringConfig,
            scoring::models::ThresholdConfig,
            scoring::models::ExtraScoringConfig,
            scoring::models::ExtraPointTable,
            scoring::models::StatusPoints,
            scoring::models::PartialScoringConfig,
            scoring::models::PartialThresholdConfig,
            scoring::models::PartialExtraScoringConfig,
            scoring::models::PartialExtraPointTable,
            scoring::models::PartialStatusPoints,
            admin::services::SnapshotReloadResponse,
        )
    ),
    tags(
        (name = "leaderboard", description = "Computed leaderboard endpoints"),
        (name = "participants", description = "Per-participant score history"),
        (name = "settings", description = "Scoring settings"),
        (name = "admin", description = "Snapshot maintenance"),
    )
)]
pub struct ApiDoc;
