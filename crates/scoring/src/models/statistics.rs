use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate figures over a computed leaderboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary {
    pub total_participants: usize,
    pub scored_participants: usize,
    pub average_physical: Decimal,
    pub average_mental: Decimal,
    pub average_extra: Decimal,
    pub average_total: Decimal,
    pub max_total: Decimal,
}

/// Points earned per category, summed over every participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PointsDistribution {
    pub physical: Decimal,
    pub mental: Decimal,
    pub extra: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStanding {
    pub participant_id: String,
    pub name: String,
    pub score: Decimal,
}

/// Scores of a single record, computed as if it were the participant's latest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub score_id: String,
    pub recorded_at: DateTime<Utc>,
    pub physical_score: Decimal,
    pub mental_score: Decimal,
    pub extra_score: Decimal,
    pub total_score: Decimal,
}
