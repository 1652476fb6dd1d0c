use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::challenge::ChallengeCategory;
use super::score_record::ExtraStatus;

/// Result of scoring one record's extra challenges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtraScore {
    /// Sum of contributions before the cap
    pub raw: Decimal,
    /// `raw` clamped into `[capMin, capMax]`
    pub capped: Decimal,
    /// Contribution of each scored challenge, before the cap
    pub breakdown: BTreeMap<String, Decimal>,
}

/// One participant's computed, ranked standing.
///
/// Derived on every call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub participant_id: String,
    pub name: String,
    pub year: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    pub physical_score: Decimal,
    pub mental_score: Decimal,
    pub extra_score_raw: Decimal,
    pub extra_score_final: Decimal,
    pub total_score: Decimal,

    pub physical_time: Decimal,
    pub mental_time: Decimal,
    pub extra_statuses: BTreeMap<String, ExtraStatus>,
    pub extra_breakdown: BTreeMap<String, Decimal>,
    pub game_times: BTreeMap<String, Decimal>,

    /// Id of the record the scores were computed from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_score_id: Option<String>,
    /// Unix epoch when the participant has no record
    pub recorded_at: DateTime<Utc>,
}

impl LeaderboardEntry {
    pub fn has_record(&self) -> bool {
        self.latest_score_id.is_some()
    }

    /// Points earned in `category`; extras use the capped value.
    pub fn category_score(&self, category: ChallengeCategory) -> Decimal {
        match category {
            ChallengeCategory::Physical => self.physical_score,
            ChallengeCategory::Mental => self.mental_score,
            ChallengeCategory::Extra => self.extra_score_final,
        }
    }
}
