use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::decode;

/// Judgment recorded for one extra challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ExtraStatus {
    #[serde(rename = "muy_bien", alias = "excellent")]
    Excellent,
    #[serde(rename = "regular", alias = "fair")]
    Fair,
    #[serde(rename = "no_hecho", alias = "not-done", alias = "not_done")]
    NotDone,
}

/// One submitted measurement for a participant.
///
/// A participant may have many of these; only the most recent one counts
/// towards the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: String,
    pub participant_id: String,

    /// Minutes spent on all physical challenges
    #[serde(alias = "tiempo_fisico")]
    pub physical_time: Decimal,

    /// Minutes spent on all mental challenges
    #[serde(alias = "tiempo_mental")]
    pub mental_time: Decimal,

    #[serde(
        default,
        alias = "extraGameDetailedStatuses",
        deserialize_with = "decode::known_statuses"
    )]
    pub extra_statuses: BTreeMap<String, ExtraStatus>,

    /// Per-challenge minutes, informational only
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub game_times: BTreeMap<String, Decimal>,

    #[serde(deserialize_with = "decode::timestamp")]
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stored_record() {
        let record: ScoreRecord = serde_json::from_str(
            r#"{
                "id": "s1",
                "participantId": "p1",
                "tiempo_fisico": 290,
                "tiempo_mental": 12.5,
                "extraGameDetailedStatuses": {"g1": "muy_bien", "g2": "no_hecho"},
                "gameTimes": {"g3": 4},
                "recordedAt": "2024-05-01T10:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.physical_time, Decimal::from(290));
        assert_eq!(record.mental_time, Decimal::new(125, 1));
        assert_eq!(record.extra_statuses.len(), 2);
        assert_eq!(record.extra_statuses["g1"], ExtraStatus::Excellent);
        assert_eq!(record.game_times["g3"], Decimal::from(4));
    }

    #[test]
    fn test_unknown_status_is_dropped() {
        let record: ScoreRecord = serde_json::from_str(
            r#"{
                "id": "s1",
                "participantId": "p1",
                "physicalTime": 10,
                "mentalTime": 10,
                "extraStatuses": {"g1": "perfecto", "g2": "fair", "g3": null},
                "recordedAt": "2024-05-01T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.extra_statuses.len(), 1);
        assert_eq!(record.extra_statuses["g2"], ExtraStatus::Fair);
    }

    #[test]
    fn test_missing_or_null_statuses_are_empty() {
        let missing: ScoreRecord = serde_json::from_str(
            r#"{"id":"s1","participantId":"p1","physicalTime":1,"mentalTime":1,"recordedAt":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        let null: ScoreRecord = serde_json::from_str(
            r#"{"id":"s2","participantId":"p1","physicalTime":1,"mentalTime":1,"extraStatuses":null,"recordedAt":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert!(missing.extra_statuses.is_empty());
        assert!(null.extra_statuses.is_empty());
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let result: Result<ScoreRecord, _> = serde_json::from_str(
            r#"{"id":"s1","participantId":"p1","physicalTime":1,"mentalTime":1,"recordedAt":"soon"}"#,
        );
        assert!(result.is_err());
    }
}
