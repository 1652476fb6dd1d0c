use std::collections::HashMap;

use crate::models::ScoreRecord;

/// Returns the most recently recorded score of `participant_id`.
///
/// On an exact `recorded_at` tie the record that appears first in `records`
/// is kept.
pub fn select_latest<'a>(
    records: &'a [ScoreRecord],
    participant_id: &str,
) -> Option<&'a ScoreRecord> {
    records
        .iter()
        .filter(|record| record.participant_id == participant_id)
        .fold(None, |latest, candidate| Some(newer(latest, candidate)))
}

/// Latest record for every participant that has one, same tie rule as [`select_latest`].
pub fn latest_by_participant(records: &[ScoreRecord]) -> HashMap<&str, &ScoreRecord> {
    let mut latest: HashMap<&str, &ScoreRecord> = HashMap::new();

    for record in records {
        latest
            .entry(record.participant_id.as_str())
            .and_modify(|current| *current = newer(Some(*current), record))
            .or_insert(record);
    }

    latest
}

fn newer<'a>(current: Option<&'a ScoreRecord>, candidate: &'a ScoreRecord) -> &'a ScoreRecord {
    match current {
        Some(current) if current.recorded_at >= candidate.recorded_at => current,
        _ => candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;

    fn record(id: &str, participant_id: &str, hour: u32) -> ScoreRecord {
        ScoreRecord {
            id: id.to_string(),
            participant_id: participant_id.to_string(),
            physical_time: Decimal::ZERO,
            mental_time: Decimal::ZERO,
            extra_statuses: BTreeMap::new(),
            game_times: BTreeMap::new(),
            recorded_at: Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_selects_maximum_timestamp_regardless_of_order() {
        let records = vec![
            record("a", "p1", 9),
            record("b", "p1", 15),
            record("c", "p1", 11),
        ];
        assert_eq!(select_latest(&records, "p1").unwrap().id, "b");
    }

    #[test]
    fn test_compares_instants_not_strings() {
        let records: Vec<ScoreRecord> = serde_json::from_str(
            r#"[
                {"id":"late","participantId":"p1","physicalTime":1,"mentalTime":1,"recordedAt":"2024-05-01T09:00:00-05:00"},
                {"id":"early","participantId":"p1","physicalTime":1,"mentalTime":1,"recordedAt":"2024-05-01T12:00:00Z"}
            ]"#,
        )
        .unwrap();
        // 09:00-05:00 is 14:00Z, later than 12:00Z even though it sorts first as text
        assert_eq!(select_latest(&records, "p1").unwrap().id, "late");
    }

    #[test]
    fn test_ignores_other_participants() {
        let records = vec![record("a", "p1", 9), record("b", "p2", 15)];
        assert_eq!(select_latest(&records, "p1").unwrap().id, "a");
    }

    #[test]
    fn test_no_records_is_none() {
        let records = vec![record("a", "p2", 9)];
        assert!(select_latest(&records, "p1").is_none());
        assert!(select_latest(&[], "p1").is_none());
    }

    #[test]
    fn test_tie_keeps_first_encountered() {
        let records = vec![record("first", "p1", 10), record("second", "p1", 10)];
        assert_eq!(select_latest(&records, "p1").unwrap().id, "first");
        // stable across calls
        assert_eq!(select_latest(&records, "p1").unwrap().id, "first");
    }

    #[test]
    fn test_latest_by_participant_matches_select_latest() {
        let records = vec![
            record("a", "p1", 9),
            record("b", "p2", 8),
            record("c", "p1", 12),
            record("d", "p2", 8),
            record("e", "p3", 1),
        ];
        let latest = latest_by_participant(&records);

        assert_eq!(latest.len(), 3);
        for participant_id in ["p1", "p2", "p3"] {
            assert_eq!(
                latest[participant_id].id,
                select_latest(&records, participant_id).unwrap().id
            );
        }
        assert_eq!(latest["p2"].id, "b");
    }
}
