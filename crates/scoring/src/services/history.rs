use validator::Validate;

use super::extra::ExtraScorer;
use super::leaderboard::score_record;
use crate::error::{Result, ScoringError};
use crate::models::{Challenge, HistoryPoint, Participant, ScoreRecord, ScoringConfig};

/// Every record of one participant, scored independently and ordered oldest first.
///
/// Records with the same `recorded_at` keep their input order.
pub fn participant_history(
    participants: &[Participant],
    participant_id: &str,
    records: &[ScoreRecord],
    challenges: &[Challenge],
    config: &ScoringConfig,
) -> Result<Vec<HistoryPoint>> {
    config.validate()?;

    if !participants.iter().any(|p| p.id == participant_id) {
        return Err(ScoringError::ParticipantNotFound(participant_id.to_string()));
    }

    let extras = ExtraScorer::new(challenges, &config.extras);
    let mut own: Vec<&ScoreRecord> = records
        .iter()
        .filter(|record| record.participant_id == participant_id)
        .collect();
    own.sort_by_key(|record| record.recorded_at);

    Ok(own
        .into_iter()
        .map(|record| {
            let score = score_record(record, config, &extras);
            HistoryPoint {
                score_id: record.id.clone(),
                recorded_at: record.recorded_at,
                physical_score: score.physical,
                mental_score: score.mental,
                extra_score: score.extra.capped,
                total_score: score.total,
            }
        })
        .collect())
}
