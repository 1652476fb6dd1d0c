use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use validator::Validate;

use super::extra::ExtraScorer;
use super::latest::latest_by_participant;
use super::threshold::threshold_score;
use crate::error::Result;
use crate::models::{
    Challenge, ExtraScore, LeaderboardEntry, Participant, ScoreRecord, ScoringConfig,
};

/// Category points for a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScore {
    pub physical: Decimal,
    pub mental: Decimal,
    pub extra: ExtraScore,
    pub total: Decimal,
}

/// Scores every category of `record`. The total always comes from this one record.
pub fn score_record(
    record: &ScoreRecord,
    config: &ScoringConfig,
    extras: &ExtraScorer<'_>,
) -> RecordScore {
    let physical = threshold_score(record.physical_time, &config.physical);
    let mental = threshold_score(record.mental_time, &config.mental);
    let extra = extras.score(&record.extra_statuses);
    let total = physical + mental + extra.capped;

    RecordScore {
        physical,
        mental,
        extra,
        total,
    }
}

/// Turns participants and their score records into a ranked leaderboard.
///
/// The config is validated once in [`LeaderboardBuilder::new`]; building
/// never fails afterwards. Missing data degrades to zero scores.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardBuilder<'a> {
    config: &'a ScoringConfig,
}

impl<'a> LeaderboardBuilder<'a> {
    pub fn new(config: &'a ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Entries sorted by total descending, ranked `1..=n`.
    ///
    /// Equal totals keep the order of `participants` and still get distinct
    /// consecutive ranks.
    pub fn build(
        &self,
        participants: &[Participant],
        records: &[ScoreRecord],
        challenges: &[Challenge],
    ) -> Vec<LeaderboardEntry> {
        let latest = latest_by_participant(records);
        let extras = ExtraScorer::new(challenges, &self.config.extras);

        let mut entries: Vec<LeaderboardEntry> = participants
            .iter()
            .map(|participant| match latest.get(participant.id.as_str()) {
                Some(record) => {
                    let score = score_record(record, self.config, &extras);
                    scored_entry(participant, record, score)
                }
                None => placeholder_entry(participant),
            })
            .collect();

        entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = (index + 1) as u32;
        }

        debug!(
            participants = participants.len(),
            records = records.len(),
            scored = latest.len(),
            "Leaderboard computed"
        );

        entries
    }
}

/// Validates `config` and builds the leaderboard in one call.
pub fn build_leaderboard(
    participants: &[Participant],
    records: &[ScoreRecord],
    challenges: &[Challenge],
    config: &ScoringConfig,
) -> Result<Vec<LeaderboardEntry>> {
    Ok(LeaderboardBuilder::new(config)?.build(participants, records, challenges))
}

fn scored_entry(
    participant: &Participant,
    record: &ScoreRecord,
    score: RecordScore,
) -> LeaderboardEntry {
    LeaderboardEntry {
        rank: 0,
        participant_id: participant.id.clone(),
        name: participant.name.clone(),
        year: participant.year,
        photo_url: participant.photo_url.clone(),
        physical_score: score.physical,
        mental_score: score.mental,
        extra_score_raw: score.extra.raw,
        extra_score_final: score.extra.capped,
        total_score: score.total,
        physical_time: record.physical_time,
        mental_time: record.mental_time,
        extra_statuses: record.extra_statuses.clone(),
        extra_breakdown: score.extra.breakdown,
        game_times: record.game_times.clone(),
        latest_score_id: Some(record.id.clone()),
        recorded_at: record.recorded_at,
    }
}

fn placeholder_entry(participant: &Participant) -> LeaderboardEntry {
    LeaderboardEntry {
        rank: 0,
        participant_id: participant.id.clone(),
        name: participant.name.clone(),
        year: participant.year,
        photo_url: participant.photo_url.clone(),
        physical_score: Decimal::ZERO,
        mental_score: Decimal::ZERO,
        extra_score_raw: Decimal::ZERO,
        extra_score_final: Decimal::ZERO,
        total_score: Decimal::ZERO,
        physical_time: Decimal::ZERO,
        mental_time: Decimal::ZERO,
        extra_statuses: Default::default(),
        extra_breakdown: Default::default(),
        game_times: Default::default(),
        latest_score_id: None,
        // unix epoch
        recorded_at: DateTime::<Utc>::default(),
    }
}
