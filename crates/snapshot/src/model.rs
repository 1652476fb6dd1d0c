use scoring::models::{
    Challenge, LeaderboardEntry, Participant, PartialScoringConfig, ScoreRecord, ScoringConfig,
};
use scoring::LeaderboardBuilder;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Everything needed to compute a leaderboard, as exported from the
/// competition's data store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetitionSnapshot {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub scores: Vec<ScoreRecord>,
    #[serde(default, alias = "challenges")]
    pub games: Vec<Challenge>,
    /// Stored scoring settings, possibly incomplete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<PartialScoringConfig>,
}

impl CompetitionSnapshot {
    /// Stored settings merged over `defaults`, validated.
    pub fn scoring_config(&self, defaults: &ScoringConfig) -> Result<ScoringConfig> {
        let config = match &self.settings {
            Some(settings) => settings.resolve(defaults),
            None => *defaults,
        };
        Ok(config.accept()?)
    }

    pub fn leaderboard(&self, config: &ScoringConfig) -> Result<Vec<LeaderboardEntry>> {
        let builder = LeaderboardBuilder::new(config)?;
        Ok(builder.build(&self.participants, &self.scores, &self.games))
    }
}
