mod decode;

pub mod challenge;
pub mod leaderboard;
pub mod participant;
pub mod score_record;
pub mod scoring_config;
pub mod statistics;

pub use challenge::{Challenge, ChallengeCategory, ExtraKind};
pub use decode::parse_timestamp;
pub use leaderboard::{ExtraScore, LeaderboardEntry};
pub use participant::Participant;
pub use score_record::{ExtraStatus, ScoreRecord};
pub use scoring_config::{
    ExtraPointTable, ExtraScoringConfig, PartialExtraPointTable, PartialExtraScoringConfig,
    PartialScoringConfig, PartialStatusPoints, PartialThresholdConfig, ScoringConfig,
    StatusPoints, ThresholdConfig,
};
pub use statistics::{CategoryStanding, HistoryPoint, LeaderboardSummary, PointsDistribution};
