pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, ScoringError};
pub use models::{
    Challenge, ChallengeCategory, ExtraKind, ExtraStatus, LeaderboardEntry, Participant,
    ScoreRecord, ScoringConfig,
};
pub use services::leaderboard::LeaderboardBuilder;
