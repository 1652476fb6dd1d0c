use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(String),

    #[error("Scoring configuration rejected: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
