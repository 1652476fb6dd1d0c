use scoring::ScoringError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnapshotError>;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Validation error: {0}")]
    Validation(String),
}
