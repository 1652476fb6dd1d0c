use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::ScoringError;
use serde_json::json;
use snapshot::SnapshotError;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Scoring(ScoringError),
    Snapshot(SnapshotError),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoring(e) => write!(f, "Scoring error: {}", e),
            Self::Snapshot(e) => write!(f, "Snapshot error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl std::error::Error for WebError {}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Scoring(ScoringError::ParticipantNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Scoring(ScoringError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Scoring(ScoringError::InvalidConfig(_)) => StatusCode::BAD_REQUEST,
            Self::Snapshot(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            Self::Scoring(ScoringError::ParticipantNotFound(id)) => {
                json!({
                    "error": format!("Participant '{}' not found", id)
                })
            }
            Self::Scoring(ScoringError::Validation(errors)) => {
                json!({
                    "error": "Validation failed",
                    "details": validation_details(errors)
                })
            }
            Self::Scoring(ScoringError::InvalidConfig(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Snapshot(e) => {
                tracing::error!("Snapshot error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Flattens nested errors into `path.to.field: message` lines.
fn validation_details(errors: &ValidationErrors) -> Vec<String> {
    let mut details = Vec::new();
    collect_details(errors, "", &mut details);
    details
}

fn collect_details(errors: &ValidationErrors, prefix: &str, details: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            validator::ValidationErrorsKind::Field(field_errors) => {
                for e in field_errors {
                    details.push(format!(
                        "{}: {}",
                        path,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    ));
                }
            }
            validator::ValidationErrorsKind::Struct(nested) => {
                collect_details(nested, &path, details);
            }
            validator::ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_details(nested, &format!("{}[{}]", path, index), details);
                }
            }
        }
    }
}

impl From<ScoringError> for WebError {
    fn from(error: ScoringError) -> Self {
        Self::Scoring(error)
    }
}

impl From<SnapshotError> for WebError {
    fn from(error: SnapshotError) -> Self {
        match error {
            SnapshotError::Scoring(e) => Self::Scoring(e),
            other => Self::Snapshot(other),
        }
    }
}

pub type ApiResult<T> = Result<T, WebError>;
