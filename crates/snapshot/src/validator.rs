use std::collections::{HashMap, HashSet};

use scoring::models::{Challenge, ScoringConfig};
use tracing::warn;
use validator::{Validate, ValidationErrors};

use crate::{CompetitionSnapshot, Result, SnapshotError};

pub struct SnapshotValidator;

impl SnapshotValidator {
    /// Stored settings are checked after resolving them over `defaults`.
    pub fn validate(
        snapshot: &CompetitionSnapshot,
        defaults: &ScoringConfig,
    ) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        let mut participant_ids = HashSet::new();
        for participant in &snapshot.participants {
            if !participant_ids.insert(participant.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate participant id: '{}'", participant.id));
            }
            if let Err(errors) = participant.validate() {
                for detail in field_messages(&errors) {
                    report.errors.push(format!(
                        "Participant '{}' is invalid: {}",
                        participant.id, detail
                    ));
                }
            }
        }

        let mut challenges: HashMap<&str, &Challenge> = HashMap::new();
        for challenge in &snapshot.games {
            if challenges.contains_key(challenge.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate game id: '{}'", challenge.id));
                continue;
            }
            if challenge.is_extra() && challenge.extra_kind.is_none() {
                report.warnings.push(format!(
                    "Extra game '{}' has no extra type and will score zero",
                    challenge.id
                ));
            }
            challenges.insert(challenge.id.as_str(), challenge);
        }

        let mut score_ids = HashSet::new();
        let mut scored_participants = HashSet::new();
        for record in &snapshot.scores {
            if !score_ids.insert(record.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate score id: '{}'", record.id));
            }
            if record.physical_time.is_sign_negative() && !record.physical_time.is_zero() {
                report
                    .errors
                    .push(format!("Score '{}' has negative physical time", record.id));
            }
            if record.mental_time.is_sign_negative() && !record.mental_time.is_zero() {
                report
                    .errors
                    .push(format!("Score '{}' has negative mental time", record.id));
            }

            if participant_ids.contains(record.participant_id.as_str()) {
                scored_participants.insert(record.participant_id.as_str());
            } else {
                report.warnings.push(format!(
                    "Score '{}' belongs to unknown participant '{}'",
                    record.id, record.participant_id
                ));
            }

            for challenge_id in record.extra_statuses.keys() {
                match challenges.get(challenge_id.as_str()) {
                    None => report.warnings.push(format!(
                        "Score '{}' has a status for unknown game '{}'",
                        record.id, challenge_id
                    )),
                    Some(challenge) if !challenge.is_extra() => report.warnings.push(format!(
                        "Score '{}' has a status for {} game '{}'",
                        record.id, challenge.category, challenge_id
                    )),
                    Some(_) => {}
                }
            }
        }

        for participant in &snapshot.participants {
            if !scored_participants.contains(participant.id.as_str()) {
                report
                    .warnings
                    .push(format!("Participant '{}' has no scores", participant.id));
            }
        }

        if let Some(settings) = &snapshot.settings {
            if let Err(errors) = settings.resolve(defaults).validate() {
                report
                    .errors
                    .push(format!("Stored settings are invalid: {errors}"));
            }
        }

        if !report.errors.is_empty() {
            Err(SnapshotError::Validation(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

/// `field: message` lines, sorted so reports read the same on every run.
fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect();
    messages.sort();
    messages
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
