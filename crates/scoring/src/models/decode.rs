//! Tolerant decoders for values that arrive from the document store.
//!
//! Stored documents are written by forms that evolved over time, so the
//! status and kind fields can hold values this crate does not know. Those
//! decode to "absent" instead of failing the whole document.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserialize, Deserializer, IgnoredAny};
use tracing::warn;

use super::score_record::ExtraStatus;

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Known(T),
    Unknown(IgnoredAny),
}

/// Decodes an optional value, mapping anything unrecognized to `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Known(value)) => Some(value),
        Some(Lenient::Unknown(_)) | None => None,
    })
}

/// Decodes a challenge-id to status map, dropping entries whose status is not recognized.
pub(crate) fn known_statuses<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, ExtraStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Lenient<ExtraStatus>>> = Option::deserialize(deserializer)?;

    let mut statuses = BTreeMap::new();
    for (challenge_id, status) in raw.unwrap_or_default() {
        match status {
            Lenient::Known(status) => {
                statuses.insert(challenge_id, status);
            }
            Lenient::Unknown(_) => {
                warn!(%challenge_id, "Dropping unrecognized extra challenge status");
            }
        }
    }

    Ok(statuses)
}

pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
}

/// Parses an ISO-8601 instant. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
