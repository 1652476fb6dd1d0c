use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::challenge::ExtraKind;
use super::score_record::ExtraStatus;
use crate::error::{Result, ScoringError};

/// Time-to-points mapping for a timed category.
///
/// Finishing at or under `threshold1` earns `max_points`, at or over
/// `threshold2` earns `min_points`, and times in between are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_threshold_order"))]
pub struct ThresholdConfig {
    #[serde(alias = "t1")]
    #[validate(custom(function = "non_negative"))]
    pub threshold1: Decimal,

    #[serde(alias = "t2")]
    #[validate(custom(function = "non_negative"))]
    pub threshold2: Decimal,

    #[validate(custom(function = "non_negative"))]
    pub max_points: Decimal,

    #[validate(custom(function = "non_negative"))]
    pub min_points: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusPoints {
    #[serde(rename = "muy_bien", alias = "excellent")]
    pub excellent: Decimal,
    #[serde(rename = "regular", alias = "fair")]
    pub fair: Decimal,
    #[serde(rename = "no_hecho", alias = "notDone", alias = "not_done")]
    pub not_done: Decimal,
}

impl StatusPoints {
    pub fn for_status(&self, status: ExtraStatus) -> Decimal {
        match status {
            ExtraStatus::Excellent => self.excellent,
            ExtraStatus::Fair => self.fair,
            ExtraStatus::NotDone => self.not_done,
        }
    }
}

/// Points per (kind, status) pair. Values may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtraPointTable {
    #[serde(rename = "opcional", alias = "optional")]
    pub optional: StatusPoints,
    #[serde(rename = "obligatoria", alias = "mandatory")]
    pub mandatory: StatusPoints,
}

impl ExtraPointTable {
    pub fn points(&self, kind: ExtraKind, status: ExtraStatus) -> Decimal {
        match kind {
            ExtraKind::Optional => self.optional.for_status(status),
            ExtraKind::Mandatory => self.mandatory.for_status(status),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_cap_order"))]
pub struct ExtraScoringConfig {
    pub cap_min: Decimal,
    pub cap_max: Decimal,
    pub points: ExtraPointTable,
}

/// Complete scoring rules.
///
/// Every field is required when deserializing, so a structurally incomplete
/// document fails at parse time rather than inside the scorers. Use
/// [`PartialScoringConfig`] for stored documents that may lack fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScoringConfig {
    #[validate(nested)]
    pub physical: ThresholdConfig,
    #[validate(nested)]
    pub mental: ThresholdConfig,
    #[validate(nested)]
    pub extras: ExtraScoringConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            physical: ThresholdConfig {
                threshold1: Decimal::from(15),
                threshold2: Decimal::from(30),
                max_points: Decimal::from(100),
                min_points: Decimal::from(20),
            },
            mental: ThresholdConfig {
                threshold1: Decimal::from(10),
                threshold2: Decimal::from(25),
                max_points: Decimal::from(100),
                min_points: Decimal::from(20),
            },
            extras: ExtraScoringConfig {
                cap_min: Decimal::from(-20),
                cap_max: Decimal::from(50),
                points: ExtraPointTable {
                    optional: StatusPoints {
                        excellent: Decimal::from(15),
                        fair: Decimal::from(8),
                        not_done: Decimal::ZERO,
                    },
                    mandatory: StatusPoints {
                        excellent: Decimal::from(20),
                        fair: Decimal::from(10),
                        not_done: Decimal::from(-10),
                    },
                },
            },
        }
    }
}

impl ScoringConfig {
    /// Validates the invariants and hands the config back if they hold.
    pub fn accept(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Parses a complete config document and validates it.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ScoringError::InvalidConfig(e.to_string()))?;
        config.accept()
    }
}

fn non_negative(value: &Decimal) -> std::result::Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(rule_error("non_negative", "Value must be >= 0"));
    }
    Ok(())
}

fn validate_threshold_order(config: &ThresholdConfig) -> std::result::Result<(), ValidationError> {
    if config.threshold1 > config.threshold2 {
        return Err(rule_error(
            "threshold_order",
            "threshold1 must be <= threshold2",
        ));
    }
    Ok(())
}

fn validate_cap_order(config: &ExtraScoringConfig) -> std::result::Result<(), ValidationError> {
    if config.cap_min > config.cap_max {
        return Err(rule_error("cap_order", "capMin must be <= capMax"));
    }
    Ok(())
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialThresholdConfig {
    #[serde(alias = "t1")]
    pub threshold1: Option<Decimal>,
    #[serde(alias = "t2")]
    pub threshold2: Option<Decimal>,
    pub max_points: Option<Decimal>,
    pub min_points: Option<Decimal>,
}

impl PartialThresholdConfig {
    pub fn resolve(&self, defaults: &ThresholdConfig) -> ThresholdConfig {
        ThresholdConfig {
            threshold1: self.threshold1.unwrap_or(defaults.threshold1),
            threshold2: self.threshold2.unwrap_or(defaults.threshold2),
            max_points: self.max_points.unwrap_or(defaults.max_points),
            min_points: self.min_points.unwrap_or(defaults.min_points),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PartialStatusPoints {
    #[serde(rename = "muy_bien", alias = "excellent")]
    pub excellent: Option<Decimal>,
    #[serde(rename = "regular", alias = "fair")]
    pub fair: Option<Decimal>,
    #[serde(rename = "no_hecho", alias = "notDone", alias = "not_done")]
    pub not_done: Option<Decimal>,
}

impl PartialStatusPoints {
    pub fn resolve(&self, defaults: &StatusPoints) -> StatusPoints {
        StatusPoints {
            excellent: self.excellent.unwrap_or(defaults.excellent),
            fair: self.fair.unwrap_or(defaults.fair),
            not_done: self.not_done.unwrap_or(defaults.not_done),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PartialExtraPointTable {
    #[serde(rename = "opcional", alias = "optional")]
    pub optional: PartialStatusPoints,
    #[serde(rename = "obligatoria", alias = "mandatory")]
    pub mandatory: PartialStatusPoints,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialExtraScoringConfig {
    pub cap_min: Option<Decimal>,
    pub cap_max: Option<Decimal>,
    pub points: PartialExtraPointTable,
}

/// Stored settings document in which any leaf may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PartialScoringConfig {
    pub physical: PartialThresholdConfig,
    pub mental: PartialThresholdConfig,
    pub extras: PartialExtraScoringConfig,
}

impl PartialScoringConfig {
    /// Fills every missing leaf from `defaults`. The result is not validated.
    pub fn resolve(&self, defaults: &ScoringConfig) -> ScoringConfig {
        ScoringConfig {
            physical: self.physical.resolve(&defaults.physical),
            mental: self.mental.resolve(&defaults.mental),
            extras: ExtraScoringConfig {
                cap_min: self.extras.cap_min.unwrap_or(defaults.extras.cap_min),
                cap_max: self.extras.cap_max.unwrap_or(defaults.extras.cap_max),
                points: ExtraPointTable {
                    optional: self
                        .extras
                        .points
                        .optional
                        .resolve(&defaults.extras.points.optional),
                    mandatory: self
                        .extras
                        .points
                        .mandatory
                        .resolve(&defaults.extras.points.mandatory),
                },
            },
        }
    }
}
