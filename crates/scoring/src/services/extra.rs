use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Challenge, ExtraScore, ExtraScoringConfig, ExtraStatus};

/// Scores extra-challenge statuses against a fixed challenge list and point table.
pub struct ExtraScorer<'a> {
    challenges: HashMap<&'a str, &'a Challenge>,
    config: &'a ExtraScoringConfig,
}

impl<'a> ExtraScorer<'a> {
    pub fn new(challenges: &'a [Challenge], config: &'a ExtraScoringConfig) -> Self {
        let mut index = HashMap::with_capacity(challenges.len());
        for challenge in challenges {
            // first definition of a duplicated id wins
            index.entry(challenge.id.as_str()).or_insert(challenge);
        }

        Self {
            challenges: index,
            config,
        }
    }

    /// Sums each status's points and caps the total.
    ///
    /// Statuses for unknown or non-extra challenges are skipped and left out
    /// of the breakdown. An extra challenge without a kind contributes zero.
    pub fn score(&self, statuses: &BTreeMap<String, ExtraStatus>) -> ExtraScore {
        let mut breakdown = BTreeMap::new();

        for (challenge_id, status) in statuses {
            let Some(challenge) = self.challenges.get(challenge_id.as_str()) else {
                debug!(%challenge_id, "Skipping status for unknown challenge");
                continue;
            };
            if !challenge.is_extra() {
                debug!(
                    %challenge_id,
                    category = %challenge.category,
                    "Skipping status for non-extra challenge"
                );
                continue;
            }

            let points = challenge
                .extra_kind
                .map(|kind| self.config.points.points(kind, *status))
                .unwrap_or(Decimal::ZERO);
            breakdown.insert(challenge_id.clone(), points);
        }

        let raw: Decimal = breakdown.values().copied().sum();

        ExtraScore {
            raw,
            capped: cap(raw, self.config),
            breakdown,
        }
    }
}

pub fn score_extras(
    statuses: &BTreeMap<String, ExtraStatus>,
    challenges: &[Challenge],
    config: &ExtraScoringConfig,
) -> ExtraScore {
    ExtraScorer::new(challenges, config).score(statuses)
}

/// Clamps into `[cap_min, cap_max]` without panicking on an inverted range.
fn cap(raw: Decimal, config: &ExtraScoringConfig) -> Decimal {
    raw.max(config.cap_min).min(config.cap_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChallengeCategory, ExtraKind, ScoringConfig};

    fn extra(id: &str, kind: Option<ExtraKind>) -> Challenge {
        Challenge {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            category: ChallengeCategory::Extra,
            extra_kind: kind,
        }
    }

    fn capped_config() -> ExtraScoringConfig {
        let mut config = ScoringConfig::default().extras;
        config.cap_min = Decimal::from(-10);
        config.cap_max = Decimal::from(30);
        config
    }

    fn statuses(entries: &[(&str, ExtraStatus)]) -> BTreeMap<String, ExtraStatus> {
        entries
            .iter()
            .map(|(id, status)| (id.to_string(), *status))
            .collect()
    }

    #[test]
    fn test_sum_within_caps_is_unchanged() {
        let challenges = vec![
            extra("e1", Some(ExtraKind::Optional)),
            extra("e2", Some(ExtraKind::Mandatory)),
        ];
        let score = score_extras(
            &statuses(&[("e1", ExtraStatus::Fair), ("e2", ExtraStatus::Fair)]),
            &challenges,
            &capped_config(),
        );

        assert_eq!(score.raw, Decimal::from(18));
        assert_eq!(score.capped, Decimal::from(18));
        assert_eq!(score.breakdown["e1"], Decimal::from(8));
        assert_eq!(score.breakdown["e2"], Decimal::from(10));
    }

    #[test]
    fn test_three_mandatory_not_done_is_capped_at_minimum() {
        let challenges = vec![
            extra("m1", Some(ExtraKind::Mandatory)),
            extra("m2", Some(ExtraKind::Mandatory)),
            extra("m3", Some(ExtraKind::Mandatory)),
        ];
        let score = score_extras(
            &statuses(&[
                ("m1", ExtraStatus::NotDone),
                ("m2", ExtraStatus::NotDone),
                ("m3", ExtraStatus::NotDone),
            ]),
            &challenges,
            &capped_config(),
        );

        assert_eq!(score.raw, Decimal::from(-30));
        assert_eq!(score.capped, Decimal::from(-10));
        // the cap applies to the total only
        assert!(score.breakdown.values().all(|p| *p == Decimal::from(-10)));
    }

    #[test]
    fn test_sum_above_cap_is_capped_at_maximum() {
        let challenges = vec![
            extra("m1", Some(ExtraKind::Mandatory)),
            extra("m2", Some(ExtraKind::Mandatory)),
        ];
        let score = score_extras(
            &statuses(&[("m1", ExtraStatus::Excellent), ("m2", ExtraStatus::Excellent)]),
            &challenges,
            &capped_config(),
        );
        assert_eq!(score.raw, Decimal::from(40));
        assert_eq!(score.capped, Decimal::from(30));
    }

    #[test]
    fn test_unknown_and_non_extra_challenges_are_skipped() {
        let mut physical = extra("run", None);
        physical.category = ChallengeCategory::Physical;
        let challenges = vec![extra("e1", Some(ExtraKind::Optional)), physical];

        let score = score_extras(
            &statuses(&[
                ("e1", ExtraStatus::Excellent),
                ("run", ExtraStatus::Excellent),
                ("ghost", ExtraStatus::Excellent),
            ]),
            &challenges,
            &capped_config(),
        );

        assert_eq!(score.raw, Decimal::from(15));
        assert_eq!(score.breakdown.len(), 1);
        assert!(!score.breakdown.contains_key("run"));
        assert!(!score.breakdown.contains_key("ghost"));
    }

    #[test]
    fn test_extra_without_kind_contributes_zero() {
        let challenges = vec![extra("e1", None)];
        let score = score_extras(
            &statuses(&[("e1", ExtraStatus::Excellent)]),
            &challenges,
            &capped_config(),
        );
        assert_eq!(score.raw, Decimal::ZERO);
        assert_eq!(score.breakdown["e1"], Decimal::ZERO);
    }

    #[test]
    fn test_no_statuses_scores_zero_clamped() {
        let mut config = capped_config();
        config.cap_min = Decimal::from(5);
        let score = score_extras(&BTreeMap::new(), &[], &config);
        assert_eq!(score.raw, Decimal::ZERO);
        assert_eq!(score.capped, Decimal::from(5));
        assert!(score.breakdown.is_empty());
    }

    #[test]
    fn test_duplicate_challenge_id_uses_first_definition() {
        let challenges = vec![
            extra("e1", Some(ExtraKind::Mandatory)),
            extra("e1", Some(ExtraKind::Optional)),
        ];
        let score = score_extras(
            &statuses(&[("e1", ExtraStatus::Excellent)]),
            &challenges,
            &capped_config(),
        );
        assert_eq!(score.raw, Decimal::from(20));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn status_strategy() -> impl Strategy<Value = ExtraStatus> {
            prop_oneof![
                Just(ExtraStatus::Excellent),
                Just(ExtraStatus::Fair),
                Just(ExtraStatus::NotDone),
            ]
        }

        proptest! {
            #[test]
            fn capped_is_clamped_raw(
                picks in proptest::collection::vec((any::<bool>(), status_strategy()), 0..12),
                cap_min in -50i64..0,
                cap_max in 0i64..50,
            ) {
                let challenges: Vec<Challenge> = picks
                    .iter()
                    .enumerate()
                    .map(|(i, (mandatory, _))| {
                        let kind = if *mandatory {
                            ExtraKind::Mandatory
                        } else {
                            ExtraKind::Optional
                        };
                        extra(&format!("e{i}"), Some(kind))
                    })
                    .collect();
                let statuses: BTreeMap<String, ExtraStatus> = picks
                    .iter()
                    .enumerate()
                    .map(|(i, (_, status))| (format!("e{i}"), *status))
                    .collect();
                let mut config = capped_config();
                config.cap_min = Decimal::from(cap_min);
                config.cap_max = Decimal::from(cap_max);

                let score = score_extras(&statuses, &challenges, &config);

                prop_assert_eq!(score.raw, score.breakdown.values().copied().sum::<Decimal>());
                prop_assert_eq!(score.capped, score.raw.clamp(config.cap_min, config.cap_max));
                if score.raw >= config.cap_min && score.raw <= config.cap_max {
                    prop_assert_eq!(score.capped, score.raw);
                }
            }
        }
    }
}
