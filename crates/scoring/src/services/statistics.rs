use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    CategoryStanding, ChallengeCategory, LeaderboardEntry, LeaderboardSummary, PointsDistribution,
};

/// Averages include participants without a record, who count as zero.
pub fn summarize(entries: &[LeaderboardEntry]) -> LeaderboardSummary {
    if entries.is_empty() {
        return LeaderboardSummary::default();
    }

    let count = Decimal::from(entries.len());
    let distribution = distribution(entries);
    let total: Decimal = entries.iter().map(|e| e.total_score).sum();
    let max_total = entries
        .iter()
        .map(|e| e.total_score)
        .max()
        .unwrap_or(Decimal::ZERO);

    LeaderboardSummary {
        total_participants: entries.len(),
        scored_participants: entries.iter().filter(|e| e.has_record()).count(),
        average_physical: one_decimal(distribution.physical / count),
        average_mental: one_decimal(distribution.mental / count),
        average_extra: one_decimal(distribution.extra / count),
        average_total: one_decimal(total / count),
        max_total,
    }
}

fn one_decimal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

pub fn distribution(entries: &[LeaderboardEntry]) -> PointsDistribution {
    entries
        .iter()
        .fold(PointsDistribution::default(), |mut acc, entry| {
            acc.physical += entry.physical_score;
            acc.mental += entry.mental_score;
            acc.extra += entry.extra_score_final;
            acc
        })
}

/// Top `limit` entries by a single category's points. Ties keep leaderboard order.
pub fn category_standings(
    entries: &[LeaderboardEntry],
    category: ChallengeCategory,
    limit: usize,
) -> Vec<CategoryStanding> {
    let mut standings: Vec<CategoryStanding> = entries
        .iter()
        .map(|entry| CategoryStanding {
            participant_id: entry.participant_id.clone(),
            name: entry.name.clone(),
            score: entry.category_score(category),
        })
        .collect();

    standings.sort_by(|a, b| b.score.cmp(&a.score));
    standings.truncate(limit);
    standings
}
