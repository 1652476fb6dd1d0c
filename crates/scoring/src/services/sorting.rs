use std::cmp::Ordering;

use crate::dto::{SortColumn, SortDirection};
use crate::models::LeaderboardEntry;

/// Reorders a computed leaderboard for display. Ranks are left as computed.
pub fn sort_entries(
    entries: &mut [LeaderboardEntry],
    column: SortColumn,
    direction: SortDirection,
) {
    entries.sort_by(|a, b| {
        let ordering = compare(a, b, column);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &LeaderboardEntry, b: &LeaderboardEntry, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Rank => a.rank.cmp(&b.rank),
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortColumn::Year => a.year.cmp(&b.year),
        SortColumn::Physical => a.physical_score.cmp(&b.physical_score),
        SortColumn::Mental => a.mental_score.cmp(&b.mental_score),
        SortColumn::Extra => a.extra_score_final.cmp(&b.extra_score_final),
        SortColumn::Total => a.total_score.cmp(&b.total_score),
    }
}
