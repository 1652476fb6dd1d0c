pub mod extra;
pub mod history;
pub mod latest;
pub mod leaderboard;
pub mod sorting;
pub mod statistics;
pub mod threshold;

pub use extra::{score_extras, ExtraScorer};
pub use history::participant_history;
pub use latest::{latest_by_participant, select_latest};
pub use leaderboard::{build_leaderboard, score_record, LeaderboardBuilder, RecordScore};
pub use sorting::sort_entries;
pub use statistics::{category_standings, distribution, summarize};
pub use threshold::{round_half_up, score_time, threshold_score};
