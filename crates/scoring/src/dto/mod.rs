pub mod common;
pub mod leaderboard;

pub use common::{PaginatedResponse, PaginationMeta, PaginationParams};
pub use leaderboard::{
    CategoryQuery, LeaderboardQuery, LeaderboardSummaryResponse, SortColumn, SortDirection,
    DEFAULT_CATEGORY_LIMIT,
};
