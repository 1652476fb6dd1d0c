use axum::{Router, routing::get};

use super::handlers::{get_category_standings, get_leaderboard, get_summary};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_leaderboard))
        .route("/summary", get(get_summary))
        .route("/categories/:category", get(get_category_standings))
}
