use axum::{Router, routing::get};

use super::handlers::get_history;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/:participant_id/history", get(get_history))
}
