use axum::{Router, routing::post};

use super::handlers::reload_snapshot;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/snapshot/reload", post(reload_snapshot))
}
