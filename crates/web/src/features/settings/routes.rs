use axum::{Router, routing::get};

use super::handlers::{get_default_settings, get_settings, update_settings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings).put(update_settings))
        .route("/defaults", get(get_default_settings))
}
