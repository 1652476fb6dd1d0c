use scoring::models::{PartialScoringConfig, ScoringConfig};

use crate::error::ApiResult;
use crate::state::AppState;

/// Resolves a stored settings document over the defaults and activates it.
///
/// The active settings are left untouched when validation fails.
pub async fn update_settings(
    state: &AppState,
    settings: PartialScoringConfig,
) -> ApiResult<ScoringConfig> {
    let config = settings.resolve(state.defaults()).accept()?;
    state.replace_settings(config).await;

    tracing::info!("Scoring settings updated");
    Ok(config)
}
