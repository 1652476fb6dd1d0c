use std::sync::Arc;

use scoring::models::{LeaderboardEntry, ScoringConfig};
use snapshot::{CompetitionSnapshot, SnapshotSource};
use tokio::sync::RwLock;

use crate::error::{ApiResult, WebError};

/// Shared handler state: the loaded snapshot and the active scoring settings.
///
/// Nothing derived is cached; every read recomputes from these two.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn SnapshotSource>,
    snapshot: Arc<RwLock<CompetitionSnapshot>>,
    settings: Arc<RwLock<ScoringConfig>>,
    defaults: ScoringConfig,
}

impl AppState {
    /// Loads the snapshot once and resolves its stored settings over `defaults`.
    pub async fn load(source: Arc<dyn SnapshotSource>, defaults: ScoringConfig) -> ApiResult<Self> {
        let snapshot = source.load().await?;
        let settings = snapshot.scoring_config(&defaults)?;

        Ok(Self {
            source,
            snapshot: Arc::new(RwLock::new(snapshot)),
            settings: Arc::new(RwLock::new(settings)),
            defaults,
        })
    }

    pub fn defaults(&self) -> &ScoringConfig {
        &self.defaults
    }

    pub async fn settings(&self) -> ScoringConfig {
        *self.settings.read().await
    }

    pub async fn replace_settings(&self, settings: ScoringConfig) {
        *self.settings.write().await = settings;
    }

    /// Runs `f` against the current snapshot and settings.
    pub async fn with_snapshot<T>(
        &self,
        f: impl FnOnce(&CompetitionSnapshot, &ScoringConfig) -> T,
    ) -> T {
        let snapshot = self.snapshot.read().await;
        let settings = self.settings.read().await;
        f(&snapshot, &settings)
    }

    pub async fn leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>> {
        let entries = self
            .with_snapshot(|snapshot, settings| snapshot.leaderboard(settings))
            .await?;
        Ok(entries)
    }

    /// Re-reads the snapshot from its source. The snapshot's stored settings
    /// replace the active ones; nothing changes if loading fails.
    ///
    /// Invalid stored settings are a bad snapshot, not a bad request.
    pub async fn reload(&self) -> ApiResult<CompetitionSnapshot> {
        let fresh = self.source.load().await?;
        let settings = fresh
            .scoring_config(&self.defaults)
            .map_err(WebError::Snapshot)?;

        let mut snapshot = self.snapshot.write().await;
        let mut active = self.settings.write().await;
        *snapshot = fresh;
        *active = settings;

        tracing::info!(source = %self.source.describe(), "Snapshot reloaded");
        Ok(snapshot.clone())
    }
}
