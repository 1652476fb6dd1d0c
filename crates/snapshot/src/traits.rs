use crate::{CompetitionSnapshot, Result};

/// Somewhere a competition snapshot can be (re)loaded from.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load(&self) -> Result<CompetitionSnapshot>;

    /// Human readable location, used in logs.
    fn describe(&self) -> String;
}
