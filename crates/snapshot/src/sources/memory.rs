use crate::{CompetitionSnapshot, Result, SnapshotSource};

/// Hands out clones of a snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    snapshot: CompetitionSnapshot,
}

impl InMemorySource {
    pub fn new(snapshot: CompetitionSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait::async_trait]
impl SnapshotSource for InMemorySource {
    async fn load(&self) -> Result<CompetitionSnapshot> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        "in-memory snapshot".to_string()
    }
}
