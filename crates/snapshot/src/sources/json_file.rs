use std::path::PathBuf;

use tracing::info;

use crate::{CompetitionSnapshot, Result, SnapshotSource};

/// Reads the snapshot from a JSON document on disk on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl SnapshotSource for JsonFileSource {
    async fn load(&self) -> Result<CompetitionSnapshot> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let snapshot: CompetitionSnapshot = serde_json::from_str(&raw)?;

        info!(
            path = %self.path.display(),
            participants = snapshot.participants.len(),
            scores = snapshot.scores.len(),
            games = snapshot.games.len(),
            "Loaded snapshot"
        );

        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnapshotError;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_reads_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"participants": [{{"id": "p1", "name": "Ana", "year": 3}}], "scores": [], "games": []}}"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let snapshot = source.load().await.unwrap();

        assert_eq!(snapshot.participants.len(), 1);
        assert!(snapshot.settings.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));
        assert!(matches!(source.load().await, Err(SnapshotError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let source = JsonFileSource::new(file.path());
        assert!(matches!(source.load().await, Err(SnapshotError::Parse(_))));
    }
}
