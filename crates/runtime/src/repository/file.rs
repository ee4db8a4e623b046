//! File-based PlayerRepository implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use hunt_core::{PlayerId, PlayerRecord};

use super::{PlayerRepository, RepositoryError, Result};

/// Stores each player as `player_{id}.json` under one directory.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-save leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct FilePlayerRepository {
    base_dir: PathBuf,
}

impl FilePlayerRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn player_path(&self, id: PlayerId) -> PathBuf {
        self.base_dir.join(format!("player_{}.json", id))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl PlayerRepository for FilePlayerRepository {
    async fn load(&self, id: PlayerId) -> Result<Option<PlayerRecord>> {
        let path = self.player_path(id);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(RepositoryError::Io(err)),
        };
        let record: PlayerRecord = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded player[{}] from {}", id, path.display());
        Ok(Some(record))
    }

    async fn save(&self, record: &PlayerRecord) -> Result<()> {
        let path = self.player_path(record.id);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(record)?;
        fs::write(&temp_path, bytes).await?;
        fs::rename(&temp_path, &path).await?;

        tracing::debug!("Saved player[{}] to {}", record.id, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn records_survive_a_new_repository_instance() {
        let dir = TempDir::new().expect("tempdir");
        let mut record = PlayerRecord::new(PlayerId(42), "Olena");
        record.accepted_quests.push(1);

        FilePlayerRepository::new(dir.path())
            .expect("repo")
            .save(&record)
            .await
            .expect("save");

        let reopened = FilePlayerRepository::new(dir.path()).expect("reopen");
        assert_eq!(reopened.load(PlayerId(42)).await.expect("load"), Some(record));
        assert_eq!(reopened.load(PlayerId(43)).await.expect("load"), None);
    }

    #[tokio::test]
    async fn corrupted_record_is_a_json_error() {
        let dir = TempDir::new().expect("tempdir");
        let repo = FilePlayerRepository::new(dir.path()).expect("repo");
        std::fs::write(dir.path().join("player_1.json"), b"{not json").expect("write");

        let err = repo.load(PlayerId(1)).await.expect_err("corrupt");
        assert!(matches!(err, RepositoryError::Json(_)));
    }
}
