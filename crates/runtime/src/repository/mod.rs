//! Player record persistence.
//!
//! The runtime never owns player records: it reads them when a session starts
//! and writes the consequences back when the session ends.

mod error;
mod file;
mod memory;

use async_trait::async_trait;

use hunt_core::{PlayerId, PlayerRecord};

pub use error::{RepositoryError, Result};
pub use file::FilePlayerRepository;
pub use memory::InMemoryPlayerRepo;

/// Store of persistent player characters.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn load(&self, id: PlayerId) -> Result<Option<PlayerRecord>>;

    /// Insert or replace the record for `record.id`.
    async fn save(&self, record: &PlayerRecord) -> Result<()>;

    async fn exists(&self, id: PlayerId) -> Result<bool> {
        Ok(self.load(id).await?.is_some())
    }

    /// Load a record that must exist.
    async fn require(&self, id: PlayerId) -> Result<PlayerRecord> {
        self.load(id)
            .await?
            .ok_or(RepositoryError::PlayerNotFound(id))
    }
}
