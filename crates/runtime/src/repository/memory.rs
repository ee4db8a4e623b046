//! In-memory PlayerRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use hunt_core::{PlayerId, PlayerRecord};

use super::{PlayerRepository, RepositoryError, Result};

#[derive(Debug, Default)]
pub struct InMemoryPlayerRepo {
    players: RwLock<HashMap<PlayerId, PlayerRecord>>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated repository.
    pub fn with_players(players: impl IntoIterator<Item = PlayerRecord>) -> Self {
        Self {
            players: RwLock::new(players.into_iter().map(|p| (p.id, p)).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.players.read().map(|players| players.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepo {
    async fn load(&self, id: PlayerId) -> Result<Option<PlayerRecord>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.get(&id).cloned())
    }

    async fn save(&self, record: &PlayerRecord) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(record.id, record.clone());
        Ok(())
    }
}
