use tracing::info;

use hunt_core::{PlayerId, PlayerRecord};

use crate::api::Result;
use crate::runtime::HuntRuntime;

impl HuntRuntime {
    /// Create a level-1 character for `player_id` unless one already exists.
    ///
    /// Returns the stored record either way; an existing name is kept.
    pub async fn register_player(
        &self,
        player_id: PlayerId,
        name: &str,
    ) -> Result<PlayerRecord> {
        let _sessions = self.sessions.lock(player_id).await;

        if let Some(existing) = self.players.load(player_id).await? {
            return Ok(existing);
        }
        let record = PlayerRecord::new(player_id, name);
        self.players.save(&record).await?;

        info!(player = %player_id, name, "player registered");
        Ok(record)
    }

    pub async fn profile(&self, player_id: PlayerId) -> Result<PlayerRecord> {
        Ok(self.players.require(player_id).await?)
    }
}
