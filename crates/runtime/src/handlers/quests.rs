use tracing::info;

use hunt_core::{PlayerId, QuestDefinition, QuestId, SessionError};

use crate::api::{QuestListing, Result};
use crate::events::HuntEvent;
use crate::runtime::HuntRuntime;

impl HuntRuntime {
    /// The quest board as seen by one player.
    pub async fn list_quests(&self, player_id: PlayerId) -> Result<Vec<QuestListing>> {
        let record = self.players.require(player_id).await?;
        Ok(self
            .oracles
            .quests()
            .quests()
            .iter()
            .map(|quest| QuestListing {
                available: quest.is_available_to(&record),
                accepted: record.accepted_quests.contains(&quest.id),
                quest: quest.clone(),
            })
            .collect())
    }

    /// Take a quest from the board.
    pub async fn accept_quest(
        &self,
        player_id: PlayerId,
        quest_id: QuestId,
    ) -> Result<QuestDefinition> {
        let _sessions = self.sessions.lock(player_id).await;

        let quest = self
            .oracles
            .quests()
            .quest(quest_id)
            .cloned()
            .ok_or(SessionError::UnknownQuest(quest_id))?;

        let mut record = self.players.require(player_id).await?;
        quest.check_acceptance(&record)?;
        record.accepted_quests.push(quest.id);
        self.players.save(&record).await?;

        info!(player = %player_id, quest = quest.id, title = %quest.title, "quest accepted");
        self.events.publish(HuntEvent::QuestAccepted {
            player: player_id,
            quest: quest.id,
        });
        Ok(quest)
    }
}
