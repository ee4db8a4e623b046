//! Quest board definitions.
//!
//! Quests are static catalog entries. A player can accept any quest whose level
//! requirement they meet; accepted quest ids live on the player record.

use crate::error::SessionError;
use crate::player::PlayerRecord;

pub type QuestId = u32;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum QuestKind {
    Gathering,
    Combat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestReward {
    pub gold: u32,
    pub exp: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestDefinition {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub kind: QuestKind,
    pub min_level: u32,
    pub reward: QuestReward,
}

impl QuestDefinition {
    pub fn is_available_to(&self, player: &PlayerRecord) -> bool {
        player.level >= self.min_level
    }

    /// Check whether `player` may take this quest.
    pub fn check_acceptance(&self, player: &PlayerRecord) -> Result<(), SessionError> {
        if player.accepted_quests.contains(&self.id) {
            return Err(SessionError::QuestAlreadyAccepted(self.id));
        }
        if !self.is_available_to(player) {
            return Err(SessionError::QuestLevelTooLow {
                required: self.min_level,
                actual: player.level,
            });
        }
        Ok(())
    }
}

/// Read-only access to the quest board.
pub trait QuestOracle: Send + Sync {
    fn quests(&self) -> &[QuestDefinition];

    fn quest(&self, id: QuestId) -> Option<&QuestDefinition> {
        self.quests().iter().find(|quest| quest.id == id)
    }
}

/// Quest board backed by a plain list, in display order.
#[derive(Clone, Debug, Default)]
pub struct QuestBoard {
    quests: Vec<QuestDefinition>,
}

impl QuestBoard {
    pub fn new(quests: Vec<QuestDefinition>) -> Self {
        Self { quests }
    }
}

impl QuestOracle for QuestBoard {
    fn quests(&self) -> &[QuestDefinition] {
        &self.quests
    }
}
