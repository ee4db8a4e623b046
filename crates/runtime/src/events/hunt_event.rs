use serde::{Deserialize, Serialize};

use hunt_core::{BattleReward, PlayerId, QuestId, RestDuration};

use crate::api::RestCompletion;

/// How a battle session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    Won(BattleReward),
    Lost,
    Fled,
    /// Nobody acted before the deadline; the fight was abandoned.
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HuntEvent {
    BattleStarted {
        player: PlayerId,
        enemy: String,
    },
    BattleEnded {
        player: PlayerId,
        enemy: String,
        result: BattleResult,
    },
    TrackLeadFound {
        player: PlayerId,
        tracks: usize,
    },
    RestStarted {
        player: PlayerId,
        duration: RestDuration,
    },
    RestCompleted {
        player: PlayerId,
        completion: RestCompletion,
    },
    QuestAccepted {
        player: PlayerId,
        quest: QuestId,
    },
}

impl HuntEvent {
    pub fn player(&self) -> PlayerId {
        match self {
            Self::BattleStarted { player, .. }
            | Self::BattleEnded { player, .. }
            | Self::TrackLeadFound { player, .. }
            | Self::RestStarted { player, .. }
            | Self::RestCompleted { player, .. }
            | Self::QuestAccepted { player, .. } => *player,
        }
    }
}
