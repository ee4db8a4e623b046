//! Values returned by the player-facing operations.
//!
//! Conflicts the player can simply read ("you are already fighting a Wolf")
//! are success variants here rather than errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hunt_core::{
    BattleReward, BattleStatus, EnemyTemplate, FoundResource, PlayerSighting, QuestDefinition,
    RestDuration, RoundReport, TrackCandidate,
};

/// Everything one exploration turned up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationResult {
    pub found_resources: Vec<FoundResource>,
    pub enemy: Option<EnemyTemplate>,
    /// Empty whenever `enemy` is set.
    pub tracks: Vec<TrackCandidate>,
    /// The battle that `enemy` started.
    pub battle: Option<BattleStatus>,
}

impl ExplorationResult {
    /// Nothing found, nobody met, no tracks.
    pub fn is_all_clear(&self) -> bool {
        self.found_resources.is_empty() && self.enemy.is_none() && self.tracks.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExploreOutcome {
    Explored(ExplorationResult),
    /// A live battle blocks exploring; nothing was rolled.
    AlreadyInBattle(BattleStatus),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Both sides still standing.
    InBattle(RoundReport),
    Won {
        report: RoundReport,
        reward: BattleReward,
    },
    Lost(RoundReport),
    Fled(RoundReport),
    /// The battle expired before this action; the action was not applied.
    TimedOut { enemy_name: String },
}

impl BattleOutcome {
    pub fn report(&self) -> Option<&RoundReport> {
        match self {
            Self::InBattle(report)
            | Self::Won { report, .. }
            | Self::Lost(report)
            | Self::Fled(report) => Some(report),
            Self::TimedOut { .. } => None,
        }
    }

    /// Whether the battle session is gone after this outcome.
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::InBattle(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestStart {
    Started {
        duration: RestDuration,
        ends_at: DateTime<Utc>,
    },
    /// An unfinished rest exists; it was left untouched.
    AlreadyResting { remaining_minutes: i64 },
}

/// Stats before and after a completed rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestCompletion {
    pub duration: RestDuration,
    pub hp_before: i32,
    pub hp_after: i32,
    pub mp_before: i32,
    pub mp_after: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestStatus {
    NotResting,
    Resting { remaining_minutes: i64 },
    /// The rest finished; recovery has been applied and the session removed.
    Completed(RestCompletion),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackResolution {
    /// Followed an enemy's tracks into a new battle.
    BattleStarted(BattleStatus),
    PlayerSpotted(PlayerSighting),
    /// A live battle blocks following; the lead was kept.
    AlreadyInBattle(BattleStatus),
}

/// One quest board entry as seen by a particular player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestListing {
    pub quest: QuestDefinition,
    pub available: bool,
    pub accepted: bool,
}
