//! Persistent player character data.
//!
//! The record is owned by the external player repository. The rules read it to
//! build a [`Combatant`] when a battle starts and apply rewards to it when a
//! battle or rest ends.

use core::fmt;

use crate::combat::{BattleReward, Combatant};
use crate::quest::QuestId;

/// Chat-platform user id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub i64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub level: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
    pub attack: u32,
    pub defense: u32,
    pub gold: u32,
    pub exp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accepted_quests: Vec<QuestId>,
}

impl PlayerRecord {
    pub const DEFAULT_MAX_HP: i32 = 100;
    pub const DEFAULT_MAX_MP: i32 = 50;
    pub const DEFAULT_ATTACK: u32 = 10;
    pub const DEFAULT_DEFENSE: u32 = 5;

    /// Fresh level-1 character.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level: 1,
            hp: Self::DEFAULT_MAX_HP,
            max_hp: Self::DEFAULT_MAX_HP,
            mp: Self::DEFAULT_MAX_MP,
            max_mp: Self::DEFAULT_MAX_MP,
            attack: Self::DEFAULT_ATTACK,
            defense: Self::DEFAULT_DEFENSE,
            gold: 0,
            exp: 0,
            accepted_quests: Vec::new(),
        }
    }

    pub fn with_combat_stats(mut self, hp: i32, attack: u32, defense: u32) -> Self {
        self.hp = hp;
        self.max_hp = self.max_hp.max(hp);
        self.attack = attack;
        self.defense = defense;
        self
    }

    /// Battle-ready copy of the character's current stats.
    pub fn combatant(&self) -> Combatant {
        Combatant::new(self.hp, self.max_hp, self.attack, self.defense)
    }

    pub fn is_exhausted(&self) -> bool {
        self.hp <= 0
    }

    /// Store the HP a battle ended with, clamped into `[0, max_hp]`.
    pub fn settle_hp(&mut self, hp: i32) {
        self.hp = hp.clamp(0, self.max_hp);
    }

    pub fn grant(&mut self, reward: BattleReward) {
        self.gold = self.gold.saturating_add(reward.gold);
        self.exp = self.exp.saturating_add(reward.exp);
    }
}
