use chrono::{DateTime, Duration, Utc};

use hunt_core::{BattleHp, BattleStatus, Combatant, EnemyTemplate, PlayerId};

use super::minutes_until;

/// One open fight between a player and a single enemy.
///
/// The player's stats are copied from their record when the battle starts and
/// are not re-read until it ends.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleSession {
    pub player_id: PlayerId,
    pub enemy: EnemyTemplate,
    pub player: Combatant,
    pub hp: BattleHp,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl BattleSession {
    pub fn new(
        player_id: PlayerId,
        enemy: EnemyTemplate,
        player: Combatant,
        now: DateTime<Utc>,
        timeout: Duration,
    ) -> Self {
        let hp = BattleHp {
            player: player.hp,
            enemy: enemy.base_hp,
        };
        Self {
            player_id,
            enemy,
            player,
            hp,
            started_at: now,
            expires_at: now + timeout,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn remaining_minutes(&self, now: DateTime<Utc>) -> i64 {
        minutes_until(self.expires_at, now)
    }

    pub fn status(&self, now: DateTime<Utc>) -> BattleStatus {
        BattleStatus {
            enemy_name: self.enemy.name.clone(),
            player_hp: self.hp.player,
            enemy_hp: self.hp.enemy,
            remaining_minutes: self.remaining_minutes(now),
        }
    }
}
