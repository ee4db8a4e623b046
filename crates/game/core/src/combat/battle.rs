//! Single-round battle resolution.
//!
//! A battle round is one player action followed, where applicable, by the
//! enemy's response. Hit points may overshoot below zero; termination checks
//! use `<= 0` and the overshoot is reported as-is.

use std::str::FromStr;

use crate::combat::damage::{effective_damage, final_damage, roll_random_factor};
use crate::config::GameConfig;
use crate::env::{EnemyTemplate, RandomSource};
use crate::error::SessionError;

/// Player intent for one battle round.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleAction {
    Attack,
    Defend,
    Flee,
}

impl BattleAction {
    /// Parse an action token, reporting unrecognized input as [`SessionError::UnknownAction`].
    pub fn parse(token: &str) -> Result<Self, SessionError> {
        Self::from_str(token.trim()).map_err(|_| SessionError::UnknownAction(token.to_owned()))
    }
}

/// Fighting stats of one side of a battle.
///
/// Copied out of a persistent record when a battle starts; the battle owns its
/// copy until it ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub hp: i32,
    pub max_hp: i32,
    pub attack: u32,
    pub defense: u32,
}

impl Combatant {
    pub const fn new(hp: i32, max_hp: i32, attack: u32, defense: u32) -> Self {
        Self {
            hp,
            max_hp,
            attack,
            defense,
        }
    }
}

impl EnemyTemplate {
    /// Fresh combatant at full health.
    pub fn combatant(&self) -> Combatant {
        Combatant::new(self.base_hp, self.base_hp, self.attack, self.defense)
    }

    pub fn reward(&self) -> BattleReward {
        BattleReward {
            gold: self.gold_reward,
            exp: self.exp_reward,
        }
    }
}

/// Current hit points of both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleHp {
    pub player: i32,
    pub enemy: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReward {
    pub gold: u32,
    pub exp: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// Both sides still standing.
    Ongoing,
    Won(BattleReward),
    Lost,
    Fled,
}

impl RoundOutcome {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub action: BattleAction,
    /// Damage the player dealt to the enemy.
    pub damage_dealt: Option<i32>,
    /// Damage the enemy dealt to the player.
    pub damage_taken: Option<i32>,
    pub hp: BattleHp,
    pub outcome: RoundOutcome,
}

/// Snapshot of a running battle, shown when the player asks for something else
/// while the fight is still open.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStatus {
    pub enemy_name: String,
    pub player_hp: i32,
    pub enemy_hp: i32,
    pub remaining_minutes: i64,
}

/// Resolve one player action against `enemy`, updating `hp` in place.
///
/// - `Attack`: the player hits; if the enemy survives it hits back at full strength.
/// - `Defend`: no player hit; the enemy hits for half damage (floored).
/// - `Flee`: succeeds with `config.flee_chance`; on failure the enemy hits at full strength.
pub fn resolve_round(
    player: &Combatant,
    enemy: &EnemyTemplate,
    hp: &mut BattleHp,
    action: BattleAction,
    config: &GameConfig,
    rng: &mut (impl RandomSource + ?Sized),
) -> RoundReport {
    let mut report = RoundReport {
        action,
        damage_dealt: None,
        damage_taken: None,
        hp: *hp,
        outcome: RoundOutcome::Ongoing,
    };

    match action {
        BattleAction::Attack => {
            let dealt = strike(player.attack, enemy.defense, config, rng);
            hp.enemy = hp.enemy.saturating_sub(dealt);
            report.damage_dealt = Some(dealt);
            if hp.enemy <= 0 {
                report.outcome = RoundOutcome::Won(enemy.reward());
            } else {
                let taken = strike(enemy.attack, player.defense, config, rng);
                hp.player = hp.player.saturating_sub(taken);
                report.damage_taken = Some(taken);
            }
        }
        BattleAction::Defend => {
            let taken = strike(enemy.attack, player.defense, config, rng) / 2;
            hp.player = hp.player.saturating_sub(taken);
            report.damage_taken = Some(taken);
        }
        BattleAction::Flee => {
            if rng.chance(config.flee_chance) {
                report.outcome = RoundOutcome::Fled;
            } else {
                let taken = strike(enemy.attack, player.defense, config, rng);
                hp.player = hp.player.saturating_sub(taken);
                report.damage_taken = Some(taken);
            }
        }
    }

    if report.outcome == RoundOutcome::Ongoing && hp.player <= 0 {
        report.outcome = RoundOutcome::Lost;
    }
    report.hp = *hp;
    report
}

fn strike(
    attack: u32,
    defense: u32,
    config: &GameConfig,
    rng: &mut (impl RandomSource + ?Sized),
) -> i32 {
    let random_factor =
        roll_random_factor(rng, effective_damage(attack, defense), config.damage_variance);
    final_damage(attack, defense, random_factor)
}
