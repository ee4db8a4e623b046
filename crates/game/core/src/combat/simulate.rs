//! Auto-battle simulation for balance checks.

use crate::combat::battle::Combatant;
use crate::combat::damage::final_damage;

/// Hard stop for fights where neither side can make progress.
const ROUND_LIMIT: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Striker {
    Player,
    Enemy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FightLog {
    /// Every hit in order, with the damage it dealt.
    pub hits: Vec<(Striker, i32)>,
    pub player_won: bool,
}

/// Fight to the end with the player striking first and the same perturbation on every hit.
///
/// A fight that hits the round limit counts as a loss for the player.
pub fn simulate_fight(player: &Combatant, enemy: &Combatant, random_factor: i32) -> FightLog {
    let mut log = FightLog::default();
    let mut player_hp = player.hp;
    let mut enemy_hp = enemy.hp;

    for _ in 0..ROUND_LIMIT {
        let dealt = final_damage(player.attack, enemy.defense, random_factor);
        enemy_hp = enemy_hp.saturating_sub(dealt);
        log.hits.push((Striker::Player, dealt));
        if enemy_hp <= 0 {
            log.player_won = true;
            return log;
        }

        let taken = final_damage(enemy.attack, player.defense, random_factor);
        player_hp = player_hp.saturating_sub(taken);
        log.hits.push((Striker::Enemy, taken));
        if player_hp <= 0 {
            return log;
        }
    }

    log
}
