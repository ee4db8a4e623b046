//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic given its inputs; randomness is injected
//! through [`RandomSource`](crate::env::RandomSource).
//!
//! # Core Functions
//!
//! - `effective_damage`: defense-adjusted damage with diminishing returns
//! - `final_damage`: effective damage plus an explicit perturbation
//! - `resolve_round`: one player action and the enemy's response
//! - `simulate_fight`: auto-battle used for balance checks

pub mod battle;
pub mod damage;
pub mod simulate;

pub use battle::{
    BattleAction, BattleHp, BattleReward, BattleStatus, Combatant, RoundOutcome, RoundReport,
    resolve_round,
};
pub use damage::{effective_damage, final_damage, roll_random_factor};
pub use simulate::{FightLog, Striker, simulate_fight};
