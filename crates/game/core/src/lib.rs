//! Deterministic combat and exploration rules shared across the hunt workspace.
//!
//! `hunt-core` defines the canonical rules (damage model, battle rounds,
//! encounter rolls, rest recovery) as pure functions over plain data. Nothing in
//! this crate performs I/O or reads a clock: randomness arrives through
//! [`RandomSource`] and timestamps are supplied by the caller, so the runtime
//! crate can drive the rules deterministically in tests.
pub mod combat;
pub mod config;
pub mod encounter;
pub mod env;
pub mod error;
pub mod player;
pub mod quest;
pub mod rest;

pub use combat::{
    BattleAction, BattleHp, BattleReward, BattleStatus, Combatant, FightLog, RoundOutcome,
    RoundReport, Striker, effective_damage, final_damage, resolve_round, simulate_fight,
};
pub use config::GameConfig;
pub use encounter::{EncounterRoll, FoundResource, PlayerSighting, TrackCandidate, roll_encounter};
pub use env::{
    CatalogOracle, EnemyTemplate, RandSource, RandomSource, ResourceTemplate, ScriptedRolls,
    StaticCatalog,
};
pub use error::{ErrorSeverity, GameError, SessionError};
pub use player::{PlayerId, PlayerRecord};
pub use quest::{QuestBoard, QuestDefinition, QuestId, QuestKind, QuestOracle, QuestReward};
pub use rest::{RestDuration, RestGain, compute_rest_gain};
