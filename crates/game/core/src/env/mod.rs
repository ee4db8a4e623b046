//! Traits describing read-only world data and injected randomness.
//!
//! Catalogs expose the enemy and resource templates exploration rolls against.
//! They are owned by an external collaborator (database table or static data
//! file); the rules only ever read them.
mod catalog;
mod rng;

pub use catalog::{CatalogOracle, EnemyTemplate, ResourceTemplate, StaticCatalog};
pub use rng::{RandSource, RandomSource, ScriptedRolls};
