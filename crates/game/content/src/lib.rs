//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Enemy catalog (data-driven via RON)
//! - Resource catalog (data-driven via RON)
//! - Quest board (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in session state.
//! [`defaults`] carries the built-in content used when no data directory is configured.

pub mod defaults;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use defaults::{default_catalog, default_enemies, default_quests, default_resources};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, QuestLoader};
