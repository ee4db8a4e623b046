//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into catalog data
//! served by runtime oracles.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod quests;

pub use catalog::{CatalogLoader, EnemyCatalog, ResourceCatalog};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use quests::{QuestBoardData, QuestLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
