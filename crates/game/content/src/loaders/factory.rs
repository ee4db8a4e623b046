//! Content factory for loading every catalog from a data directory.

use std::path::{Path, PathBuf};

use hunt_core::{GameConfig, QuestDefinition, StaticCatalog};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, QuestLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.ron
/// ├── resources.ron
/// └── quests.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the exploration catalog from `enemies.ron` and `resources.ron`.
    pub fn load_catalog(&self) -> LoadResult<StaticCatalog> {
        let enemies = CatalogLoader::load_enemies(&self.data_dir.join("enemies.ron"))?;
        let resources = CatalogLoader::load_resources(&self.data_dir.join("resources.ron"))?;
        Ok(StaticCatalog::new(enemies, resources))
    }

    /// Load the quest board from `quests.ron`.
    pub fn load_quests(&self) -> LoadResult<Vec<QuestDefinition>> {
        QuestLoader::load(&self.data_dir.join("quests.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
