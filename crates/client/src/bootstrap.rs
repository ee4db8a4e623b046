//! Runtime assembly from client configuration.

use std::sync::Arc;

use anyhow::{Context, Result};

use hunt_content::ContentFactory;
use hunt_core::QuestBoard;
use hunt_runtime::{FilePlayerRepository, HuntRuntime, OracleManager};

use crate::config::ClientConfig;

/// Load content, open player storage, and build the runtime.
pub fn build_runtime(config: &ClientConfig) -> Result<HuntRuntime> {
    let factory = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    tracing::debug!("Loading content from {}", factory.data_dir().display());

    let game_config = factory.load_config().context("loading config.toml")?;
    let catalog = factory.load_catalog().context("loading catalog")?;
    let quests = factory.load_quests().context("loading quests")?;
    let oracles = OracleManager::new(Arc::new(catalog), Arc::new(QuestBoard::new(quests)));

    let players = FilePlayerRepository::new(&config.data_dir)
        .with_context(|| format!("opening player store {}", config.data_dir.display()))?;

    let mut builder = HuntRuntime::builder()
        .game_config(game_config)
        .oracles(oracles)
        .players(Arc::new(players));
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    Ok(builder.build()?)
}
