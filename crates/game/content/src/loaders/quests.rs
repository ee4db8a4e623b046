//! Quest board loader.

use std::collections::HashSet;
use std::path::Path;

use hunt_core::QuestDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Quest board structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestBoardData {
    pub quests: Vec<QuestDefinition>,
}

/// Loader for the quest board from RON files.
pub struct QuestLoader;

impl QuestLoader {
    /// Load quest definitions, rejecting duplicate ids.
    pub fn load(path: &Path) -> LoadResult<Vec<QuestDefinition>> {
        let content = read_file(path)?;
        let board: QuestBoardData = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quest board RON: {}", e))?;

        let mut seen = HashSet::new();
        for quest in &board.quests {
            if !seen.insert(quest.id) {
                anyhow::bail!("Duplicate quest id {}", quest.id);
            }
        }

        Ok(board.quests)
    }
}
