//! Enemy and resource catalog loader.

use std::path::Path;

use hunt_core::{EnemyTemplate, ResourceTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy catalog structure for RON files.
///
/// Entry order is the encounter priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Resource catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCatalog {
    pub resources: Vec<ResourceTemplate>,
}

/// Loader for exploration catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load enemy templates from a RON file containing an [`EnemyCatalog`].
    ///
    /// Rejects spawn chances outside `[0, 1]`, non-positive base HP, and attack
    /// or defense values that do not fit in hit points.
    pub fn load_enemies(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        let catalog: EnemyCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        for enemy in &catalog.enemies {
            check_chance(&enemy.name, enemy.spawn_chance)?;
            if enemy.base_hp <= 0 {
                anyhow::bail!("Enemy '{}' has non-positive base HP", enemy.name);
            }
            check_stat(&enemy.name, "attack", enemy.attack)?;
            check_stat(&enemy.name, "defense", enemy.defense)?;
        }

        Ok(catalog.enemies)
    }

    /// Load resource templates from a RON file containing a [`ResourceCatalog`].
    ///
    /// Rejects spawn chances outside `[0, 1]` and inverted amount ranges.
    pub fn load_resources(path: &Path) -> LoadResult<Vec<ResourceTemplate>> {
        let content = read_file(path)?;
        let catalog: ResourceCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse resource catalog RON: {}", e))?;

        for resource in &catalog.resources {
            check_chance(&resource.name, resource.spawn_chance)?;
            if resource.min_amount > resource.max_amount {
                anyhow::bail!(
                    "Resource '{}' has min_amount {} above max_amount {}",
                    resource.name,
                    resource.min_amount,
                    resource.max_amount
                );
            }
        }

        Ok(catalog.resources)
    }
}

fn check_stat(name: &str, stat: &str, value: u32) -> LoadResult<()> {
    if i32::try_from(value).is_err() {
        anyhow::bail!("'{}' has {} {} above {}", name, stat, value, i32::MAX);
    }
    Ok(())
}

fn check_chance(name: &str, chance: f64) -> LoadResult<()> {
    if !(0.0..=1.0).contains(&chance) {
        anyhow::bail!("'{}' has spawn_chance {} outside [0, 1]", name, chance);
    }
    Ok(())
}
