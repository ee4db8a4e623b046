//! Game configuration loader.

use std::path::Path;

use hunt_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults. A `damage_variance` that does not fit
    /// in hit points is rejected.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if i32::try_from(config.damage_variance).is_err() {
            anyhow::bail!(
                "damage_variance {} is above {}",
                config.damage_variance,
                i32::MAX
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "damage_variance = 3\nflee_chance = 0.25").expect("write");

        let config = ConfigLoader::load(file.path()).expect("load");
        assert_eq!(config.damage_variance, 3);
        assert_eq!(config.flee_chance, 0.25);
        assert_eq!(config.battle_timeout_secs, GameConfig::DEFAULT_BATTLE_TIMEOUT_SECS);
    }

    #[test]
    fn rejects_oversized_variance() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "damage_variance = 3000000000").expect("write");

        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("damage_variance"));
    }
}
