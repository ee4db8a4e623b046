//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use hunt_core::PlayerId;

/// Settings for one local chat session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory with `config.toml` and the RON catalogs. Bundled content when unset.
    pub content_dir: Option<PathBuf>,
    /// Where player records are stored.
    pub data_dir: PathBuf,
    pub player_id: PlayerId,
    pub player_name: String,
    /// Fixed seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            data_dir: PathBuf::from("hunt-data"),
            player_id: PlayerId(1),
            player_name: "Hunter".to_string(),
            seed: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HUNT_CONTENT_DIR` - content data directory (default: bundled)
    /// - `HUNT_DATA_DIR` - player record directory (default: `hunt-data`)
    /// - `HUNT_PLAYER_ID` - numeric player id (default: 1)
    /// - `HUNT_PLAYER_NAME` - name for a new character (default: `Hunter`)
    /// - `HUNT_SEED` - RNG seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("HUNT_CONTENT_DIR") {
            config.content_dir = Some(dir);
        }
        if let Some(dir) = read_env::<PathBuf>("HUNT_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(id) = read_env::<i64>("HUNT_PLAYER_ID") {
            config.player_id = PlayerId(id);
        }
        let name = read_env::<String>("HUNT_PLAYER_NAME");
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            config.player_name = name.trim().to_string();
        }
        config.seed = read_env::<u64>("HUNT_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
