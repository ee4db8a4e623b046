/// Tunable parameters of the combat and exploration rules.
///
/// `Default` reproduces the constants the chat bot shipped with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seconds a battle stays open before it times out.
    pub battle_timeout_secs: i64,
    /// Per-enemy probability of spotting its tracks when no enemy appeared.
    pub enemy_track_chance: f64,
    /// Per-player probability of spotting another player's last-known track.
    pub player_track_chance: f64,
    /// Probability that a flee attempt succeeds.
    pub flee_chance: f64,
    /// Half-width of the random damage perturbation; 0 keeps every hit deterministic.
    pub damage_variance: u32,
    /// Rest length used when the requested duration cannot be parsed.
    pub default_rest_minutes: u32,
}

impl GameConfig {
    pub const DEFAULT_BATTLE_TIMEOUT_SECS: i64 = 5 * 60;
    pub const DEFAULT_ENEMY_TRACK_CHANCE: f64 = 0.4;
    pub const DEFAULT_PLAYER_TRACK_CHANCE: f64 = 0.3;
    pub const DEFAULT_FLEE_CHANCE: f64 = 0.5;
    pub const DEFAULT_REST_MINUTES: u32 = 60;

    pub fn new() -> Self {
        Self {
            battle_timeout_secs: Self::DEFAULT_BATTLE_TIMEOUT_SECS,
            enemy_track_chance: Self::DEFAULT_ENEMY_TRACK_CHANCE,
            player_track_chance: Self::DEFAULT_PLAYER_TRACK_CHANCE,
            flee_chance: Self::DEFAULT_FLEE_CHANCE,
            damage_variance: 0,
            default_rest_minutes: Self::DEFAULT_REST_MINUTES,
        }
    }

    pub fn with_damage_variance(mut self, variance: u32) -> Self {
        self.damage_variance = variance;
        self
    }

    pub fn with_battle_timeout_secs(mut self, secs: i64) -> Self {
        self.battle_timeout_secs = secs;
        self
    }

    /// Battle lifetime as a chrono duration.
    pub fn battle_timeout(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.battle_timeout_secs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
