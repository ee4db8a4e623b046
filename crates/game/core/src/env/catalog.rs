//! Enemy and resource templates and the oracle interface that serves them.
//!
//! Catalog order is significant: enemy selection is first-match-in-order, so
//! catalogs are exposed as ordered slices, never as sets or maps.

/// Immutable catalog entry describing an enemy that exploration can turn up.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub base_hp: i32,
    pub attack: u32,
    pub defense: u32,
    pub exp_reward: u32,
    pub gold_reward: u32,
    /// Probability in `[0, 1]` that this enemy is encountered on a roll.
    pub spawn_chance: f64,
    /// Text shown when the player spots this enemy's tracks.
    pub track_description: String,
}

/// Immutable catalog entry describing a gatherable resource.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceTemplate {
    pub name: String,
    /// Probability in `[0, 1]` that this resource is found on a roll.
    pub spawn_chance: f64,
    pub min_amount: u32,
    pub max_amount: u32,
}

/// Read-only access to the exploration catalog.
pub trait CatalogOracle: Send + Sync {
    /// Enemy templates in priority order.
    fn enemies(&self) -> &[EnemyTemplate];

    /// Resource templates in roll order.
    fn resources(&self) -> &[ResourceTemplate];

    /// Find an enemy template by name.
    fn enemy(&self, name: &str) -> Option<&EnemyTemplate> {
        self.enemies().iter().find(|enemy| enemy.name == name)
    }
}

/// Catalog held entirely in memory.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticCatalog {
    pub enemies: Vec<EnemyTemplate>,
    pub resources: Vec<ResourceTemplate>,
}

impl StaticCatalog {
    pub fn new(enemies: Vec<EnemyTemplate>, resources: Vec<ResourceTemplate>) -> Self {
        Self { enemies, resources }
    }
}

impl CatalogOracle for StaticCatalog {
    fn enemies(&self) -> &[EnemyTemplate] {
        &self.enemies
    }

    fn resources(&self) -> &[ResourceTemplate] {
        &self.resources
    }
}
