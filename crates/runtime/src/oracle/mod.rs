//! Runtime access to static game content.
//!
//! The catalog and quest board are immutable once the runtime is built; the
//! [`OracleManager`] simply bundles them behind shared pointers so handlers can
//! borrow them without caring where they were loaded from.

use std::sync::Arc;

use hunt_core::{CatalogOracle, QuestBoard, QuestOracle};

#[derive(Clone)]
pub struct OracleManager {
    pub(crate) catalog: Arc<dyn CatalogOracle>,
    pub(crate) quests: Arc<dyn QuestOracle>,
}

impl OracleManager {
    pub fn new(catalog: Arc<dyn CatalogOracle>, quests: Arc<dyn QuestOracle>) -> Self {
        Self { catalog, quests }
    }

    /// Oracles over the content compiled into `hunt-content`.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(hunt_content::default_catalog()),
            Arc::new(QuestBoard::new(hunt_content::default_quests())),
        )
    }

    pub fn catalog(&self) -> &dyn CatalogOracle {
        self.catalog.as_ref()
    }

    pub fn quests(&self) -> &dyn QuestOracle {
        self.quests.as_ref()
    }
}

impl std::fmt::Debug for OracleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleManager")
            .field("enemies", &self.catalog.enemies().len())
            .field("resources", &self.catalog.resources().len())
            .field("quests", &self.quests.quests().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_oracles_expose_default_content() {
        let oracles = OracleManager::builtin();
        assert_eq!(oracles.catalog().enemies()[0].name, "Wolf");
        assert!(oracles.quests().quest(1).is_some());
    }
}
