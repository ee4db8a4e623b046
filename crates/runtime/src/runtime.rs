//! High-level runtime orchestrator.
//!
//! [`HuntRuntime`] owns the session registry and borrows everything else
//! (player storage, content, clock, randomness) through seams the builder
//! fills in. The player-facing operations live in [`crate::handlers`].

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast;

use hunt_core::{GameConfig, RandSource, RandomSource};

use crate::api::{Result, RuntimeError};
use crate::clock::{Clock, SystemClock};
use crate::events::{EventBus, HuntEvent, Topic};
use crate::oracle::OracleManager;
use crate::repository::PlayerRepository;
use crate::session::SessionRegistry;

/// Runtime configuration shared across the handlers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// Session runtime for every player of one chat deployment.
///
/// All operations take `&self`; share the runtime behind an `Arc` to serve
/// concurrent chats. Operations on the same player are serialized, operations
/// on different players run independently.
pub struct HuntRuntime {
    pub(crate) config: RuntimeConfig,
    pub(crate) oracles: OracleManager,
    pub(crate) players: Arc<dyn PlayerRepository>,
    pub(crate) sessions: SessionRegistry,
    pub(crate) clock: Arc<dyn Clock>,
    rng: Mutex<Box<dyn RandomSource>>,
    pub(crate) events: EventBus,
}

impl HuntRuntime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config.game_config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to one topic of hunt events
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<HuntEvent> {
        self.events.subscribe(topic)
    }

    /// Run `f` with exclusive use of the random source.
    ///
    /// Never hold the source across an await: `f` is synchronous.
    pub(crate) fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(rng.as_mut())
    }
}

impl std::fmt::Debug for HuntRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuntRuntime")
            .field("config", &self.config)
            .field("oracles", &self.oracles)
            .finish_non_exhaustive()
    }
}

/// Builder for [`HuntRuntime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    players: Option<Arc<dyn PlayerRepository>>,
    clock: Option<Arc<dyn Clock>>,
    rng: Option<Box<dyn RandomSource>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            players: None,
            clock: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the game rules configuration
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set required player repository
    pub fn players(mut self, players: Arc<dyn PlayerRepository>) -> Self {
        self.players = Some(players);
        self
    }

    /// Set the clock (default: wall clock)
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the random source (default: OS-seeded)
    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Seed the default random source for reproducible runs
    pub fn seed(self, seed: u64) -> Self {
        self.rng(RandSource::seeded(seed))
    }

    /// Build the runtime
    pub fn build(self) -> Result<HuntRuntime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let players = self.players.ok_or(RuntimeError::MissingRepository)?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(RandSource::from_entropy()));
        let events = EventBus::with_capacity(self.config.event_buffer_size);

        tracing::info!(
            enemies = oracles.catalog().enemies().len(),
            quests = oracles.quests().quests().len(),
            "hunt runtime ready"
        );

        Ok(HuntRuntime {
            config: self.config,
            oracles,
            players,
            sessions: SessionRegistry::new(),
            clock,
            rng: Mutex::new(rng),
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryPlayerRepo;

    #[test]
    fn build_requires_oracles_and_players() {
        let err = HuntRuntime::builder().build().expect_err("no oracles");
        assert!(matches!(err, RuntimeError::MissingOracles));

        let err = HuntRuntime::builder()
            .oracles(OracleManager::builtin())
            .build()
            .expect_err("no players");
        assert!(matches!(err, RuntimeError::MissingRepository));

        let runtime = HuntRuntime::builder()
            .oracles(OracleManager::builtin())
            .players(Arc::new(InMemoryPlayerRepo::new()))
            .seed(7)
            .build()
            .expect("runtime");
        assert_eq!(runtime.config(), &GameConfig::default());
    }
}
