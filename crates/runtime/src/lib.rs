//! Session runtime for the hunt chat game.
//!
//! This crate keeps the short-lived per-player sessions (battles, rests, track
//! leads) and drives the pure rules from `hunt-core` against them. Consumers
//! build a [`HuntRuntime`] and call its operations from whatever chat surface
//! they host; every operation is keyed by [`hunt_core::PlayerId`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the outcome and error types handlers return
//! - [`handlers`] implements the player-facing operations
//! - [`session`] stores expiring per-player sessions
//! - [`events`] broadcasts what happened to interested subscribers
//! - [`oracle`] and [`repository`] provide data adapters
pub mod api;
pub mod clock;
pub mod events;
pub mod handlers;
pub mod oracle;
pub mod repository;
pub mod runtime;
pub mod session;

pub use api::{
    BattleOutcome, ExplorationResult, ExploreOutcome, QuestListing, RestCompletion, RestStart,
    RestStatus, Result, RuntimeError, TrackResolution,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{BattleResult, EventBus, HuntEvent};
pub use oracle::OracleManager;
pub use repository::{
    FilePlayerRepository, InMemoryPlayerRepo, PlayerRepository, RepositoryError,
};
pub use runtime::{HuntRuntime, RuntimeBuilder, RuntimeConfig};
pub use session::{BattleSession, PlayerSessions, RestSession, SessionRegistry, TrackLead};
