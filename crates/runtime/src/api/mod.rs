//! Public runtime API surface.
//!
//! Gathers the types handlers hand back to a chat surface so the rendering
//! layer never has to reach into session storage.

pub mod errors;
pub mod outcomes;

pub use errors::{Result, RuntimeError};
pub use outcomes::{
    BattleOutcome, ExplorationResult, ExploreOutcome, QuestListing, RestCompletion, RestStart,
    RestStatus, TrackResolution,
};
