//! Topic-based event bus for hunt events.
//!
//! Handlers publish what happened after the session state has changed;
//! subscribers (a chat bot's notifier, tests) pick the topics they care about.

mod bus;
mod hunt_event;

pub use bus::{EventBus, Topic};
pub use hunt_event::{BattleResult, HuntEvent};
