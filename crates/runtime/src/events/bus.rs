//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::HuntEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Battle start and end
    Battle,
    /// Track leads found while exploring
    Exploration,
    Rest,
    Quest,
}

impl HuntEvent {
    pub fn topic(&self) -> Topic {
        match self {
            HuntEvent::BattleStarted { .. } | HuntEvent::BattleEnded { .. } => Topic::Battle,
            HuntEvent::TrackLeadFound { .. } => Topic::Exploration,
            HuntEvent::RestStarted { .. } | HuntEvent::RestCompleted { .. } => Topic::Rest,
            HuntEvent::QuestAccepted { .. } => Topic::Quest,
        }
    }
}

/// Topic-based event bus
///
/// Events are best-effort: publishing with no subscribers, or to a lagging
/// subscriber, never fails the operation that produced the event.
#[derive(Clone)]
pub struct EventBus {
    battle: broadcast::Sender<HuntEvent>,
    exploration: broadcast::Sender<HuntEvent>,
    rest: broadcast::Sender<HuntEvent>,
    quest: broadcast::Sender<HuntEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            battle: broadcast::channel(capacity).0,
            exploration: broadcast::channel(capacity).0,
            rest: broadcast::channel(capacity).0,
            quest: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<HuntEvent> {
        match topic {
            Topic::Battle => &self.battle,
            Topic::Exploration => &self.exploration,
            Topic::Rest => &self.rest,
            Topic::Quest => &self.quest,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: HuntEvent) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<HuntEvent> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> Vec<(Topic, broadcast::Receiver<HuntEvent>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("battle_subscribers", &self.battle.receiver_count())
            .field("rest_subscribers", &self.rest.receiver_count())
            .finish_non_exhaustive()
    }
}
