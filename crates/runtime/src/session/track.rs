use chrono::{DateTime, Utc};

use hunt_core::{PlayerId, TrackCandidate};

/// Tracks noticed by the player's latest exploration that found no enemy.
///
/// Replaced by the next exploration that finds tracks; consumed when followed.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackLead {
    pub player_id: PlayerId,
    pub candidates: Vec<TrackCandidate>,
    pub found_at: DateTime<Utc>,
}

impl TrackLead {
    pub fn new(player_id: PlayerId, candidates: Vec<TrackCandidate>, now: DateTime<Utc>) -> Self {
        Self {
            player_id,
            candidates,
            found_at: now,
        }
    }

    /// The candidate `/follow` acts on.
    pub fn first(&self) -> Option<&TrackCandidate> {
        self.candidates.first()
    }
}
