use chrono::{DateTime, Utc};

use hunt_core::{PlayerId, RestDuration};

use super::minutes_until;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestSession {
    pub player_id: PlayerId,
    pub duration: RestDuration,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl RestSession {
    pub fn new(player_id: PlayerId, duration: RestDuration, now: DateTime<Utc>) -> Self {
        Self {
            player_id,
            duration,
            started_at: now,
            expires_at: now + duration.to_chrono(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn remaining_minutes(&self, now: DateTime<Utc>) -> i64 {
        minutes_until(self.expires_at, now)
    }
}
