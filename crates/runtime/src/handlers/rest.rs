use tracing::{debug, info};

use hunt_core::{PlayerId, RestDuration, SessionError, compute_rest_gain};

use crate::api::{RestCompletion, RestStart, RestStatus, Result};
use crate::events::HuntEvent;
use crate::runtime::HuntRuntime;
use crate::session::{Lookup, RestSession};

impl HuntRuntime {
    /// Start resting for `duration_spec` (`2h`, `45m`, `1h30m`).
    ///
    /// Unparsable specs rest for the configured default. A rest that has
    /// finished but was never queried is settled before the new one starts.
    pub async fn start_rest(&self, player_id: PlayerId, duration_spec: &str) -> Result<RestStart> {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock(player_id).await;

        if let Some(status) = self.live_battle(&mut sessions, now) {
            return Err(SessionError::InBattle(status).into());
        }
        match sessions.rest(now) {
            Lookup::Active(rest) => {
                return Ok(RestStart::AlreadyResting {
                    remaining_minutes: rest.remaining_minutes(now),
                });
            }
            Lookup::Expired(finished) => {
                if let Err(err) = self.complete_rest(&finished).await {
                    sessions.restore_rest(finished);
                    return Err(err);
                }
            }
            Lookup::Absent => {}
        }

        self.players.require(player_id).await?;

        let duration = RestDuration::parse_or(duration_spec, self.config().default_rest_minutes);
        let session = RestSession::new(player_id, duration, now);
        let ends_at = session.expires_at;
        if let Err(remaining_minutes) = sessions.start_rest(session, now) {
            return Ok(RestStart::AlreadyResting { remaining_minutes });
        }

        info!(player = %player_id, %duration, %ends_at, "rest started");
        self.events.publish(HuntEvent::RestStarted {
            player: player_id,
            duration,
        });
        Ok(RestStart::Started { duration, ends_at })
    }

    /// Check on the player's rest.
    ///
    /// The first query after the rest ends applies the recovery and removes the
    /// session; later queries report [`RestStatus::NotResting`].
    pub async fn rest_status(&self, player_id: PlayerId) -> Result<RestStatus> {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock(player_id).await;

        match sessions.rest(now) {
            Lookup::Absent => Ok(RestStatus::NotResting),
            Lookup::Active(rest) => Ok(RestStatus::Resting {
                remaining_minutes: rest.remaining_minutes(now),
            }),
            Lookup::Expired(finished) => match self.complete_rest(&finished).await {
                Ok(completion) => Ok(RestStatus::Completed(completion)),
                Err(err) => {
                    sessions.restore_rest(finished);
                    Err(err)
                }
            },
        }
    }

    async fn complete_rest(&self, rest: &RestSession) -> Result<RestCompletion> {
        let mut record = self.players.require(rest.player_id).await?;
        let gain = compute_rest_gain(
            record.hp,
            record.max_hp,
            record.mp,
            record.max_mp,
            rest.duration,
        );
        debug!(player = %rest.player_id, hp = gain.hp, mp = gain.mp, "rest gain computed");

        let completion = RestCompletion {
            duration: rest.duration,
            hp_before: record.hp,
            hp_after: gain.hp,
            mp_before: record.mp,
            mp_after: gain.mp,
        };
        record.hp = gain.hp;
        record.mp = gain.mp;
        self.players.save(&record).await?;

        info!(player = %rest.player_id, duration = %rest.duration, "rest completed");
        self.events.publish(HuntEvent::RestCompleted {
            player: rest.player_id,
            completion,
        });
        Ok(completion)
    }
}
