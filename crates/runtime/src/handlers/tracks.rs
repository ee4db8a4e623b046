use tracing::info;

use hunt_core::{PlayerId, SessionError, TrackCandidate};

use crate::api::{Result, TrackResolution};
use crate::events::HuntEvent;
use crate::runtime::HuntRuntime;
use crate::session::{BattleSession, TrackLead};

impl HuntRuntime {
    /// Follow the first track of the player's current lead.
    ///
    /// Enemy tracks start a battle under the same rules as exploring; a player
    /// sighting is reported back. The lead is consumed either way, but stays in
    /// place when the request is rejected.
    pub async fn follow_track(&self, player_id: PlayerId) -> Result<TrackResolution> {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock(player_id).await;

        if let Some(status) = self.live_battle(&mut sessions, now) {
            return Ok(TrackResolution::AlreadyInBattle(status));
        }
        if let Some(remaining_minutes) = sessions.resting_minutes(now) {
            return Err(SessionError::Resting { remaining_minutes }.into());
        }

        let candidate = sessions
            .track()
            .and_then(TrackLead::first)
            .cloned()
            .ok_or(SessionError::NoTrackLead)?;

        match candidate {
            TrackCandidate::PlayerSighting(sighting) => {
                sessions.take_track();
                info!(player = %player_id, spotted = %sighting.player_id, "followed player tracks");
                Ok(TrackResolution::PlayerSpotted(sighting))
            }
            TrackCandidate::Enemy(enemy) => {
                let record = self.players.require(player_id).await?;
                if record.is_exhausted() {
                    return Err(SessionError::Exhausted.into());
                }

                let name = enemy.name.clone();
                let session = BattleSession::new(
                    player_id,
                    enemy,
                    record.combatant(),
                    now,
                    self.config().battle_timeout(),
                );
                let status = match sessions.start_battle(session, now) {
                    Ok(status) => status,
                    Err(existing) => return Ok(TrackResolution::AlreadyInBattle(existing)),
                };
                sessions.take_track();

                info!(player = %player_id, enemy = %name, "battle started from tracks");
                self.events.publish(HuntEvent::BattleStarted {
                    player: player_id,
                    enemy: name,
                });
                Ok(TrackResolution::BattleStarted(status))
            }
        }
    }
}
