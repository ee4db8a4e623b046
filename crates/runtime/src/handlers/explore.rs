use tracing::{debug, info};

use hunt_core::{PlayerId, PlayerSighting, SessionError, roll_encounter};

use crate::api::{ExplorationResult, ExploreOutcome, Result};
use crate::events::HuntEvent;
use crate::runtime::HuntRuntime;
use crate::session::{BattleSession, TrackLead};

impl HuntRuntime {
    /// Explore the territory around the player.
    ///
    /// A live battle short-circuits with its status and nothing is rolled. An
    /// expired battle is abandoned first. If an enemy shows up a battle starts
    /// with the player's current stats; otherwise any tracks found replace the
    /// player's track lead.
    pub async fn explore(&self, player_id: PlayerId) -> Result<ExploreOutcome> {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock(player_id).await;

        if let Some(status) = self.live_battle(&mut sessions, now) {
            debug!(player = %player_id, enemy = %status.enemy_name, "explore blocked by battle");
            return Ok(ExploreOutcome::AlreadyInBattle(status));
        }
        if let Some(remaining_minutes) = sessions.resting_minutes(now) {
            return Err(SessionError::Resting { remaining_minutes }.into());
        }

        let record = self.players.require(player_id).await?;
        if record.is_exhausted() {
            return Err(SessionError::Exhausted.into());
        }

        let sightings = self.sessions.sightings_except(player_id);
        let config = self.config();
        let roll = self.with_rng(|rng| {
            roll_encounter(self.oracles.catalog(), &sightings, config, rng)
        });
        self.sessions.record_sighting(PlayerSighting {
            player_id,
            name: record.name.clone(),
            seen_at: now,
        });

        debug!(
            player = %player_id,
            resources = roll.found_resources.len(),
            enemy = roll.enemy.as_ref().map(|e| e.name.as_str()),
            tracks = roll.tracks.len(),
            "territory rolled"
        );

        let mut result = ExplorationResult {
            found_resources: roll.found_resources,
            enemy: roll.enemy,
            tracks: roll.tracks,
            battle: None,
        };

        if let Some(enemy) = &result.enemy {
            let session = BattleSession::new(
                player_id,
                enemy.clone(),
                record.combatant(),
                now,
                config.battle_timeout(),
            );
            match sessions.start_battle(session, now) {
                Ok(status) => {
                    info!(player = %player_id, enemy = %enemy.name, "battle started");
                    self.events.publish(HuntEvent::BattleStarted {
                        player: player_id,
                        enemy: enemy.name.clone(),
                    });
                    result.battle = Some(status);
                }
                Err(existing) => return Ok(ExploreOutcome::AlreadyInBattle(existing)),
            }
        } else if !result.tracks.is_empty() {
            sessions.set_track(TrackLead::new(player_id, result.tracks.clone(), now));
            self.events.publish(HuntEvent::TrackLeadFound {
                player: player_id,
                tracks: result.tracks.len(),
            });
        }

        Ok(ExploreOutcome::Explored(result))
    }
}
