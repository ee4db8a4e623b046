//! Per-player session storage.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, OwnedMutexGuard};

use hunt_core::{BattleStatus, PlayerId, PlayerSighting};

use super::{BattleSession, Lookup, RestSession, TrackLead};

/// Every session one player currently holds.
///
/// Obtained through [`SessionRegistry::lock`]; holding the guard serializes
/// all operations for that player.
#[derive(Debug, Default)]
pub struct PlayerSessions {
    battle: Option<BattleSession>,
    rest: Option<RestSession>,
    track: Option<TrackLead>,
}

impl PlayerSessions {
    /// Battle lookup that evicts an expired battle.
    pub fn battle(&mut self, now: DateTime<Utc>) -> Lookup<'_, BattleSession> {
        if self.battle.as_ref().is_some_and(|b| b.is_expired(now))
            && let Some(expired) = self.battle.take()
        {
            return Lookup::Expired(expired);
        }
        match self.battle.as_mut() {
            Some(battle) => Lookup::Active(battle),
            None => Lookup::Absent,
        }
    }

    /// Status of the live battle, if any. An expired battle is evicted and
    /// reported as absent.
    pub fn battle_status(&mut self, now: DateTime<Utc>) -> Option<BattleStatus> {
        match self.battle(now) {
            Lookup::Active(battle) => Some(battle.status(now)),
            Lookup::Absent | Lookup::Expired(_) => None,
        }
    }

    /// Store a new battle unless a live one exists, in which case its status is
    /// returned and nothing changes.
    pub fn start_battle(
        &mut self,
        session: BattleSession,
        now: DateTime<Utc>,
    ) -> Result<BattleStatus, BattleStatus> {
        if let Some(existing) = self.battle_status(now) {
            return Err(existing);
        }
        let status = session.status(now);
        self.battle = Some(session);
        Ok(status)
    }

    pub fn end_battle(&mut self) -> Option<BattleSession> {
        self.battle.take()
    }

    /// Rest lookup that evicts a finished rest.
    pub fn rest(&mut self, now: DateTime<Utc>) -> Lookup<'_, RestSession> {
        if self.rest.as_ref().is_some_and(|r| r.is_expired(now))
            && let Some(finished) = self.rest.take()
        {
            return Lookup::Expired(finished);
        }
        match self.rest.as_mut() {
            Some(rest) => Lookup::Active(rest),
            None => Lookup::Absent,
        }
    }

    /// Minutes left on an unfinished rest. Never evicts, so a finished rest
    /// stays around until its status is queried.
    pub fn resting_minutes(&self, now: DateTime<Utc>) -> Option<i64> {
        self.rest
            .as_ref()
            .filter(|rest| !rest.is_expired(now))
            .map(|rest| rest.remaining_minutes(now))
    }

    /// Store a new rest unless an unfinished one exists, in which case its
    /// remaining minutes are returned.
    pub fn start_rest(&mut self, session: RestSession, now: DateTime<Utc>) -> Result<(), i64> {
        if let Some(remaining) = self.resting_minutes(now) {
            return Err(remaining);
        }
        self.rest = Some(session);
        Ok(())
    }

    /// Put back a finished rest whose settlement failed, so the next status
    /// query can retry it.
    pub fn restore_rest(&mut self, rest: RestSession) {
        self.rest.get_or_insert(rest);
    }

    pub fn track(&self) -> Option<&TrackLead> {
        self.track.as_ref()
    }

    /// Replace the current lead.
    pub fn set_track(&mut self, lead: TrackLead) {
        self.track = Some(lead);
    }

    pub fn take_track(&mut self) -> Option<TrackLead> {
        self.track.take()
    }

    /// Raw presence check that ignores expiry.
    pub fn holds_battle(&self) -> bool {
        self.battle.is_some()
    }

    pub fn holds_rest(&self) -> bool {
        self.rest.is_some()
    }
}

/// All players' sessions, plus where each player was last seen exploring.
///
/// The outer map only hands out per-player slots; the slot's async mutex is
/// what callers hold across repository I/O.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    slots: RwLock<HashMap<PlayerId, Arc<Mutex<PlayerSessions>>>>,
    sightings: RwLock<BTreeMap<PlayerId, PlayerSighting>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock one player's sessions, creating an empty slot on first use.
    pub async fn lock(&self, player: PlayerId) -> OwnedMutexGuard<PlayerSessions> {
        self.slot(player).lock_owned().await
    }

    fn slot(&self, player: PlayerId) -> Arc<Mutex<PlayerSessions>> {
        if let Some(slot) = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&player)
        {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(player).or_default())
    }

    /// Remember where `sighting.player_id` was last seen, replacing any
    /// earlier sighting.
    pub fn record_sighting(&self, sighting: PlayerSighting) {
        self.sightings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(sighting.player_id, sighting);
    }

    /// Sightings of everyone except `player`, in ascending player-id order.
    pub fn sightings_except(&self, player: PlayerId) -> Vec<PlayerSighting> {
        self.sightings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|sighting| sighting.player_id != player)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use hunt_core::{Combatant, EnemyTemplate, RestDuration};

    fn wolf() -> EnemyTemplate {
        EnemyTemplate {
            name: "Wolf".into(),
            base_hp: 50,
            attack: 8,
            defense: 3,
            exp_reward: 20,
            gold_reward: 15,
            spawn_chance: 0.3,
            track_description: "wolf tracks".into(),
        }
    }

    fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp")
    }

    fn battle(now: DateTime<Utc>) -> BattleSession {
        BattleSession::new(
            PlayerId(1),
            wolf(),
            Combatant::new(100, 100, 10, 5),
            now,
            Duration::minutes(5),
        )
    }

    #[test]
    fn second_battle_is_rejected_with_existing_status() {
        let now = epoch();
        let mut sessions = PlayerSessions::default();
        let started = sessions.start_battle(battle(now), now).expect("first battle");
        assert_eq!(started.enemy_name, "Wolf");
        assert_eq!(started.remaining_minutes, 5);

        let later = now + Duration::seconds(70);
        let existing = sessions
            .start_battle(battle(later), later)
            .expect_err("second battle");
        assert_eq!(existing.remaining_minutes, 3);
        assert_eq!(sessions.battle_status(later).map(|s| s.enemy_hp), Some(50));
    }

    #[test]
    fn expired_battle_lingers_until_read() {
        let now = epoch();
        let mut sessions = PlayerSessions::default();
        sessions.start_battle(battle(now), now).expect("battle");

        let late = now + Duration::minutes(5);
        assert!(sessions.holds_battle());
        assert!(matches!(sessions.battle(late), Lookup::Expired(_)));
        assert!(!sessions.holds_battle());
        assert!(matches!(sessions.battle(late), Lookup::Absent));
    }

    #[test]
    fn expired_battle_does_not_block_a_new_one() {
        let now = epoch();
        let mut sessions = PlayerSessions::default();
        sessions.start_battle(battle(now), now).expect("battle");
        let late = now + Duration::minutes(6);
        assert!(sessions.start_battle(battle(late), late).is_ok());
    }

    #[test]
    fn finished_rest_survives_conflict_checks() {
        let now = epoch();
        let mut sessions = PlayerSessions::default();
        let rest = RestSession::new(PlayerId(1), RestDuration::from_minutes(30), now);
        sessions.start_rest(rest.clone(), now).expect("rest");
        assert_eq!(sessions.start_rest(rest, now), Err(30));

        let done = now + Duration::minutes(30);
        assert_eq!(sessions.resting_minutes(done), None);
        assert!(sessions.holds_rest());
        assert!(matches!(sessions.rest(done), Lookup::Expired(_)));
        assert!(!sessions.holds_rest());
    }

    #[test]
    fn sightings_skip_the_viewer_and_sort_by_id() {
        let registry = SessionRegistry::new();
        for (id, name) in [(30, "c"), (10, "a"), (20, "b")] {
            registry.record_sighting(PlayerSighting {
                player_id: PlayerId(id),
                name: name.into(),
                seen_at: epoch(),
            });
        }
        let names: Vec<_> = registry
            .sightings_except(PlayerId(20))
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[tokio::test]
    async fn lock_returns_the_same_slot() {
        let registry = SessionRegistry::new();
        {
            let mut sessions = registry.lock(PlayerId(7)).await;
            sessions.set_track(TrackLead::new(PlayerId(7), Vec::new(), epoch()));
        }
        assert!(registry.lock(PlayerId(7)).await.track().is_some());
        assert!(registry.lock(PlayerId(8)).await.track().is_none());
    }
}
