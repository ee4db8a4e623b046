//! Rest sessions: start, query-triggered completion, conflicts.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Duration;

use common::{HERO, Harness, catalog, enemy, epoch};
use hunt_core::{
    PlayerId, PlayerRecord, QuestBoard, RestDuration, ScriptedRolls, SessionError,
};
use hunt_runtime::events::Topic;
use hunt_runtime::{
    HuntEvent, HuntRuntime, InMemoryPlayerRepo, ManualClock, OracleManager, PlayerRepository,
    RepositoryError, RestCompletion, RestStart, RestStatus,
};

async fn tired_hero(harness: &Harness) {
    let mut record = PlayerRecord::new(HERO, "Hero");
    record.hp = 40;
    record.mp = 10;
    harness.add_player(record).await;
}

#[tokio::test]
async fn rest_completes_exactly_once() {
    let harness = Harness::new(catalog(Vec::new()), ScriptedRolls::new());
    tired_hero(&harness).await;
    let mut rests = harness.runtime.subscribe(Topic::Rest);

    let started = harness.runtime.start_rest(HERO, "2h").await.expect("rest");
    assert_eq!(
        started,
        RestStart::Started {
            duration: RestDuration::from_hours(2),
            ends_at: epoch() + Duration::hours(2),
        }
    );

    harness.clock.advance(Duration::minutes(30));
    assert_eq!(
        harness.runtime.rest_status(HERO).await.expect("status"),
        RestStatus::Resting {
            remaining_minutes: 90
        }
    );

    harness.clock.advance(Duration::minutes(90));
    let expected = RestCompletion {
        duration: RestDuration::from_hours(2),
        hp_before: 40,
        hp_after: 60,
        mp_before: 10,
        mp_after: 25,
    };
    assert_eq!(
        harness.runtime.rest_status(HERO).await.expect("completed"),
        RestStatus::Completed(expected)
    );
    assert_eq!(
        harness.runtime.rest_status(HERO).await.expect("after"),
        RestStatus::NotResting
    );

    let record = harness.record(HERO).await;
    assert_eq!((record.hp, record.mp), (60, 25));

    assert!(matches!(
        rests.recv().await.expect("started"),
        HuntEvent::RestStarted { .. }
    ));
    assert_eq!(
        rests.recv().await.expect("completed"),
        HuntEvent::RestCompleted {
            player: HERO,
            completion: expected,
        }
    );
}

#[tokio::test]
async fn second_rest_reports_the_first() {
    let harness = Harness::new(catalog(Vec::new()), ScriptedRolls::new());
    tired_hero(&harness).await;

    harness.runtime.start_rest(HERO, "1h30m").await.expect("rest");
    harness.clock.advance(Duration::minutes(10));

    let again = harness.runtime.start_rest(HERO, "8h").await.expect("again");
    assert_eq!(
        again,
        RestStart::AlreadyResting {
            remaining_minutes: 80
        }
    );
}

#[tokio::test]
async fn sloppy_duration_rests_for_an_hour() {
    let harness = Harness::new(catalog(Vec::new()), ScriptedRolls::new());
    tired_hero(&harness).await;

    let started = harness.runtime.start_rest(HERO, "a while").await.expect("rest");
    assert!(matches!(
        started,
        RestStart::Started { duration, .. } if duration == RestDuration::from_hours(1)
    ));
}

#[tokio::test]
async fn cannot_rest_mid_battle() {
    let harness = Harness::new(
        catalog(vec![enemy("Wolf", 50, 8, 3, 1.0)]),
        ScriptedRolls::new().with_units([0.0]),
    );
    harness.add_hero().await;
    harness.runtime.explore(HERO).await.expect("explore");

    let err = harness.runtime.start_rest(HERO, "1h").await.expect_err("in battle");
    assert!(matches!(
        err.as_session(),
        Some(SessionError::InBattle(status)) if status.enemy_name == "Wolf"
    ));

    // Once the battle has expired the rest may start.
    harness.clock.advance(Duration::minutes(5));
    let started = harness.runtime.start_rest(HERO, "1h").await.expect("rest");
    assert!(matches!(started, RestStart::Started { .. }));
}

#[tokio::test]
async fn unclaimed_rest_is_settled_before_the_next_one() {
    let harness = Harness::new(catalog(Vec::new()), ScriptedRolls::new());
    tired_hero(&harness).await;

    harness.runtime.start_rest(HERO, "1h").await.expect("rest");
    harness.clock.advance(Duration::hours(3));
    harness.runtime.start_rest(HERO, "1h").await.expect("rest again");

    let record = harness.record(HERO).await;
    assert_eq!((record.hp, record.mp), (50, 17));
}

/// Repository whose writes can be switched off.
struct FlakyRepo {
    inner: InMemoryPlayerRepo,
    failing: AtomicBool,
}

#[async_trait]
impl PlayerRepository for FlakyRepo {
    async fn load(&self, id: PlayerId) -> hunt_runtime::repository::Result<Option<PlayerRecord>> {
        self.inner.load(id).await
    }

    async fn save(&self, record: &PlayerRecord) -> hunt_runtime::repository::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Io(std::io::Error::other("disk full")));
        }
        self.inner.save(record).await
    }
}

#[tokio::test]
async fn failed_write_back_propagates_and_can_be_retried() {
    let repo = Arc::new(FlakyRepo {
        inner: InMemoryPlayerRepo::with_players([PlayerRecord::new(HERO, "Hero")]),
        failing: AtomicBool::new(true),
    });
    let clock = Arc::new(ManualClock::new(epoch()));
    let runtime = HuntRuntime::builder()
        .oracles(OracleManager::new(
            Arc::new(catalog(Vec::new())),
            Arc::new(QuestBoard::default()),
        ))
        .players(repo.clone())
        .clock(clock.clone())
        .rng(ScriptedRolls::new())
        .build()
        .expect("runtime");

    runtime.start_rest(HERO, "1h").await.expect("rest");
    clock.advance(Duration::hours(1));

    let err = runtime.rest_status(HERO).await.expect_err("write fails");
    assert!(!err.is_player_facing());

    repo.failing.store(false, Ordering::SeqCst);
    assert!(matches!(
        runtime.rest_status(HERO).await.expect("retry"),
        RestStatus::Completed(_)
    ));
}
