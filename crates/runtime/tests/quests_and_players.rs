//! Player registration, the quest board, and persistence across restarts.

mod common;

use std::sync::Arc;

use tempfile::TempDir;

use common::{HERO, Harness, catalog};
use hunt_core::{PlayerRecord, ScriptedRolls, SessionError};
use hunt_runtime::events::Topic;
use hunt_runtime::{FilePlayerRepository, HuntEvent, HuntRuntime, OracleManager};

#[tokio::test]
async fn registration_is_create_if_absent() {
    let harness = Harness::new(catalog(Vec::new()), ScriptedRolls::new());

    let created = harness.runtime.register_player(HERO, "Mykola").await.expect("register");
    assert_eq!(created, PlayerRecord::new(HERO, "Mykola"));

    let again = harness.runtime.register_player(HERO, "Someone Else").await.expect("again");
    assert_eq!(again.name, "Mykola");
    assert_eq!(harness.players.len(), 1);
    assert_eq!(harness.runtime.profile(HERO).await.expect("profile"), created);
}

#[tokio::test]
async fn quest_board_reflects_level_and_acceptance() {
    let harness = Harness::new(catalog(Vec::new()), ScriptedRolls::new());
    harness.runtime.register_player(HERO, "Mykola").await.expect("register");
    let mut quests = harness.runtime.subscribe(Topic::Quest);

    let board = harness.runtime.list_quests(HERO).await.expect("board");
    let flags: Vec<_> = board
        .iter()
        .map(|l| (l.quest.id, l.available, l.accepted))
        .collect();
    assert_eq!(flags, [(1, true, false), (2, false, false)]);

    let accepted = harness.runtime.accept_quest(HERO, 1).await.expect("accept");
    assert_eq!(accepted.title, "First Steps");
    assert_eq!(harness.record(HERO).await.accepted_quests, [1]);
    assert_eq!(
        quests.recv().await.expect("event"),
        HuntEvent::QuestAccepted {
            player: HERO,
            quest: 1
        }
    );

    let err = harness.runtime.accept_quest(HERO, 1).await.expect_err("duplicate");
    assert_eq!(err.as_session(), Some(&SessionError::QuestAlreadyAccepted(1)));

    let err = harness.runtime.accept_quest(HERO, 2).await.expect_err("level");
    assert_eq!(
        err.as_session(),
        Some(&SessionError::QuestLevelTooLow {
            required: 2,
            actual: 1
        })
    );

    let err = harness.runtime.accept_quest(HERO, 99).await.expect_err("unknown");
    assert_eq!(err.as_session(), Some(&SessionError::UnknownQuest(99)));

    let board = harness.runtime.list_quests(HERO).await.expect("board");
    assert!(board[0].accepted);
}

#[tokio::test]
async fn file_repository_keeps_players_across_runtimes() {
    let dir = TempDir::new().expect("tempdir");

    let build = || {
        HuntRuntime::builder()
            .oracles(OracleManager::builtin())
            .players(Arc::new(FilePlayerRepository::new(dir.path()).expect("repo")))
            .seed(1)
            .build()
            .expect("runtime")
    };

    let first = build();
    first.register_player(HERO, "Olena").await.expect("register");
    first.accept_quest(HERO, 1).await.expect("accept");
    first.start_rest(HERO, "1h").await.expect("rest");
    drop(first);

    let second = build();
    let record = second.profile(HERO).await.expect("profile");
    assert_eq!(record.name, "Olena");
    assert_eq!(record.accepted_quests, [1]);
    // Sessions live in memory only.
    assert!(!second.sessions().lock(HERO).await.holds_rest());
}
