#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};

use hunt_core::{
    EnemyTemplate, GameConfig, PlayerId, PlayerRecord, QuestBoard, RandomSource, StaticCatalog,
};
use hunt_runtime::{
    HuntRuntime, InMemoryPlayerRepo, ManualClock, OracleManager, PlayerRepository,
};

pub const HERO: PlayerId = PlayerId(100);

pub fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp")
}

pub fn enemy(
    name: &str,
    base_hp: i32,
    attack: u32,
    defense: u32,
    spawn_chance: f64,
) -> EnemyTemplate {
    EnemyTemplate {
        name: name.into(),
        base_hp,
        attack,
        defense,
        exp_reward: 20,
        gold_reward: 15,
        spawn_chance,
        track_description: format!("{} tracks", name.to_lowercase()),
    }
}

/// Catalog with no resources, so every roll goes to enemies and tracks.
pub fn catalog(enemies: Vec<EnemyTemplate>) -> StaticCatalog {
    StaticCatalog::new(enemies, Vec::new())
}

pub struct Harness {
    pub runtime: HuntRuntime,
    pub clock: Arc<ManualClock>,
    pub players: Arc<InMemoryPlayerRepo>,
}

impl Harness {
    pub fn new(catalog: StaticCatalog, rng: impl RandomSource + 'static) -> Self {
        Self::with_config(catalog, rng, GameConfig::default())
    }

    pub fn with_config(
        catalog: StaticCatalog,
        rng: impl RandomSource + 'static,
        config: GameConfig,
    ) -> Self {
        let clock = Arc::new(ManualClock::new(epoch()));
        let players = Arc::new(InMemoryPlayerRepo::new());
        let oracles = OracleManager::new(
            Arc::new(catalog),
            Arc::new(QuestBoard::new(hunt_content::default_quests())),
        );
        let runtime = HuntRuntime::builder()
            .game_config(config)
            .oracles(oracles)
            .players(players.clone())
            .clock(clock.clone())
            .rng(rng)
            .build()
            .expect("runtime");
        Self {
            runtime,
            clock,
            players,
        }
    }

    pub async fn add_player(&self, record: PlayerRecord) {
        self.players.save(&record).await.expect("save player");
    }

    /// Standard hero: 100 HP, attack 20, defense 5.
    pub async fn add_hero(&self) {
        self.add_player(PlayerRecord::new(HERO, "Hero").with_combat_stats(100, 20, 5))
            .await;
    }

    pub async fn record(&self, id: PlayerId) -> PlayerRecord {
        self.players
            .load(id)
            .await
            .expect("load player")
            .expect("player exists")
    }
}
