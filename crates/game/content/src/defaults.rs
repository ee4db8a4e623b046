//! Built-in content.
//!
//! Enemy order is the encounter priority order: Wolf is rolled first.

use hunt_core::{
    EnemyTemplate, QuestDefinition, QuestKind, QuestReward, ResourceTemplate, StaticCatalog,
};

pub fn default_enemies() -> Vec<EnemyTemplate> {
    vec![
        enemy("Wolf", 50, 8, 3, 20, 15, 0.3, "wolf tracks"),
        enemy("Bear", 100, 15, 8, 40, 30, 0.1, "bear tracks"),
        enemy("Bandit", 80, 12, 5, 35, 50, 0.2, "human footprints"),
    ]
}

pub fn default_resources() -> Vec<ResourceTemplate> {
    vec![
        resource("mushrooms", 0.3, 1, 3),
        resource("branches", 0.4, 1, 5),
        resource("grass", 0.5, 1, 4),
        resource("stones", 0.2, 1, 2),
    ]
}

pub fn default_catalog() -> StaticCatalog {
    StaticCatalog::new(default_enemies(), default_resources())
}

pub fn default_quests() -> Vec<QuestDefinition> {
    vec![
        QuestDefinition {
            id: 1,
            title: "First Steps".into(),
            description: "Find 5 mushrooms in the forest".into(),
            kind: QuestKind::Gathering,
            min_level: 1,
            reward: QuestReward {
                gold: 100,
                exp: 50,
            },
        },
        QuestDefinition {
            id: 2,
            title: "Forest Warden".into(),
            description: "Defeat 3 wolves".into(),
            kind: QuestKind::Combat,
            min_level: 2,
            reward: QuestReward {
                gold: 200,
                exp: 100,
            },
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn enemy(
    name: &str,
    base_hp: i32,
    attack: u32,
    defense: u32,
    exp_reward: u32,
    gold_reward: u32,
    spawn_chance: f64,
    track_description: &str,
) -> EnemyTemplate {
    EnemyTemplate {
        name: name.into(),
        base_hp,
        attack,
        defense,
        exp_reward,
        gold_reward,
        spawn_chance,
        track_description: track_description.into(),
    }
}

fn resource(name: &str, spawn_chance: f64, min_amount: u32, max_amount: u32) -> ResourceTemplate {
    ResourceTemplate {
        name: name.into(),
        spawn_chance,
        min_amount,
        max_amount,
    }
}
