//! Exploration rolls.
//!
//! One roll of the territory yields found resources, at most one enemy, and,
//! when no enemy showed up, a list of tracks the player may follow later.
//!
//! # Roll order
//!
//! The order of random draws is part of the contract so that fixed-seed runs
//! reproduce exactly:
//!
//! 1. Each resource, in catalog order: one inclusion roll, then one amount roll if included.
//! 2. Each enemy, in catalog order: one inclusion roll. The first hit is the
//!    encounter and the remaining enemies are not rolled.
//! 3. Only if no enemy hit: one track roll per enemy (catalog order), then one per
//!    sighting of another player (in the order given).

use chrono::{DateTime, Utc};

use crate::config::GameConfig;
use crate::env::{CatalogOracle, EnemyTemplate, RandomSource};
use crate::player::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoundResource {
    pub name: String,
    pub amount: u32,
}

/// Last-known whereabouts of a player, left behind whenever they explore.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSighting {
    pub player_id: PlayerId,
    pub name: String,
    pub seen_at: DateTime<Utc>,
}

/// Something the player noticed and may follow.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackCandidate {
    Enemy(EnemyTemplate),
    PlayerSighting(PlayerSighting),
}

impl TrackCandidate {
    /// Text shown to the player for this track.
    pub fn description(&self) -> String {
        match self {
            Self::Enemy(enemy) => enemy.track_description.clone(),
            Self::PlayerSighting(sighting) => format!("tracks of {}", sighting.name),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterRoll {
    pub found_resources: Vec<FoundResource>,
    pub enemy: Option<EnemyTemplate>,
    /// Always empty when `enemy` is set.
    pub tracks: Vec<TrackCandidate>,
}

/// Roll one exploration of the territory.
///
/// `sightings` must already exclude the exploring player.
pub fn roll_encounter(
    catalog: &(impl CatalogOracle + ?Sized),
    sightings: &[PlayerSighting],
    config: &GameConfig,
    rng: &mut (impl RandomSource + ?Sized),
) -> EncounterRoll {
    let mut roll = EncounterRoll::default();

    for resource in catalog.resources() {
        if rng.chance(resource.spawn_chance) {
            let amount = rng.range(resource.min_amount, resource.max_amount);
            roll.found_resources.push(FoundResource {
                name: resource.name.clone(),
                amount,
            });
        }
    }

    roll.enemy = catalog
        .enemies()
        .iter()
        .find(|enemy| rng.chance(enemy.spawn_chance))
        .cloned();

    if roll.enemy.is_none() {
        for enemy in catalog.enemies() {
            if rng.chance(config.enemy_track_chance) {
                roll.tracks.push(TrackCandidate::Enemy(enemy.clone()));
            }
        }
        for sighting in sightings {
            if rng.chance(config.player_track_chance) {
                roll.tracks.push(TrackCandidate::PlayerSighting(sighting.clone()));
            }
        }
    }

    roll
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{RandSource, ResourceTemplate, ScriptedRolls, StaticCatalog};

    fn enemy(name: &str, spawn_chance: f64) -> EnemyTemplate {
        EnemyTemplate {
            name: name.into(),
            base_hp: 50,
            attack: 8,
            defense: 3,
            exp_reward: 20,
            gold_reward: 15,
            spawn_chance,
            track_description: format!("{name} tracks"),
        }
    }

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(
            vec![enemy("Wolf", 0.3), enemy("Bear", 0.1), enemy("Bandit", 0.2)],
            vec![
                ResourceTemplate {
                    name: "mushrooms".into(),
                    spawn_chance: 0.3,
                    min_amount: 1,
                    max_amount: 3,
                },
                ResourceTemplate {
                    name: "branches".into(),
                    spawn_chance: 0.4,
                    min_amount: 1,
                    max_amount: 5,
                },
            ],
        )
    }

    fn sighting(id: i64, name: &str) -> PlayerSighting {
        PlayerSighting {
            player_id: PlayerId(id),
            name: name.into(),
            seen_at: DateTime::from_timestamp(0, 0).expect("epoch"),
        }
    }

    #[test]
    fn first_enemy_hit_wins_and_skips_the_rest() {
        // resources: miss, miss; enemies: Wolf miss (0.5 >= 0.3), Bear hit (0.05 < 0.1)
        let mut rng = ScriptedRolls::new().with_units([0.9, 0.9, 0.5, 0.05, 0.0]);
        let roll = roll_encounter(&catalog(), &[], &GameConfig::default(), &mut rng);

        assert!(roll.found_resources.is_empty());
        assert_eq!(roll.enemy.map(|e| e.name), Some("Bear".to_string()));
        assert!(roll.tracks.is_empty());
        // Bandit was never rolled.
        assert_eq!(rng.remaining_units(), 1);
    }

    #[test]
    fn found_resources_keep_catalog_order_and_amounts() {
        let mut rng = ScriptedRolls::new()
            .with_units([0.1, 0.2, 0.99, 0.99, 0.99])
            .with_ranges([2, 5]);
        let roll = roll_encounter(&catalog(), &[], &GameConfig::default(), &mut rng);
        assert_eq!(
            roll.found_resources,
            vec![
                FoundResource {
                    name: "mushrooms".into(),
                    amount: 2
                },
                FoundResource {
                    name: "branches".into(),
                    amount: 5
                },
            ]
        );
        assert!(roll.enemy.is_none());
    }

    #[test]
    fn tracks_roll_enemies_then_other_players() {
        let sightings = [sighting(2, "Olena"), sighting(3, "Taras")];
        let mut rng = ScriptedRolls::new().with_units([
            0.99, 0.99, // resources
            0.99, 0.99, 0.99, // enemies
            0.1, 0.5, 0.39, // enemy tracks at 0.4: Wolf, Bandit
            0.29, 0.3, // player tracks at 0.3: Olena only
        ]);
        let roll = roll_encounter(&catalog(), &sightings, &GameConfig::default(), &mut rng);

        let described: Vec<String> = roll.tracks.iter().map(TrackCandidate::description).collect();
        assert_eq!(
            described,
            vec!["Wolf tracks", "Bandit tracks", "tracks of Olena"]
        );
        assert_eq!(rng.remaining_units(), 0);
    }

    #[test]
    fn all_clear_when_nothing_hits() {
        let mut rng = ScriptedRolls::new();
        let sightings = [sighting(9, "Ivan")];
        let roll = roll_encounter(&catalog(), &sightings, &GameConfig::default(), &mut rng);
        assert_eq!(roll, EncounterRoll::default());
    }

    #[test]
    fn seeded_rolls_are_reproducible() {
        let config = GameConfig::default();
        let mut a = RandSource::seeded(1234);
        let mut b = RandSource::seeded(1234);
        for _ in 0..50 {
            assert_eq!(
                roll_encounter(&catalog(), &[], &config, &mut a),
                roll_encounter(&catalog(), &[], &config, &mut b)
            );
        }
    }
}
