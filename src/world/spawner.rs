//! Timed production of chickens and ground bottles ahead of the character.
//!
//! Both policies only ever add entities; removal happens through stomps,
//! bottle hits and collection.

use bevy::prelude::*;

use super::spawning::{chicken_bundle, chicken_speed, ground_bottle_bundle};
use crate::core::{Actor, EnemyKind, GameConfig, PickupKind, SimRng, SpawnerConfig};
use crate::physics::{Body, Frozen};
use crate::player::Character;

/// Roll for a new chicken. The cap is checked before any random draw.
pub fn roll_enemy_spawn(
    enemy_count: usize,
    character_x: f32,
    config: &SpawnerConfig,
    level_end_x: f32,
    rng: &mut SimRng,
) -> Option<(EnemyKind, f32)> {
    if enemy_count >= config.enemy_cap || !rng.chance(config.enemy_probability) {
        return None;
    }
    let kind = if rng.chance(0.5) {
        EnemyKind::NormalChicken
    } else {
        EnemyKind::SmallChicken
    };
    let x = character_x + rng.span(config.enemy_min_offset, config.enemy_offset_span);
    Some((kind, x.min(level_end_x - config.enemy_end_margin)))
}

/// X of a new ground bottle, if the cap allows one.
pub fn roll_bottle_spawn(
    bottle_count: usize,
    character_x: f32,
    config: &SpawnerConfig,
    level_end_x: f32,
    rng: &mut SimRng,
) -> Option<f32> {
    if bottle_count >= config.bottle_cap {
        return None;
    }
    let x = character_x + rng.span(config.bottle_min_offset, config.bottle_offset_span);
    Some(x.min(level_end_x - config.bottle_end_margin))
}

fn living_character_x(characters: &Query<(&Character, &Body), Without<Frozen>>) -> Option<f32> {
    characters
        .iter()
        .find(|(character, _)| !character.is_dead())
        .map(|(_, body)| body.x)
}

pub fn spawn_enemies(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut rng: ResMut<SimRng>,
    characters: Query<(&Character, &Body), Without<Frozen>>,
    actors: Query<&Actor>,
) {
    let Some(character_x) = living_character_x(&characters) else {
        return;
    };
    let count = actors
        .iter()
        .filter(|actor| matches!(actor, Actor::Enemy(_)))
        .count();

    if let Some((kind, x)) =
        roll_enemy_spawn(count, character_x, &config.spawner, config.level.end_x, &mut rng)
    {
        debug!("Spawning {:?} at x={:.0}", kind, x);
        let speed = chicken_speed(kind, &config, &mut rng);
        commands.spawn(chicken_bundle(kind, x, speed, &config));
    }
}

pub fn spawn_bottles(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut rng: ResMut<SimRng>,
    characters: Query<(&Character, &Body), Without<Frozen>>,
    actors: Query<&Actor>,
) {
    let Some(character_x) = living_character_x(&characters) else {
        return;
    };
    let count = actors
        .iter()
        .filter(|actor| **actor == Actor::Pickup(PickupKind::Bottle))
        .count();

    if let Some(x) =
        roll_bottle_spawn(count, character_x, &config.spawner, config.level.end_x, &mut rng)
    {
        debug!("Spawning bottle at x={:.0}", x);
        commands.spawn(ground_bottle_bundle(x, &config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_cap_is_never_exceeded() {
        let mut config = SpawnerConfig::default();
        config.enemy_probability = 1.0;
        let mut rng = SimRng::new(Some(11));
        for _ in 0..200 {
            assert_eq!(roll_enemy_spawn(15, 500.0, &config, 3000.0, &mut rng), None);
        }
        assert!(roll_enemy_spawn(14, 500.0, &config, 3000.0, &mut rng).is_some());
    }

    #[test]
    fn enemy_spawn_lands_ahead_and_respects_margin() {
        let mut config = SpawnerConfig::default();
        config.enemy_probability = 1.0;
        let mut rng = SimRng::new(Some(5));
        for _ in 0..100 {
            let (_, x) = roll_enemy_spawn(0, 500.0, &config, 3000.0, &mut rng).expect("spawn");
            assert!((900.0..1300.0).contains(&x));
        }
        for _ in 0..100 {
            let (_, x) = roll_enemy_spawn(0, 2200.0, &config, 3000.0, &mut rng).expect("spawn");
            assert!(x <= 2500.0);
        }
    }

    #[test]
    fn zero_probability_never_spawns() {
        let mut config = SpawnerConfig::default();
        config.enemy_probability = 0.0;
        let mut rng = SimRng::new(Some(9));
        for _ in 0..100 {
            assert_eq!(roll_enemy_spawn(0, 0.0, &config, 3000.0, &mut rng), None);
        }
    }

    #[test]
    fn bottle_spawner_caps_and_clamps() {
        let config = SpawnerConfig::default();
        let mut rng = SimRng::new(Some(2));
        assert_eq!(roll_bottle_spawn(17, 0.0, &config, 3000.0, &mut rng), None);
        for _ in 0..100 {
            let x = roll_bottle_spawn(3, 2200.0, &config, 3000.0, &mut rng).expect("spawn");
            assert!(x <= 2800.0);
        }
    }
}
