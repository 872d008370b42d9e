//! Level population and the world-level resources.

use std::time::Duration;

use bevy::prelude::*;

use super::spawning::*;
use crate::core::{BarKind, BarUpdate, EnemyKind, GameConfig, SimRng};

/// Marker for everything that belongs to the current run; despawned on restart.
#[derive(Component, Debug, Default)]
pub struct LevelEntity;

/// Horizontal camera offset; the renderer reads it, the character motion writes it.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct CameraOffset {
    pub x: f32,
}

/// Backdrop layers back to front. Each layer alternates two images per segment.
pub const BACKDROP_LAYERS: u8 = 4;

/// Spawn the level: backdrop, cloud, chickens, boss, coins, bottles and the character.
pub fn populate_level(
    commands: &mut Commands,
    config: &GameConfig,
    rng: &mut SimRng,
    now: Duration,
) {
    let level = &config.level;
    for segment in 0..level.backdrop_segments {
        let x = level.backdrop_first_x + segment as f32 * level.backdrop_spacing;
        // segments alternate images, starting with the second one
        let variant = if segment % 2 == 0 { 2 } else { 1 };
        for layer in 0..BACKDROP_LAYERS {
            commands.spawn(backdrop_bundle(layer, variant, x, config));
        }
    }

    for _ in 0..level.cloud_count {
        let x = rng.span(0.0, level.cloud_x_span);
        let speed = rng.span(level.cloud_min_speed, level.cloud_speed_span);
        commands.spawn(cloud_bundle(x, speed, config));
    }

    let chickens = &config.chickens;
    let roster = std::iter::repeat(EnemyKind::NormalChicken)
        .take(chickens.normal_count)
        .chain(std::iter::repeat(EnemyKind::SmallChicken).take(chickens.small_count));
    for kind in roster {
        let spec = match kind {
            EnemyKind::SmallChicken => &chickens.small,
            _ => &chickens.normal,
        };
        let x = rng.span(spec.min_x, spec.x_span);
        let speed = chicken_speed(kind, config, rng);
        commands.spawn(chicken_bundle(kind, x, speed, config));
    }
    commands.spawn(boss_bundle(config));

    let pickups = &config.pickups;
    for _ in 0..pickups.coin_count {
        let x = rng.span(pickups.coin_min_x, pickups.coin_x_span);
        let y = rng.span(pickups.coin_min_y, pickups.coin_y_span);
        commands.spawn(coin_bundle(x, y, config));
    }
    for _ in 0..pickups.bottle_count {
        let x = rng.span(pickups.bottle_min_x, pickups.bottle_x_span);
        commands.spawn(ground_bottle_bundle(x, config));
    }

    commands.spawn(character_bundle(config, now));
}

/// Bar values of a fresh run.
pub fn initial_bars(config: &GameConfig) -> [BarUpdate; 4] {
    [
        BarUpdate::Percent {
            bar: BarKind::Health,
            percent: 100.0,
        },
        BarUpdate::Count {
            bar: BarKind::Bottles,
            count: config.character.start_flasks,
        },
        BarUpdate::Count {
            bar: BarKind::Coins,
            count: 0,
        },
        BarUpdate::Percent {
            bar: BarKind::Boss,
            percent: 100.0,
        },
    ]
}
