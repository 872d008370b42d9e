//! Bundles for every entity a level is made of.

use std::time::Duration;

use bevy::prelude::*;

use super::level::LevelEntity;
use crate::combat::{Projectile, Vitals};
use crate::core::{
    Actor, AnimationSet, Animator, BodySpec, EnemyKind, GameConfig, PickupKind, SceneryKind,
    SimRng,
};
use crate::enemies::{BossBrain, Walker};
use crate::physics::{Body, Gravity, Inset};
use crate::player::Character;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

pub fn character_bundle(config: &GameConfig, now: Duration) -> impl Bundle {
    let c = &config.character;
    (
        Actor::Character,
        Character::new(c.start_flasks, now),
        Body::new(c.spawn_x, c.spawn_y, c.body)
            .with_speed(c.speed)
            .with_acceleration(config.physics.acceleration),
        Gravity::grounded_at(c.ground),
        Vitals::new(c.max_energy, ms(c.hurt_window_ms)),
        Animator::default(),
        LevelEntity,
    )
}

pub fn chicken_bundle(kind: EnemyKind, x: f32, speed: f32, config: &GameConfig) -> impl Bundle {
    let spec = match kind {
        EnemyKind::SmallChicken => &config.chickens.small,
        _ => &config.chickens.normal,
    };
    (
        Actor::Enemy(kind),
        Walker,
        Body::new(x, spec.y, spec.body).with_speed(speed),
        Animator::new(AnimationSet::Walk),
        LevelEntity,
    )
}

/// Walking pace of a freshly placed chicken.
pub fn chicken_speed(kind: EnemyKind, config: &GameConfig, rng: &mut SimRng) -> f32 {
    let spec = match kind {
        EnemyKind::SmallChicken => &config.chickens.small,
        _ => &config.chickens.normal,
    };
    rng.span(spec.min_speed, spec.speed_span)
}

pub fn boss_bundle(config: &GameConfig) -> impl Bundle {
    let b = &config.boss;
    (
        Actor::Enemy(EnemyKind::BossChicken),
        BossBrain::default(),
        Body::new(b.spawn_x, b.y, b.body).with_speed(b.speed),
        Vitals::new(b.max_energy, ms(b.hurt_window_ms)),
        Animator::new(AnimationSet::Alert),
        LevelEntity,
    )
}

pub fn projectile_bundle(x: f32, y: f32, direction: f32, config: &GameConfig) -> impl Bundle {
    let p = &config.projectile;
    let mut body = Body::new(x, y, p.body).with_acceleration(config.physics.acceleration);
    body.speed_y = p.launch_speed_y;
    body.mirrored = direction < 0.0;
    (
        Actor::Projectile,
        Projectile::new(direction),
        body,
        Gravity::airborne_until(p.ground),
        Animator::new(AnimationSet::Spin),
        LevelEntity,
    )
}

pub fn coin_bundle(x: f32, y: f32, config: &GameConfig) -> impl Bundle {
    (
        Actor::Pickup(PickupKind::Coin),
        Body::new(x, y, config.pickups.coin_body),
        Animator::new(AnimationSet::Spin),
        LevelEntity,
    )
}

pub fn ground_bottle_bundle(x: f32, config: &GameConfig) -> impl Bundle {
    (
        Actor::Pickup(PickupKind::Bottle),
        Body::new(x, config.pickups.bottle_y, config.pickups.bottle_body),
        Animator::new(AnimationSet::Spin),
        LevelEntity,
    )
}

pub fn cloud_bundle(x: f32, speed: f32, config: &GameConfig) -> impl Bundle {
    let l = &config.level;
    (
        Actor::Scenery(SceneryKind::Cloud),
        Body::new(x, l.cloud_y, l.cloud_body).with_speed(speed),
        LevelEntity,
    )
}

pub fn backdrop_bundle(layer: u8, variant: u8, x: f32, config: &GameConfig) -> impl Bundle {
    let l = &config.level;
    let spec = BodySpec::new(l.backdrop_width, l.backdrop_height, Inset::ZERO);
    (
        Actor::Scenery(SceneryKind::Backdrop { layer, variant }),
        Body::new(x, 0.0, spec),
        LevelEntity,
    )
}
