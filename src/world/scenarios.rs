//! Whole-simulation scenarios on a headless app.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::plugin::setup_level;
use super::spawning::*;
use crate::combat::{Projectile, Vitals};
use crate::core::{
    Actor, BarKind, BarUpdate, EnemyKind, GameConfig, Outcome, PickupKind, RunEnded, SoundCue,
    SoundId,
};
use crate::enemies::{BossBrain, BossMode, Walker};
use crate::physics::{Body, Frozen};
use crate::player::{Character, Controls};
use crate::testing::Harness;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn config_of(harness: &Harness) -> GameConfig {
    harness.world().resource::<GameConfig>().clone()
}

fn spawn_character(harness: &mut Harness, x: f32, y: f32, speed_y: f32) -> Entity {
    let config = config_of(harness);
    let entity = harness.spawn(character_bundle(&config, Duration::ZERO));
    let mut body = harness.get_mut::<Body>(entity);
    body.x = x;
    body.y = y;
    body.speed_y = speed_y;
    entity
}

fn spawn_chicken(harness: &mut Harness, kind: EnemyKind, x: f32) -> Entity {
    let config = config_of(harness);
    harness.spawn(chicken_bundle(kind, x, 0.0, &config))
}

fn count_sound(cues: &[SoundCue], id: SoundId) -> usize {
    cues.iter().filter(|c| **c == SoundCue::Play(id)).count()
}

#[test]
fn falling_onto_normal_chicken_stomps_it() {
    let mut harness = Harness::new(Harness::quiet_config());
    let character = spawn_character(&mut harness, 100.0, 100.0, -5.0);
    let chicken = spawn_chicken(&mut harness, EnemyKind::NormalChicken, 110.0);

    harness.run_until(ms(50));

    assert!(!harness.exists(chicken));
    assert_eq!(harness.get::<Body>(character).speed_y, 15.0);
    assert_eq!(harness.get::<Vitals>(character).energy, 100.0);
    let sounds = harness.drain::<SoundCue>();
    assert_eq!(count_sound(&sounds, SoundId::ChickenDie), 1);
    assert_eq!(count_sound(&sounds, SoundId::Hurt), 0);
}

#[test]
fn walking_into_small_chicken_hurts_and_knocks_back() {
    let mut harness = Harness::new(Harness::quiet_config());
    let character = spawn_character(&mut harness, 100.0, 150.0, 0.0);
    let chicken = spawn_chicken(&mut harness, EnemyKind::SmallChicken, 105.0);

    harness.run_until(ms(50));

    assert!(harness.exists(chicken));
    assert_eq!(harness.get::<Vitals>(character).energy, 95.0);
    assert_eq!(harness.get::<Body>(character).x, 120.0);
    let bars = harness.drain::<BarUpdate>();
    assert!(bars.contains(&BarUpdate::Percent {
        bar: BarKind::Health,
        percent: 95.0
    }));
}

#[test]
fn contacts_inside_hurt_window_deduct_once() {
    let mut harness = Harness::new(Harness::quiet_config());
    let character = spawn_character(&mut harness, 100.0, 150.0, 0.0);
    spawn_chicken(&mut harness, EnemyKind::SmallChicken, 105.0);

    // still overlapping on every contact check up to one second later
    harness.run_until(ms(1000));
    assert_eq!(harness.get::<Vitals>(character).energy, 95.0);
    assert_eq!(count_sound(&harness.drain::<SoundCue>(), SoundId::Hurt), 1);

    harness.run_until(ms(1050));
    assert_eq!(harness.get::<Vitals>(character).energy, 90.0);
}

#[test]
fn character_death_ends_run_once_after_delay() {
    let mut harness = Harness::new(Harness::quiet_config());
    let character = spawn_character(&mut harness, 100.0, 150.0, 0.0);
    harness.get_mut::<Vitals>(character).energy = 5.0;
    spawn_chicken(&mut harness, EnemyKind::NormalChicken, 110.0);

    harness.run_until(ms(1045));
    assert!(harness.get::<Character>(character).is_dead());
    assert!(harness.drain::<RunEnded>().is_empty());

    harness.run_until(ms(1050));
    assert_eq!(
        harness.drain::<RunEnded>(),
        vec![RunEnded {
            outcome: Outcome::Lost
        }]
    );
    assert!(harness.world().resource::<Controls>().is_blocked());
    assert!(harness.world().get::<Frozen>(character).is_some());

    let sounds = harness.drain::<SoundCue>();
    assert_eq!(count_sound(&sounds, SoundId::CharacterDead), 1);
    assert_eq!(count_sound(&sounds, SoundId::GameOver), 1);

    harness.run_until(ms(3000));
    assert!(harness.drain::<RunEnded>().is_empty());
}

#[test]
fn killing_blow_on_boss_wins_once() {
    let mut harness = Harness::new(Harness::quiet_config());
    let config = config_of(&harness);
    let boss = harness.spawn(boss_bundle(&config));
    harness.get_mut::<Vitals>(boss).energy = 20.0;
    harness.spawn(projectile_bundle(2550.0, 200.0, 1.0, &config));

    // the bottle connects on the first hit check at 100ms
    harness.run_until(ms(100));
    assert_eq!(harness.get::<Vitals>(boss).energy, 0.0);
    assert!(harness.get::<BossBrain>(boss).is_dead());

    harness.run_until(ms(1695));
    assert!(harness.drain::<RunEnded>().is_empty());

    harness.run_until(ms(1700));
    assert_eq!(
        harness.drain::<RunEnded>(),
        vec![RunEnded {
            outcome: Outcome::Won
        }]
    );
    harness.run_until(ms(3000));
    assert!(harness.drain::<RunEnded>().is_empty());

    let sounds = harness.drain::<SoundCue>();
    assert_eq!(count_sound(&sounds, SoundId::EndbossDie), 1);
    assert_eq!(count_sound(&sounds, SoundId::GameWin), 1);
    assert!(sounds.contains(&SoundCue::StopAll));
}

#[test]
fn bottle_lands_splashes_once_and_disappears() {
    let mut harness = Harness::new(Harness::quiet_config());
    let config = config_of(&harness);
    let bottle = harness.spawn(projectile_bundle(0.0, 300.0, 1.0, &config));

    harness.run_until(ms(1500));
    assert!(harness.get::<Projectile>(bottle).has_impacted());
    assert_eq!(harness.get::<Body>(bottle).y, config.projectile.ground);

    harness.run_until(ms(2500));
    assert!(!harness.exists(bottle));
    assert_eq!(
        count_sound(&harness.drain::<SoundCue>(), SoundId::BottleSplash),
        1
    );
}

#[test]
fn throws_respect_ammo_and_cooldown() {
    let mut harness = Harness::new(Harness::quiet_config());
    let character = spawn_character(&mut harness, 100.0, 150.0, 0.0);
    harness.get_mut::<Character>(character).flasks = 2;
    harness.world_mut().resource_mut::<Controls>().throw = true;

    harness.run_until(ms(100));
    assert_eq!(harness.get::<Character>(character).flasks, 1);
    assert_eq!(harness.count::<Projectile>(), 1);

    harness.run_until(ms(500));
    assert_eq!(harness.get::<Character>(character).flasks, 1);

    harness.run_until(ms(600));
    assert_eq!(harness.get::<Character>(character).flasks, 0);
    assert_eq!(harness.count::<Projectile>(), 2);

    harness.run_until(ms(1200));
    assert_eq!(
        count_sound(&harness.drain::<SoundCue>(), SoundId::ThrowBottle),
        2
    );
}

#[test]
fn coins_are_collected_exactly_once() {
    let mut harness = Harness::new(Harness::quiet_config());
    let config = config_of(&harness);
    let character = spawn_character(&mut harness, 100.0, 150.0, 0.0);
    let coin = harness.spawn(coin_bundle(130.0, 200.0, &config));

    harness.run_until(ms(200));
    assert!(!harness.exists(coin));
    assert_eq!(harness.get::<Character>(character).tokens, 1);

    harness.run_until(ms(1000));
    assert_eq!(harness.get::<Character>(character).tokens, 1);
    let coin_updates = harness
        .drain::<BarUpdate>()
        .into_iter()
        .filter(|u| matches!(u, BarUpdate::Count { bar: BarKind::Coins, .. }))
        .count();
    assert_eq!(coin_updates, 1);
}

#[test]
fn bottle_kills_chicken_and_second_bottle_finds_it_gone() {
    let mut harness = Harness::new(Harness::quiet_config());
    let config = config_of(&harness);
    let chicken = spawn_chicken(&mut harness, EnemyKind::NormalChicken, 150.0);
    harness.spawn(projectile_bundle(100.0, 340.0, 1.0, &config));
    harness.spawn(projectile_bundle(100.0, 340.0, 1.0, &config));

    // both bottles overlap the chicken on the first hit check
    harness.run_until(ms(100));
    assert!(!harness.exists(chicken));

    let world = harness.world_mut();
    let mut bottles = world.query::<&Projectile>();
    let impacted = bottles.iter(world).filter(|p| p.has_impacted()).count();
    assert_eq!(impacted, 1);

    let sounds = harness.drain::<SoundCue>();
    assert_eq!(count_sound(&sounds, SoundId::ChickenDie), 1);
    assert_eq!(count_sound(&sounds, SoundId::BottleSplash), 1);
}

#[test]
fn attacking_boss_hurts_and_knocks_back() {
    let mut harness = Harness::new(Harness::quiet_config());
    let config = config_of(&harness);
    let boss = harness.spawn(boss_bundle(&config));
    harness.get_mut::<Body>(boss).x = 300.0;
    {
        let mut brain = harness.get_mut::<BossBrain>(boss);
        brain.mode = BossMode::Attacking;
        brain.last_attack_at = Some(Duration::ZERO);
        brain.attack_ends_at = Some(ms(5000));
    }
    let character = spawn_character(&mut harness, 250.0, 150.0, 0.0);

    harness.run_until(ms(50));

    assert_eq!(harness.get::<Vitals>(character).energy, 75.0);
    assert_eq!(harness.get::<Body>(character).x, 230.0);
    assert_eq!(count_sound(&harness.drain::<SoundCue>(), SoundId::Hurt), 1);
    assert!(harness.drain::<BarUpdate>().contains(&BarUpdate::Percent {
        bar: BarKind::Health,
        percent: 75.0
    }));
}

#[test]
fn ground_bottle_is_collected_once() {
    let mut harness = Harness::new(Harness::quiet_config());
    let config = config_of(&harness);
    let character = spawn_character(&mut harness, 100.0, 150.0, 0.0);
    let bottle = harness.spawn(ground_bottle_bundle(130.0, &config));

    harness.run_until(ms(200));
    assert!(!harness.exists(bottle));
    assert_eq!(harness.get::<Character>(character).flasks, 1);

    harness.run_until(ms(1000));
    assert_eq!(harness.get::<Character>(character).flasks, 1);
    let bottle_updates: Vec<BarUpdate> = harness
        .drain::<BarUpdate>()
        .into_iter()
        .filter(|u| matches!(u, BarUpdate::Count { bar: BarKind::Bottles, .. }))
        .collect();
    assert_eq!(
        bottle_updates,
        vec![BarUpdate::Count {
            bar: BarKind::Bottles,
            count: 1
        }]
    );
}

#[test]
fn spawner_at_cap_adds_nothing() {
    let mut config = Harness::quiet_config();
    config.spawner.enemy_probability = 1.0;
    let mut harness = Harness::new(config);
    spawn_character(&mut harness, 100.0, 150.0, 0.0);
    for i in 0..15 {
        spawn_chicken(&mut harness, EnemyKind::NormalChicken, 1500.0 + i as f32 * 40.0);
    }

    harness.run_until(ms(4600));
    assert_eq!(harness.count::<Walker>(), 15);
}

#[test]
fn spawner_below_cap_fills_the_gap() {
    let mut config = Harness::quiet_config();
    config.spawner.enemy_probability = 1.0;
    let mut harness = Harness::new(config);
    spawn_character(&mut harness, 100.0, 150.0, 0.0);
    for i in 0..14 {
        spawn_chicken(&mut harness, EnemyKind::NormalChicken, 1500.0 + i as f32 * 40.0);
    }

    harness.run_until(ms(1500));
    assert_eq!(harness.count::<Walker>(), 15);
    harness.run_until(ms(3000));
    assert_eq!(harness.count::<Walker>(), 15);
}

#[test]
fn fresh_level_has_full_roster() {
    let mut harness = Harness::new(Harness::quiet_config());
    harness
        .world_mut()
        .run_system_once(setup_level)
        .expect("level builds");

    assert_eq!(harness.count::<Character>(), 1);
    assert_eq!(harness.count::<BossBrain>(), 1);
    assert_eq!(harness.count::<Walker>(), 6);

    let world = harness.world_mut();
    let mut actors = world.query::<&Actor>();
    let actors: Vec<Actor> = actors.iter(world).copied().collect();
    let coins = actors
        .iter()
        .filter(|a| **a == Actor::Pickup(PickupKind::Coin))
        .count();
    let bottles = actors
        .iter()
        .filter(|a| **a == Actor::Pickup(PickupKind::Bottle))
        .count();
    assert_eq!((coins, bottles), (5, 9));

    assert_eq!(harness.drain::<BarUpdate>().len(), 4);
}
