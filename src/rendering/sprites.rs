//! Frame tables: which image an entity shows for its current animation set.

use crate::core::{Actor, AnimationSet, EnemyKind, PickupKind, SceneryKind};

const PEPE_IDLE: &[&str] = &[
    "img/2_character_pepe/1_idle/idle/I-1.png",
    "img/2_character_pepe/1_idle/idle/I-2.png",
    "img/2_character_pepe/1_idle/idle/I-3.png",
    "img/2_character_pepe/1_idle/idle/I-4.png",
    "img/2_character_pepe/1_idle/idle/I-5.png",
    "img/2_character_pepe/1_idle/idle/I-6.png",
    "img/2_character_pepe/1_idle/idle/I-7.png",
    "img/2_character_pepe/1_idle/idle/I-8.png",
    "img/2_character_pepe/1_idle/idle/I-9.png",
    "img/2_character_pepe/1_idle/idle/I-10.png",
];

const PEPE_LONG_IDLE: &[&str] = &[
    "img/2_character_pepe/1_idle/long_idle/I-11.png",
    "img/2_character_pepe/1_idle/long_idle/I-12.png",
    "img/2_character_pepe/1_idle/long_idle/I-13.png",
    "img/2_character_pepe/1_idle/long_idle/I-14.png",
    "img/2_character_pepe/1_idle/long_idle/I-15.png",
    "img/2_character_pepe/1_idle/long_idle/I-16.png",
    "img/2_character_pepe/1_idle/long_idle/I-17.png",
    "img/2_character_pepe/1_idle/long_idle/I-18.png",
    "img/2_character_pepe/1_idle/long_idle/I-19.png",
    "img/2_character_pepe/1_idle/long_idle/I-20.png",
];

const PEPE_WALK: &[&str] = &[
    "img/2_character_pepe/2_walk/W-21.png",
    "img/2_character_pepe/2_walk/W-22.png",
    "img/2_character_pepe/2_walk/W-23.png",
    "img/2_character_pepe/2_walk/W-24.png",
    "img/2_character_pepe/2_walk/W-25.png",
    "img/2_character_pepe/2_walk/W-26.png",
];

const PEPE_JUMP: &[&str] = &[
    "img/2_character_pepe/3_jump/J-31.png",
    "img/2_character_pepe/3_jump/J-32.png",
    "img/2_character_pepe/3_jump/J-33.png",
    "img/2_character_pepe/3_jump/J-34.png",
    "img/2_character_pepe/3_jump/J-35.png",
    "img/2_character_pepe/3_jump/J-36.png",
    "img/2_character_pepe/3_jump/J-37.png",
    "img/2_character_pepe/3_jump/J-38.png",
    "img/2_character_pepe/3_jump/J-39.png",
];

const PEPE_HURT: &[&str] = &[
    "img/2_character_pepe/4_hurt/H-41.png",
    "img/2_character_pepe/4_hurt/H-42.png",
    "img/2_character_pepe/4_hurt/H-43.png",
];

const PEPE_DEAD: &[&str] = &[
    "img/2_character_pepe/5_dead/D-51.png",
    "img/2_character_pepe/5_dead/D-52.png",
    "img/2_character_pepe/5_dead/D-53.png",
    "img/2_character_pepe/5_dead/D-54.png",
    "img/2_character_pepe/5_dead/D-55.png",
    "img/2_character_pepe/5_dead/D-56.png",
    "img/2_character_pepe/5_dead/D-57.png",
];

const NORMAL_WALK: &[&str] = &[
    "img/3_enemies_chicken/chicken_normal/1_walk/1_w.png",
    "img/3_enemies_chicken/chicken_normal/1_walk/2_w.png",
    "img/3_enemies_chicken/chicken_normal/1_walk/3_w.png",
];
const NORMAL_DEAD: &[&str] = &["img/3_enemies_chicken/chicken_normal/2_dead/dead.png"];

const SMALL_WALK: &[&str] = &[
    "img/3_enemies_chicken/chicken_small/1_walk/1_w.png",
    "img/3_enemies_chicken/chicken_small/1_walk/2_w.png",
    "img/3_enemies_chicken/chicken_small/1_walk/3_w.png",
];
const SMALL_DEAD: &[&str] = &["img/3_enemies_chicken/chicken_small/2_dead/dead.png"];

const BOSS_WALK: &[&str] = &[
    "img/4_enemie_boss_chicken/1_walk/G1.png",
    "img/4_enemie_boss_chicken/1_walk/G2.png",
    "img/4_enemie_boss_chicken/1_walk/G3.png",
    "img/4_enemie_boss_chicken/1_walk/G4.png",
];

const BOSS_ALERT: &[&str] = &[
    "img/4_enemie_boss_chicken/2_alert/G5.png",
    "img/4_enemie_boss_chicken/2_alert/G6.png",
    "img/4_enemie_boss_chicken/2_alert/G7.png",
    "img/4_enemie_boss_chicken/2_alert/G8.png",
    "img/4_enemie_boss_chicken/2_alert/G9.png",
    "img/4_enemie_boss_chicken/2_alert/G10.png",
    "img/4_enemie_boss_chicken/2_alert/G11.png",
    "img/4_enemie_boss_chicken/2_alert/G12.png",
];

const BOSS_ATTACK: &[&str] = &[
    "img/4_enemie_boss_chicken/3_attack/G13.png",
    "img/4_enemie_boss_chicken/3_attack/G14.png",
    "img/4_enemie_boss_chicken/3_attack/G15.png",
    "img/4_enemie_boss_chicken/3_attack/G16.png",
    "img/4_enemie_boss_chicken/3_attack/G17.png",
    "img/4_enemie_boss_chicken/3_attack/G18.png",
    "img/4_enemie_boss_chicken/3_attack/G19.png",
    "img/4_enemie_boss_chicken/3_attack/G20.png",
];

const BOSS_HURT: &[&str] = &[
    "img/4_enemie_boss_chicken/4_hurt/G21.png",
    "img/4_enemie_boss_chicken/4_hurt/G22.png",
    "img/4_enemie_boss_chicken/4_hurt/G23.png",
];

const BOSS_DEAD: &[&str] = &[
    "img/4_enemie_boss_chicken/5_dead/G24.png",
    "img/4_enemie_boss_chicken/5_dead/G25.png",
    "img/4_enemie_boss_chicken/5_dead/G26.png",
];

const BOTTLE_SPIN: &[&str] = &[
    "img/6_salsa_bottle/bottle_rotation/1_bottle_rotation.png",
    "img/6_salsa_bottle/bottle_rotation/2_bottle_rotation.png",
    "img/6_salsa_bottle/bottle_rotation/3_bottle_rotation.png",
    "img/6_salsa_bottle/bottle_rotation/4_bottle_rotation.png",
];

const BOTTLE_SPLASH: &[&str] = &[
    "img/6_salsa_bottle/bottle_rotation/bottle_splash/1_bottle_splash.png",
    "img/6_salsa_bottle/bottle_rotation/bottle_splash/2_bottle_splash.png",
    "img/6_salsa_bottle/bottle_rotation/bottle_splash/3_bottle_splash.png",
    "img/6_salsa_bottle/bottle_rotation/bottle_splash/4_bottle_splash.png",
    "img/6_salsa_bottle/bottle_rotation/bottle_splash/5_bottle_splash.png",
    "img/6_salsa_bottle/bottle_rotation/bottle_splash/6_bottle_splash.png",
];

const COIN: &[&str] = &["img/8_coin/coin_1.png", "img/8_coin/coin_2.png"];

const GROUND_BOTTLE: &[&str] = &[
    "img/6_salsa_bottle/1_salsa_bottle_on_ground.png",
    "img/6_salsa_bottle/2_salsa_bottle_on_ground.png",
];

const CLOUD: &[&str] = &["img/5_background/layers/4_clouds/1.png"];

const AIR: &[&str] = &["img/5_background/layers/air.png"];
const THIRD_1: &[&str] = &["img/5_background/layers/3_third_layer/1.png"];
const THIRD_2: &[&str] = &["img/5_background/layers/3_third_layer/2.png"];
const SECOND_1: &[&str] = &["img/5_background/layers/2_second_layer/1.png"];
const SECOND_2: &[&str] = &["img/5_background/layers/2_second_layer/2.png"];
const FIRST_1: &[&str] = &["img/5_background/layers/1_first_layer/1.png"];
const FIRST_2: &[&str] = &["img/5_background/layers/1_first_layer/2.png"];

/// Image sequence for an actor in a given set. Sets an actor never uses
/// fall back to its resting sequence.
pub fn frame_paths(actor: Actor, set: AnimationSet) -> &'static [&'static str] {
    match actor {
        Actor::Character => match set {
            AnimationSet::LongIdle => PEPE_LONG_IDLE,
            AnimationSet::Walk => PEPE_WALK,
            AnimationSet::Jump => PEPE_JUMP,
            AnimationSet::Hurt => PEPE_HURT,
            AnimationSet::Dead => PEPE_DEAD,
            // throwing shows the idle loop
            _ => PEPE_IDLE,
        },
        Actor::Enemy(EnemyKind::NormalChicken) => match set {
            AnimationSet::Dead => NORMAL_DEAD,
            _ => NORMAL_WALK,
        },
        Actor::Enemy(EnemyKind::SmallChicken) => match set {
            AnimationSet::Dead => SMALL_DEAD,
            _ => SMALL_WALK,
        },
        Actor::Enemy(EnemyKind::BossChicken) => match set {
            AnimationSet::Walk => BOSS_WALK,
            AnimationSet::Attack => BOSS_ATTACK,
            AnimationSet::Hurt => BOSS_HURT,
            AnimationSet::Dead => BOSS_DEAD,
            _ => BOSS_ALERT,
        },
        Actor::Projectile => match set {
            AnimationSet::Splash => BOTTLE_SPLASH,
            _ => BOTTLE_SPIN,
        },
        Actor::Pickup(PickupKind::Coin) => COIN,
        Actor::Pickup(PickupKind::Bottle) => GROUND_BOTTLE,
        Actor::Scenery(SceneryKind::Cloud) => CLOUD,
        Actor::Scenery(SceneryKind::Backdrop { layer, variant }) => match (layer, variant) {
            (0, _) => AIR,
            (1, 1) => THIRD_1,
            (1, _) => THIRD_2,
            (2, 1) => SECOND_1,
            (2, _) => SECOND_2,
            (_, 1) => FIRST_1,
            (_, _) => FIRST_2,
        },
    }
}

/// Paint order, back to front.
pub fn draw_layer(actor: Actor) -> f32 {
    match actor {
        Actor::Scenery(SceneryKind::Backdrop { layer, .. }) => layer as f32,
        Actor::Scenery(SceneryKind::Cloud) => 4.0,
        Actor::Pickup(PickupKind::Bottle) => 5.0,
        Actor::Character => 6.0,
        Actor::Enemy(_) => 7.0,
        Actor::Pickup(PickupKind::Coin) => 8.0,
        Actor::Projectile => 9.0,
    }
}
