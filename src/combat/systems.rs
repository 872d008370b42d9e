//! Combat systems - contacts, throws, bottle flight and hits, pickups.

use std::collections::HashSet;
use std::time::Duration;

use bevy::prelude::*;

use super::collision::{adjudicate_contact, knock_back, Contact};
use super::components::*;
use crate::core::{
    Actor, Animator, AnimationSet, BarKind, BarUpdate, EnemyKind, GameConfig, Outcome, PickupKind,
    SimClock, SoundCue, SoundId,
};
use crate::enemies::{boss_win_at, BossBrain};
use crate::physics::{Body, Frozen};
use crate::player::{Character, Controls};
use crate::world::{projectile_bundle, RunOutcome};

/// Resolve every overlap between the character and an enemy, then enforce bounds.
pub fn resolve_contacts(
    mut commands: Commands,
    clock: Res<SimClock>,
    config: Res<GameConfig>,
    mut outcome: ResMut<RunOutcome>,
    mut characters: Query<(&mut Character, &mut Body, &mut Vitals), Without<Frozen>>,
    enemies: Query<(Entity, &Actor, &Body, Option<&BossBrain>), Without<Character>>,
    mut sounds: EventWriter<SoundCue>,
    mut bars: EventWriter<BarUpdate>,
) {
    let now = clock.now();
    let bounds = &config.character;

    for (mut character, mut body, mut vitals) in characters.iter_mut() {
        for (entity, actor, enemy_body, brain) in enemies.iter() {
            let Actor::Enemy(kind) = *actor else {
                continue;
            };
            if character.is_dead() {
                break;
            }
            if !body.collides_with(enemy_body) {
                continue;
            }

            let attacking = brain.is_some_and(BossBrain::is_attacking);
            match adjudicate_contact(&body, enemy_body, kind, attacking, &config.combat) {
                Contact::Stomp => {
                    debug!("Stomped {:?} at x={:.0}", kind, enemy_body.x);
                    commands.entity(entity).despawn_recursive();
                    sounds.send(SoundCue::Play(SoundId::ChickenDie));
                    body.speed_y = config.combat.stomp_bounce;
                }
                Contact::Damage { amount } => {
                    let result = vitals.take_hit(amount, now);
                    if result == HitResult::Ignored {
                        continue;
                    }
                    let mut cues = Vec::new();
                    character.stop_snore(&mut cues);
                    cues.push(SoundCue::Play(match result {
                        HitResult::Killed => SoundId::CharacterDead,
                        _ => SoundId::Hurt,
                    }));
                    knock_back(
                        &mut body,
                        enemy_body,
                        config.combat.knockback,
                        bounds.min_x,
                        bounds.max_x,
                    );
                    bars.send(BarUpdate::Percent {
                        bar: BarKind::Health,
                        percent: vitals.percent(),
                    });
                    if result == HitResult::Killed && character.die(now, &mut cues) {
                        info!("Character died at {:?}", now);
                        let loss_at = now + Duration::from_millis(bounds.loss_delay_ms);
                        outcome.schedule(Outcome::Lost, loss_at);
                    }
                    sounds.send_batch(cues);
                }
                Contact::Harmless => {}
            }
        }

        body.x = body.x.clamp(bounds.min_x, bounds.max_x);
    }
}

/// Launch a bottle when the throw key is held, ammo is left and the cooldown passed.
pub fn dispatch_throws(
    mut commands: Commands,
    clock: Res<SimClock>,
    config: Res<GameConfig>,
    controls: Res<Controls>,
    mut characters: Query<(&mut Character, &Body), Without<Frozen>>,
    mut sounds: EventWriter<SoundCue>,
    mut bars: EventWriter<BarUpdate>,
) {
    let now = clock.now();
    let cooldown = Duration::from_millis(config.character.throw_cooldown_ms);

    for (mut character, body) in characters.iter_mut() {
        let ready = character
            .last_bottle_at
            .map_or(true, |at| now.saturating_sub(at) >= cooldown);
        if !controls.throw || character.flasks == 0 || !ready || character.is_dead() {
            continue;
        }

        let projectile = &config.projectile;
        let (offset_x, direction) = if body.mirrored {
            (projectile.spawn_offset_left, -1.0)
        } else {
            (projectile.spawn_offset_right, 1.0)
        };
        commands.spawn(projectile_bundle(
            body.x + offset_x,
            body.y + projectile.spawn_offset_y,
            direction,
            &config,
        ));

        character.flasks -= 1;
        character.last_bottle_at = Some(now);
        sounds.send(SoundCue::Play(SoundId::ThrowBottle));
        bars.send(BarUpdate::Count {
            bar: BarKind::Bottles,
            count: character.flasks,
        });
    }
}

/// Horizontal flight of bottles that have not impacted yet.
pub fn fly_projectiles(
    config: Res<GameConfig>,
    mut query: Query<(&Projectile, &mut Body), Without<Frozen>>,
) {
    for (projectile, mut body) in query.iter_mut() {
        if !projectile.has_impacted() {
            body.x += projectile.direction * config.projectile.flight_step;
        }
    }
}

/// Bottles against enemies and against their ground plane.
pub fn resolve_projectile_hits(
    mut commands: Commands,
    clock: Res<SimClock>,
    config: Res<GameConfig>,
    mut outcome: ResMut<RunOutcome>,
    mut projectiles: Query<(&mut Projectile, &mut Body), Without<Frozen>>,
    mut enemies: Query<
        (Entity, &Actor, &Body, Option<&mut BossBrain>, Option<&mut Vitals>),
        Without<Projectile>,
    >,
    mut sounds: EventWriter<SoundCue>,
    mut bars: EventWriter<BarUpdate>,
) {
    let now = clock.now();
    let mut removed = HashSet::new();

    for (mut projectile, mut bottle) in projectiles.iter_mut() {
        if projectile.has_impacted() {
            continue;
        }

        for (entity, actor, enemy_body, brain, vitals) in enemies.iter_mut() {
            let Actor::Enemy(kind) = *actor else {
                continue;
            };
            if removed.contains(&entity) || !bottle.collides_with(enemy_body) {
                continue;
            }

            match (kind, brain, vitals) {
                (EnemyKind::BossChicken, Some(mut brain), Some(mut vitals)) => {
                    let result = brain.take_hit(&mut vitals, config.projectile.boss_damage, now);
                    debug!("Bottle hit boss: {:?}, energy {}", result, vitals.energy);
                    bars.send(BarUpdate::Percent {
                        bar: BarKind::Boss,
                        percent: vitals.percent(),
                    });
                    if result == HitResult::Killed {
                        info!("Boss defeated at {:?}", now);
                        sounds.send(SoundCue::Play(SoundId::EndbossDie));
                        outcome.schedule(Outcome::Won, boss_win_at(now, &config));
                    }
                }
                (EnemyKind::BossChicken, ..) => {}
                _ => {
                    commands.entity(entity).despawn_recursive();
                    removed.insert(entity);
                    sounds.send(SoundCue::Play(SoundId::ChickenDie));
                }
            }

            if projectile.impact(&mut bottle, now) {
                sounds.send(SoundCue::Play(SoundId::BottleSplash));
            }
            break;
        }

        if bottle.y >= config.projectile.ground && projectile.impact(&mut bottle, now) {
            sounds.send(SoundCue::Play(SoundId::BottleSplash));
        }
    }
}

/// Step splash frames and remove bottles whose splash finished.
pub fn play_splash(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut query: Query<(Entity, &Projectile, &mut Animator), Without<Frozen>>,
) {
    for (entity, projectile, mut animator) in query.iter_mut() {
        if !projectile.has_impacted() {
            continue;
        }
        let splash_frames = config.projectile.splash_frames;
        let finished = animator.set == AnimationSet::Splash && animator.ticks + 1 >= splash_frames;
        if finished {
            commands.entity(entity).despawn_recursive();
        } else {
            animator.select(AnimationSet::Splash);
        }
    }
}

/// Collect every coin and ground bottle the character overlaps.
pub fn collect_pickups(
    mut commands: Commands,
    mut characters: Query<(&mut Character, &Body), Without<Frozen>>,
    pickups: Query<(Entity, &Actor, &Body), Without<Character>>,
    mut bars: EventWriter<BarUpdate>,
) {
    for (mut character, body) in characters.iter_mut() {
        for (entity, actor, pickup) in pickups.iter() {
            let Actor::Pickup(kind) = *actor else {
                continue;
            };
            if !body.collides_with(pickup) {
                continue;
            }
            commands.entity(entity).despawn_recursive();
            let update = match kind {
                PickupKind::Coin => {
                    character.tokens += 1;
                    BarUpdate::Count {
                        bar: BarKind::Coins,
                        count: character.tokens,
                    }
                }
                PickupKind::Bottle => {
                    character.flasks += 1;
                    BarUpdate::Count {
                        bar: BarKind::Bottles,
                        count: character.flasks,
                    }
                }
            };
            bars.send(update);
        }
    }
}
