//! Character pose selection.

use std::time::Duration;

use bevy::prelude::*;

use super::components::Character;
use crate::combat::Vitals;
use crate::core::{AnimationSet, Animator, CharacterConfig, GameConfig, SimClock, SoundCue};
use crate::physics::{is_airborne, Body, Frozen, Gravity};

/// Snapshot of everything the pose depends on.
#[derive(Debug, Clone, Copy)]
pub struct PoseInput {
    pub dead: bool,
    pub hurt: bool,
    pub airborne: bool,
    pub throwing: bool,
    pub walking: bool,
    pub idle_for: Duration,
}

/// Highest priority pose wins: death, hurt, airborne, throw, walk, long idle, idle.
pub fn select_pose(input: &PoseInput, long_idle: Duration) -> AnimationSet {
    if input.dead {
        AnimationSet::Dead
    } else if input.hurt {
        AnimationSet::Hurt
    } else if input.airborne {
        AnimationSet::Jump
    } else if input.throwing {
        AnimationSet::Throw
    } else if input.walking {
        AnimationSet::Walk
    } else if input.idle_for > long_idle {
        AnimationSet::LongIdle
    } else {
        AnimationSet::Idle
    }
}

/// Pose tick for one character; applies landing and the snore loop.
pub fn pose_tick(
    character: &mut Character,
    body: &Body,
    gravity: &Gravity,
    vitals: &Vitals,
    config: &CharacterConfig,
    now: Duration,
) -> (AnimationSet, Vec<SoundCue>) {
    let mut cues = Vec::new();
    let airborne = is_airborne(body, gravity);

    if character.jumping && !airborne {
        character.jumping = false;
        character.idle_since = now;
        character.stop_snore(&mut cues);
    }

    let input = PoseInput {
        dead: character.is_dead() || vitals.is_dead(),
        hurt: vitals.is_hurt(now),
        airborne,
        throwing: character.is_throwing(now, Duration::from_millis(config.throw_window_ms)),
        walking: character.moving && !airborne,
        idle_for: character.idle_for(now),
    };
    let pose = select_pose(&input, Duration::from_millis(config.long_idle_ms));

    match pose {
        AnimationSet::Jump => {
            character.jumping = true;
            character.stop_snore(&mut cues);
        }
        AnimationSet::LongIdle => character.start_snore(&mut cues),
        AnimationSet::Dead => {}
        _ => character.stop_snore(&mut cues),
    }

    (pose, cues)
}

pub fn animate_character(
    clock: Res<SimClock>,
    config: Res<GameConfig>,
    mut query: Query<(&mut Character, &mut Animator, &Body, &Gravity, &Vitals), Without<Frozen>>,
    mut sounds: EventWriter<SoundCue>,
) {
    for (mut character, mut animator, body, gravity, vitals) in query.iter_mut() {
        if character.is_dead() {
            // death frames run on their own cadence
            continue;
        }
        let (pose, cues) = pose_tick(
            &mut character,
            body,
            gravity,
            vitals,
            &config.character,
            clock.now(),
        );
        animator.select(pose);
        sounds.send_batch(cues);
    }
}

/// Step the death sequence of dead characters.
pub fn play_character_death(mut query: Query<(&Character, &mut Animator), Without<Frozen>>) {
    for (character, mut animator) in query.iter_mut() {
        if character.is_dead() {
            animator.select(AnimationSet::Dead);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, SoundId};

    fn idle_input() -> PoseInput {
        PoseInput {
            dead: false,
            hurt: false,
            airborne: false,
            throwing: false,
            walking: false,
            idle_for: Duration::ZERO,
        }
    }

    #[test]
    fn priority_order_is_respected() {
        let long = Duration::from_secs(4);
        let mut input = PoseInput {
            dead: true,
            hurt: true,
            airborne: true,
            throwing: true,
            walking: true,
            idle_for: Duration::from_secs(10),
        };
        assert_eq!(select_pose(&input, long), AnimationSet::Dead);
        input.dead = false;
        assert_eq!(select_pose(&input, long), AnimationSet::Hurt);
        input.hurt = false;
        assert_eq!(select_pose(&input, long), AnimationSet::Jump);
        input.airborne = false;
        assert_eq!(select_pose(&input, long), AnimationSet::Throw);
        input.throwing = false;
        assert_eq!(select_pose(&input, long), AnimationSet::Walk);
        input.walking = false;
        assert_eq!(select_pose(&input, long), AnimationSet::LongIdle);
        assert_eq!(select_pose(&idle_input(), long), AnimationSet::Idle);
    }

    #[test]
    fn long_idle_starts_and_activity_stops_snore() {
        let config = GameConfig::default().character;
        let mut character = Character::new(0, Duration::ZERO);
        let body = Body::new(0.0, config.ground, config.body);
        let gravity = Gravity::grounded_at(config.ground);
        let vitals = Vitals::new(100.0, Duration::from_secs(1));

        let now = Duration::from_secs(5);
        let (pose, cues) = pose_tick(&mut character, &body, &gravity, &vitals, &config, now);
        assert_eq!(pose, AnimationSet::LongIdle);
        assert_eq!(cues, vec![SoundCue::Loop(SoundId::Snore)]);

        character.moving = true;
        let now = Duration::from_secs(6);
        let (pose, cues) = pose_tick(&mut character, &body, &gravity, &vitals, &config, now);
        assert_eq!(pose, AnimationSet::Walk);
        assert_eq!(cues, vec![SoundCue::Stop(SoundId::Snore)]);
    }

    #[test]
    fn landing_clears_jump_and_restarts_idle_timer() {
        let config = GameConfig::default().character;
        let mut character = Character::new(0, Duration::ZERO);
        character.jumping = true;
        let body = Body::new(0.0, config.ground, config.body);
        let gravity = Gravity::grounded_at(config.ground);
        let vitals = Vitals::new(100.0, Duration::from_secs(1));

        let now = Duration::from_secs(7);
        let (pose, _) = pose_tick(&mut character, &body, &gravity, &vitals, &config, now);
        assert!(!character.jumping);
        assert_eq!(character.idle_since, Duration::from_secs(7));
        assert_eq!(pose, AnimationSet::Idle);
    }
}
