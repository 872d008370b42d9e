//! Input-driven character motion on the 60 Hz cadence.

use std::time::Duration;

use bevy::prelude::*;

use super::components::Character;
use super::input::Controls;
use crate::core::{CharacterConfig, GameConfig, SimClock, SoundCue, SoundId};
use crate::physics::{is_airborne, Body, Frozen, Gravity};
use crate::world::CameraOffset;

/// One motion tick: throw intent, jump, horizontal step, idle bookkeeping.
///
/// Returns the sound cues the tick produced.
pub fn drive(
    character: &mut Character,
    body: &mut Body,
    gravity: &Gravity,
    controls: &Controls,
    config: &CharacterConfig,
    now: Duration,
) -> Vec<SoundCue> {
    let mut cues = Vec::new();
    if character.is_dead() {
        character.stop_snore(&mut cues);
        return cues;
    }

    if controls.throw && character.flasks > 0 {
        character.last_throw = Some(now);
        character.idle_since = now;
        character.stop_snore(&mut cues);
    }

    let can_jump = !is_airborne(body, gravity) && body.speed_y <= 0.0;
    if controls.jump && can_jump {
        body.speed_y = config.jump_speed;
        character.stop_snore(&mut cues);
        character.stop_walking_sound(&mut cues);
        cues.push(SoundCue::Play(SoundId::Jumping));
        character.jumping = true;
        character.idle_since = now;
    }

    let was_moving = character.moving;
    character.moving = false;
    if controls.right && body.x < config.max_x {
        body.x += config.speed;
        body.mirrored = false;
        step_taken(character, body, gravity, was_moving, now, &mut cues);
    }
    if controls.left && body.x > config.min_x {
        body.x -= config.speed;
        body.mirrored = true;
        step_taken(character, body, gravity, was_moving, now, &mut cues);
    }

    let grounded = !is_airborne(body, gravity);
    if !character.moving && grounded && !character.jumping {
        character.stop_walking_sound(&mut cues);
        if character.was_active {
            character.idle_since = now;
            character.was_active = false;
        }
    } else {
        character.stop_snore(&mut cues);
        character.was_active = true;
    }

    cues
}

fn step_taken(
    character: &mut Character,
    body: &Body,
    gravity: &Gravity,
    was_moving: bool,
    now: Duration,
    cues: &mut Vec<SoundCue>,
) {
    character.moving = true;
    if !was_moving {
        character.idle_since = now;
        character.stop_snore(cues);
    }
    if !is_airborne(body, gravity) {
        character.start_walking_sound(cues);
    }
}

/// Where the camera sits so the character stays at a fixed screen X.
pub fn camera_x(body: &Body, config: &CharacterConfig) -> f32 {
    -body.x + config.camera_anchor
}

pub fn move_character(
    clock: Res<SimClock>,
    config: Res<GameConfig>,
    controls: Res<Controls>,
    mut camera: ResMut<CameraOffset>,
    mut query: Query<(&mut Character, &mut Body, &Gravity), Without<Frozen>>,
    mut sounds: EventWriter<SoundCue>,
) {
    for (mut character, mut body, gravity) in query.iter_mut() {
        let cues = drive(
            &mut character,
            &mut body,
            gravity,
            &controls,
            &config.character,
            clock.now(),
        );
        sounds.send_batch(cues);
        camera.x = camera_x(&body, &config.character);
    }
}
