//! Vertical integration with ground snapping.

use bevy::prelude::*;

use super::components::{Body, Frozen, Gravity};
use crate::combat::Projectile;
use crate::core::{SimClock, SoundCue, SoundId};

/// One gravity step. Returns true when the body snapped onto its ground.
pub fn gravity_tick(body: &mut Body, gravity: &Gravity) -> bool {
    let airborne = body.y < gravity.ground || gravity.always_airborne;
    if airborne || body.speed_y > 0.0 {
        body.y -= body.speed_y;
        body.speed_y -= body.acceleration;
    }
    if body.y >= gravity.ground && body.speed_y <= 0.0 {
        body.y = gravity.ground;
        body.speed_y = 0.0;
        return true;
    }
    false
}

/// Whether a body currently rests above its ground.
pub fn is_airborne(body: &Body, gravity: &Gravity) -> bool {
    gravity.always_airborne || body.y < gravity.ground
}

pub fn apply_gravity(
    clock: Res<SimClock>,
    mut query: Query<(&mut Body, &Gravity, Option<&mut Projectile>), Without<Frozen>>,
    mut sounds: EventWriter<SoundCue>,
) {
    for (mut body, gravity, projectile) in query.iter_mut() {
        let landed = gravity_tick(&mut body, gravity);
        if !landed {
            continue;
        }
        if let Some(mut projectile) = projectile {
            if projectile.impact(&mut body, clock.now()) {
                sounds.send(SoundCue::Play(SoundId::BottleSplash));
            }
        }
    }
}
