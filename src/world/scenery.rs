//! Ambient motion: drifting clouds and spinning pickups.

use bevy::prelude::*;

use crate::core::{Actor, AnimationSet, Animator, GameConfig, SceneryKind};
use crate::physics::{Body, Frozen};

pub fn drift_clouds(
    config: Res<GameConfig>,
    mut query: Query<(&Actor, &mut Body), Without<Frozen>>,
) {
    for (actor, mut body) in query.iter_mut() {
        if *actor != Actor::Scenery(SceneryKind::Cloud) {
            continue;
        }
        body.x -= body.speed;
        if body.x < -body.width {
            body.x = config.level.cloud_wrap_x;
        }
    }
}

pub fn animate_pickups(mut query: Query<(&Actor, &mut Animator), Without<Frozen>>) {
    for (actor, mut animator) in query.iter_mut() {
        if matches!(actor, Actor::Pickup(_)) {
            animator.select(AnimationSet::Spin);
        }
    }
}
