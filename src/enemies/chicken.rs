//! Chicken walking and animation.

use bevy::prelude::*;

use super::components::Walker;
use crate::core::{AnimationSet, Animator};
use crate::physics::{Body, Frozen};

/// Chickens walk left at their own pace.
pub fn walk_chickens(mut query: Query<&mut Body, (With<Walker>, Without<Frozen>)>) {
    for mut body in query.iter_mut() {
        body.x -= body.speed;
    }
}

pub fn animate_chickens(mut query: Query<&mut Animator, (With<Walker>, Without<Frozen>)>) {
    for mut animator in query.iter_mut() {
        animator.select(AnimationSet::Walk);
    }
}
