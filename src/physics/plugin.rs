//! Physics plugin - gravity on its own cadence.

use bevy::prelude::*;

use super::gravity::apply_gravity;
use crate::core::{concern_due, Concern, SimSet};

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            apply_gravity
                .run_if(concern_due(Concern::Gravity))
                .in_set(SimSet::Physics),
        );
    }
}
