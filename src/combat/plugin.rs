//! Combat plugin - contact, throw, projectile and pickup cadences.

use bevy::prelude::*;

use super::systems::*;
use crate::core::{concern_due, Concern, SimSet};

/// Combat plugin - handles all character/enemy/projectile interactions.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app
            // Bottle flight shares the physics stage with gravity
            .add_systems(
                FixedUpdate,
                fly_projectiles
                    .run_if(concern_due(Concern::Flight))
                    .in_set(SimSet::Physics),
            )
            // Chained so removals land before the next check runs
            .add_systems(
                FixedUpdate,
                (
                    resolve_contacts.run_if(concern_due(Concern::Contact)),
                    dispatch_throws.run_if(concern_due(Concern::Throw)),
                    resolve_projectile_hits.run_if(concern_due(Concern::Throw)),
                    collect_pickups.run_if(concern_due(Concern::Pickup)),
                )
                    .chain()
                    .in_set(SimSet::Combat),
            )
            .add_systems(
                FixedUpdate,
                play_splash
                    .run_if(concern_due(Concern::Splash))
                    .in_set(SimSet::Animation),
            );
    }
}
