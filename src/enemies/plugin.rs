//! Enemy plugin - registers chicken and boss systems.

use bevy::prelude::*;

use super::boss::{boss_think, boss_windows, play_boss_death};
use super::chicken::{animate_chickens, walk_chickens};
use crate::core::{concern_due, Concern, SimSet};

/// Enemy plugin - handles chicken movement, boss AI and enemy animations.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(
                FixedUpdate,
                walk_chickens
                    .run_if(concern_due(Concern::Motion))
                    .in_set(SimSet::Motion),
            )
            // Decisions on the AI cadence, deadlines every base tick
            .add_systems(
                FixedUpdate,
                (
                    boss_think.run_if(concern_due(Concern::BossAi)),
                    boss_windows,
                )
                    .chain()
                    .in_set(SimSet::Ai),
            )
            .add_systems(
                FixedUpdate,
                (
                    animate_chickens.run_if(concern_due(Concern::Animation)),
                    play_boss_death.run_if(concern_due(Concern::DeathFrames)),
                )
                    .in_set(SimSet::Animation),
            );
    }
}
