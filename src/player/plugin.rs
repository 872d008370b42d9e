//! Player plugin - input, motion and pose systems.

use bevy::input::InputSystem;
use bevy::prelude::*;

use super::animation::{animate_character, play_character_death};
use super::input::{read_keyboard, Controls};
use super::motion::move_character;
use crate::core::{concern_due, Concern, GameState, SimSet};

/// Player plugin - handles keyboard input, character motion and animation.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Controls>()
            .add_systems(
                PreUpdate,
                read_keyboard
                    .after(InputSystem)
                    .run_if(in_state(GameState::Playing))
                    .run_if(resource_exists::<ButtonInput<KeyCode>>),
            )
            .add_systems(
                FixedUpdate,
                move_character
                    .run_if(concern_due(Concern::Motion))
                    .in_set(SimSet::Motion),
            )
            .add_systems(
                FixedUpdate,
                (
                    animate_character.run_if(concern_due(Concern::Animation)),
                    play_character_death.run_if(concern_due(Concern::DeathFrames)),
                )
                    .in_set(SimSet::Animation),
            );
    }
}
