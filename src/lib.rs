//! El Pollo Loco - a 2D side-scroller about a man, his salsa bottles and a
//! very large chicken.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, collaborator messages, tuning, the fixed-tick scheduler
//! - **Physics**: Bodies, hitboxes, gravity
//! - **Player**: Controls, character motion and poses
//! - **Enemies**: Chickens and the boss AI
//! - **Combat**: Contacts, stomps, bottles, pickups
//! - **World**: Level population, spawners, end of run
//! - **UI**: Overlays and HUD bars
//! - **Audio**: Sound playback and the persisted mute flag
//! - **Rendering**: Sprites and camera
//!
//! The first six make up [`SimulationPlugin`], which runs headless. The rest
//! only read simulation state or consume its messages.

pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

#[cfg(test)]
mod testing;

use bevy::prelude::*;

/// The world simulation without any presentation.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            .add_plugins(physics::PhysicsPlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(world::WorldPlugin);
    }
}

/// Main game plugin that adds all sub-plugins.
pub struct PolloLocoPlugin;

impl Plugin for PolloLocoPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SimulationPlugin)
            .add_plugins(audio::SoundPlugin)
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(ui::UiPlugin);
    }
}
