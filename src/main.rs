//! El Pollo Loco - Entry Point
//!
//! Controls:
//! - A / Left, D / Right: Walk
//! - Space: Jump
//! - F: Throw a bottle
//! - M: Mute
//! - Enter: Start, R: Restart after a run

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins, with Bevy's own audio replaced by kira
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "El Pollo Loco".to_string(),
                        resolution: (720.0, 480.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest())
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Audio
        .add_plugins(bevy_kira_audio::AudioPlugin)

        // Our game plugin
        .add_plugins(el_pollo_loco::PolloLocoPlugin)

        .run();
}
