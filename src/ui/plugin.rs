//! UI plugin - start screen, end-of-run overlays and global keys.

use bevy::prelude::*;

use super::hud;
use crate::audio::AudioSettings;
use crate::core::{GameState, SoundCue};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);

        app
            // Start screen
            .add_systems(OnEnter(GameState::StartScreen), setup_start_screen)
            .add_systems(Update, start_input.run_if(in_state(GameState::StartScreen)))
            .add_systems(OnExit(GameState::StartScreen), cleanup_overlay)

            // End of run
            .add_systems(OnEnter(GameState::Won), |commands: Commands| {
                setup_end_overlay(commands, Outro::Won)
            })
            .add_systems(OnEnter(GameState::Lost), |commands: Commands| {
                setup_end_overlay(commands, Outro::Lost)
            })
            .add_systems(
                Update,
                restart_input.run_if(in_state(GameState::Won).or(in_state(GameState::Lost))),
            )
            .add_systems(OnExit(GameState::Won), cleanup_overlay)
            .add_systems(OnExit(GameState::Lost), cleanup_overlay)

            // Anywhere
            .add_systems(Update, mute_input);
    }
}

/// Marker for full-screen overlay entities.
#[derive(Component)]
struct OverlayUi;

#[derive(Clone, Copy)]
enum Outro {
    Won,
    Lost,
}

fn overlay_root(commands: &mut Commands, background: Color) -> Entity {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(background),
            OverlayUi,
        ))
        .id()
}

fn spawn_line(parent: &mut ChildBuilder, text: &str, size: f32, color: Color, gap: f32) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(gap)),
            ..default()
        },
    ));
}

fn setup_start_screen(mut commands: Commands) {
    let root = overlay_root(&mut commands, Color::srgb(0.98, 0.8, 0.45));
    commands.entity(root).with_children(|parent| {
        spawn_line(parent, "EL POLLO LOCO", 64.0, Color::srgb(0.55, 0.15, 0.05), 40.0);
        spawn_line(parent, "Press ENTER to start", 24.0, Color::srgb(0.2, 0.1, 0.05), 30.0);
        spawn_line(
            parent,
            "A/D or arrows: walk   SPACE: jump   F: throw   M: mute",
            16.0,
            Color::srgb(0.3, 0.2, 0.1),
            0.0,
        );
    });
}

fn setup_end_overlay(mut commands: Commands, outro: Outro) {
    let (title, color) = match outro {
        Outro::Won => ("YOU WON", Color::srgb(0.95, 0.8, 0.2)),
        Outro::Lost => ("GAME OVER", Color::srgb(0.8, 0.2, 0.2)),
    };
    let root = overlay_root(&mut commands, Color::srgba(0.0, 0.0, 0.0, 0.6));
    commands.entity(root).with_children(|parent| {
        spawn_line(parent, title, 72.0, color, 50.0);
        spawn_line(parent, "Press R to play again", 24.0, Color::srgb(0.85, 0.85, 0.85), 0.0);
    });
}

fn start_input(keys: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<GameState>>) {
    if keys.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
    }
}

fn restart_input(keys: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<GameState>>) {
    if keys.just_pressed(KeyCode::KeyR) {
        info!("Restarting run");
        next_state.set(GameState::Playing);
    }
}

fn mute_input(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Option<Res<AudioSettings>>,
    mut sounds: EventWriter<SoundCue>,
) {
    if !keys.just_pressed(KeyCode::KeyM) {
        return;
    }
    let muted = settings.is_some_and(|s| s.muted);
    sounds.send(SoundCue::SetMuted(!muted));
}

fn cleanup_overlay(mut commands: Commands, query: Query<Entity, With<OverlayUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
