//! Rendering plugin - mirrors simulation bodies into sprites.
//!
//! Simulation space has its origin at the top-left of the first screen with
//! y growing downward; Bevy's y grows upward, so every y is negated here.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::transform::TransformSystem;

use super::sprites::{draw_layer, frame_paths};
use crate::core::{Actor, Animator, AnimationSet};
use crate::physics::Body;
use crate::world::CameraOffset;

pub const VIEW_WIDTH: f32 = 720.0;
pub const VIEW_HEIGHT: f32 = 480.0;

/// Rendering plugin - one camera and one sprite per actor.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.98, 0.8, 0.45)))
            .add_systems(Startup, spawn_camera)
            .add_systems(
                PostUpdate,
                (attach_sprites, sync_sprites, follow_camera)
                    .chain()
                    .before(TransformSystem::TransformPropagate),
            );
    }
}

/// Marker for the single world camera.
#[derive(Component)]
pub struct GameCamera;

/// Image currently assigned to a sprite.
#[derive(Component)]
struct ShownFrame(&'static str);

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        GameCamera,
        Transform::from_xyz(VIEW_WIDTH / 2.0, -VIEW_HEIGHT / 2.0, 0.0),
    ));
}

fn attach_sprites(mut commands: Commands, query: Query<(Entity, &Actor, &Body), Added<Actor>>) {
    for (entity, actor, body) in query.iter() {
        commands.entity(entity).insert((
            Sprite {
                custom_size: Some(Vec2::new(body.width, body.height)),
                anchor: Anchor::TopLeft,
                ..default()
            },
            Transform::from_xyz(body.x, -body.y, draw_layer(*actor)),
        ));
    }
}

fn sync_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut query: Query<(
        Entity,
        &Actor,
        &Body,
        Option<&Animator>,
        Option<&ShownFrame>,
        &mut Sprite,
        &mut Transform,
    )>,
) {
    for (entity, actor, body, animator, shown, mut sprite, mut transform) in query.iter_mut() {
        transform.translation.x = body.x;
        transform.translation.y = -body.y;
        sprite.flip_x = body.mirrored;

        let set = animator.map_or(AnimationSet::Idle, |a| a.set);
        let frames = frame_paths(*actor, set);
        let index = animator.map_or(0, |a| a.frame(frames.len()));
        let Some(path) = frames.get(index).copied() else {
            continue;
        };
        if shown.is_some_and(|s| s.0 == path) {
            continue;
        }
        sprite.image = asset_server.load(path);
        commands.entity(entity).insert(ShownFrame(path));
    }
}

/// The offset is the world translation applied before drawing, so the camera
/// sits at its negation.
fn follow_camera(offset: Res<CameraOffset>, mut cameras: Query<&mut Transform, With<GameCamera>>) {
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    transform.translation.x = -offset.x + VIEW_WIDTH / 2.0;
}
