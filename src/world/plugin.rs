//! World plugin - run lifecycle, level population, spawners and end of run.

use bevy::prelude::*;

use super::level::{initial_bars, populate_level, CameraOffset, LevelEntity};
use super::outcome::{resolve_outcome, RunOutcome};
use super::scenery::{animate_pickups, drift_clouds};
use super::spawner::{spawn_bottles, spawn_enemies};
use crate::core::{
    concern_due, BarUpdate, Concern, GameConfig, GameState, SimClock, SimRng, SimSchedule, SimSet,
    SoundCue, SoundId,
};
use crate::player::Controls;

/// World plugin - builds a fresh world every time a run starts.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunOutcome>()
            .init_resource::<CameraOffset>()
            .add_systems(
                OnEnter(GameState::Playing),
                (cleanup_level, reset_run, setup_level).chain(),
            )
            .add_systems(
                FixedUpdate,
                drift_clouds
                    .run_if(concern_due(Concern::Motion))
                    .in_set(SimSet::Motion),
            )
            .add_systems(
                FixedUpdate,
                (
                    spawn_enemies.run_if(concern_due(Concern::EnemySpawn)),
                    spawn_bottles.run_if(concern_due(Concern::BottleSpawn)),
                )
                    .in_set(SimSet::Spawning),
            )
            .add_systems(
                FixedUpdate,
                animate_pickups
                    .run_if(concern_due(Concern::Animation))
                    .in_set(SimSet::Animation),
            )
            .add_systems(FixedUpdate, resolve_outcome.in_set(SimSet::Resolution));
    }
}

/// Despawn everything left over from the previous run.
fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Restart the clock and clear per-run state.
fn reset_run(
    mut clock: ResMut<SimClock>,
    mut schedule: ResMut<SimSchedule>,
    mut outcome: ResMut<RunOutcome>,
    mut controls: ResMut<Controls>,
    mut camera: ResMut<CameraOffset>,
    mut sounds: EventWriter<SoundCue>,
) {
    clock.start();
    schedule.reset();
    *outcome = RunOutcome::default();
    *controls = Controls::default();
    *camera = CameraOffset::default();
    sounds.send(SoundCue::StopAll);
    sounds.send(SoundCue::Loop(SoundId::Background));
}

/// Populate the level for a new run.
pub fn setup_level(
    mut commands: Commands,
    config: Res<GameConfig>,
    clock: Res<SimClock>,
    mut rng: ResMut<SimRng>,
    mut camera: ResMut<CameraOffset>,
    mut bars: EventWriter<BarUpdate>,
) {
    populate_level(&mut commands, &config, &mut rng, clock.now());
    camera.x = -config.character.spawn_x + config.character.camera_anchor;
    bars.send_batch(initial_bars(&config));
    info!("Level built, boss waiting at x={}", config.boss.spawn_x);
}
