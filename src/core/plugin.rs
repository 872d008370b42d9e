//! Core plugin that sets up game states, events, tuning and the scheduler.

use bevy::prelude::*;

use super::clock::*;
use super::config::GameConfig;
use super::events::*;
use super::rng::SimRng;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (StartScreen, Playing, Won, Lost)
/// - Messages for sound, HUD bars and run endings
/// - Tuning, random source and the fixed-tick scheduler
///
/// A [`GameConfig`] inserted before this plugin is kept as is, otherwise the
/// tuning file is loaded.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::load());
        }
        let config = app.world().resource::<GameConfig>().clone();

        app
            .init_state::<GameState>()

            // Collaborator messages
            .add_event::<SoundCue>()
            .add_event::<BarUpdate>()
            .add_event::<RunEnded>()

            // Scheduler
            .insert_resource(Time::<Fixed>::from_duration(config.cadence.base_step()))
            .init_resource::<SimClock>()
            .insert_resource(SimSchedule::new(&config.cadence))
            .insert_resource(SimRng::new(config.seed))
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Physics,
                    SimSet::Motion,
                    SimSet::Combat,
                    SimSet::Ai,
                    SimSet::Spawning,
                    SimSet::Animation,
                    SimSet::Resolution,
                )
                    .chain()
                    .run_if(simulation_active),
            )
            .add_systems(FixedPreUpdate, advance_sim_clock)
            .add_systems(OnExit(GameState::Playing), stop_clock);
    }
}

/// The clock only runs while playing; frozen worlds stay frozen.
fn stop_clock(mut clock: ResMut<SimClock>) {
    clock.stop();
}
