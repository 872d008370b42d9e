//! Sound plugin - turns [`SoundCue`] messages into kira playback.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;
use bevy_kira_audio::AudioSource as Clip;

use super::settings::{AudioSettings, SETTINGS_PATH};
use crate::core::{SoundCue, SoundId};

/// Plays cues on the main channel. Needs `bevy_kira_audio::AudioPlugin`.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AudioSettings::load())
            .init_resource::<ActiveLoops>()
            .add_systems(Startup, (load_sounds, apply_initial_mute))
            .add_systems(Update, play_cues);
    }
}

/// One loaded clip per sound.
#[derive(Resource, Default)]
pub struct SoundBank {
    clips: HashMap<SoundId, Handle<Clip>>,
}

impl SoundBank {
    pub fn get(&self, id: SoundId) -> Option<Handle<Clip>> {
        self.clips.get(&id).cloned()
    }
}

/// Instances started through [`SoundCue::Loop`], keyed by sound.
#[derive(Resource, Default)]
pub struct ActiveLoops(HashMap<SoundId, Handle<AudioInstance>>);

impl ActiveLoops {
    pub fn contains(&self, id: SoundId) -> bool {
        self.0.contains_key(&id)
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    let clips = SoundId::ALL
        .iter()
        .map(|id| (*id, asset_server.load(id.path())))
        .collect();
    commands.insert_resource(SoundBank { clips });
}

fn channel_volume(muted: bool) -> f64 {
    if muted {
        0.0
    } else {
        1.0
    }
}

fn apply_initial_mute(audio: Res<Audio>, settings: Res<AudioSettings>) {
    audio.set_volume(channel_volume(settings.muted));
}

fn stop_instance(instances: &mut Assets<AudioInstance>, handle: &Handle<AudioInstance>) {
    if let Some(instance) = instances.get_mut(handle) {
        instance.stop(AudioTween::default());
    }
}

fn play_cues(
    mut cues: EventReader<SoundCue>,
    audio: Res<Audio>,
    bank: Option<Res<SoundBank>>,
    mut loops: ResMut<ActiveLoops>,
    mut instances: ResMut<Assets<AudioInstance>>,
    mut settings: ResMut<AudioSettings>,
) {
    let Some(bank) = bank else {
        return;
    };

    for cue in cues.read() {
        match *cue {
            SoundCue::Play(id) => {
                if let Some(clip) = bank.get(id) {
                    audio.play(clip).with_volume(id.volume());
                }
            }
            SoundCue::Loop(id) => {
                if loops.contains(id) {
                    continue;
                }
                if let Some(clip) = bank.get(id) {
                    let handle = audio.play(clip).with_volume(id.volume()).looped().handle();
                    loops.0.insert(id, handle);
                }
            }
            SoundCue::Stop(id) => {
                if let Some(handle) = loops.0.remove(&id) {
                    stop_instance(&mut instances, &handle);
                }
            }
            SoundCue::StopAll => {
                audio.stop();
                loops.0.clear();
            }
            SoundCue::SetMuted(muted) => {
                if settings.muted == muted {
                    continue;
                }
                settings.muted = muted;
                audio.set_volume(channel_volume(muted));
                info!("Sound {}", if muted { "muted" } else { "unmuted" });
                if let Err(e) = settings.save(SETTINGS_PATH) {
                    warn!("{}", e);
                }
            }
        }
    }
}
