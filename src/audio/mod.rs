//! Audio module - sound cue playback and the persisted mute flag.

mod plugin;
mod settings;

pub use plugin::{ActiveLoops, SoundBank, SoundPlugin};
pub use settings::{AudioSettings, SettingsError, SETTINGS_PATH};
