//! Mute preference persisted between sessions.

use std::fs;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the preference is kept, relative to the working directory.
pub const SETTINGS_PATH: &str = "settings.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// Audio preferences; absent file means sound on.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub muted: bool,
}

impl AudioSettings {
    pub fn load() -> Self {
        match Self::try_load(SETTINGS_PATH) {
            Ok(settings) => settings,
            Err(SettingsError::Io { .. }) => Self::default(),
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &str) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_ron(path, &contents)
    }

    pub fn from_ron(path: &str, contents: &str) -> Result<Self, SettingsError> {
        ron::from_str(contents).map_err(|source| SettingsError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    pub fn save(&self, path: &str) -> Result<(), SettingsError> {
        let contents = self.to_ron()?;
        fs::write(path, contents).map_err(|source| SettingsError::Io {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_flag_survives_a_save() {
        let settings = AudioSettings { muted: true };
        let text = settings.to_ron().expect("serializes");
        let back = AudioSettings::from_ron("inline", &text).expect("parses");
        assert_eq!(back, settings);
    }

    #[test]
    fn empty_struct_defaults_to_sound_on() {
        let settings = AudioSettings::from_ron("inline", "()").expect("parses");
        assert!(!settings.muted);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AudioSettings::try_load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
