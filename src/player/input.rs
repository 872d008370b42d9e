//! Keyboard to logical control flags.
//!
//! The simulation only ever reads [`Controls`]; raw key events never reach it.

use bevy::prelude::*;

use super::components::Character;
use crate::core::SoundCue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Throw,
}

impl Action {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Action::MoveLeft),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Action::MoveRight),
            KeyCode::Space => Some(Action::Jump),
            KeyCode::KeyF => Some(Action::Throw),
            _ => None,
        }
    }
}

/// The four logical flags plus the global block.
#[derive(Resource, Debug, Default, Clone)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub throw: bool,
    blocked: bool,
}

impl Controls {
    pub fn press(&mut self, action: Action) {
        self.set(action, true);
    }

    /// Returns true when this release left no movement direction held.
    pub fn release(&mut self, action: Action) -> bool {
        if self.blocked {
            return false;
        }
        self.set(action, false);
        matches!(action, Action::MoveLeft | Action::MoveRight) && !self.left && !self.right
    }

    /// Clear every flag and ignore writes until unblocked.
    pub fn block(&mut self) {
        *self = Self {
            blocked: true,
            ..default()
        };
    }

    pub fn unblock(&mut self) {
        self.blocked = false;
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    fn set(&mut self, action: Action, value: bool) {
        if self.blocked {
            return;
        }
        match action {
            Action::MoveLeft => self.left = value,
            Action::MoveRight => self.right = value,
            Action::Jump => self.jump = value,
            Action::Throw => self.throw = value,
        }
    }
}

/// Translate this frame's key presses and releases into control flags.
pub fn read_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut controls: ResMut<Controls>,
    mut characters: Query<&mut Character>,
    mut sounds: EventWriter<SoundCue>,
) {
    for action in keyboard.get_just_pressed().filter_map(|k| Action::from_key(*k)) {
        controls.press(action);
    }

    let mut walking_stopped = false;
    for action in keyboard.get_just_released().filter_map(|k| Action::from_key(*k)) {
        walking_stopped |= controls.release(action);
    }

    if walking_stopped {
        let mut cues = Vec::new();
        for mut character in characters.iter_mut() {
            character.stop_walking_sound(&mut cues);
        }
        sounds.send_batch(cues);
    }
}
