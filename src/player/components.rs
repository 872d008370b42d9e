//! Player-related components.

use std::time::Duration;

use bevy::prelude::*;

use crate::core::{SoundCue, SoundId};

/// The player character's run state.
///
/// Position and velocity live on [`Body`](crate::physics::Body), energy on
/// [`Vitals`](crate::combat::Vitals).
#[derive(Component, Debug, Clone, Default)]
pub struct Character {
    /// Bottles available to throw
    pub flasks: u32,
    /// Coins collected
    pub tokens: u32,
    pub idle_since: Duration,
    /// Last time the throw key was honored, drives the throw pose.
    pub last_throw: Option<Duration>,
    /// Last time a bottle actually left the hand, drives the cooldown.
    pub last_bottle_at: Option<Duration>,
    pub jumping: bool,
    pub moving: bool,
    /// Moved or jumped since the idle timer last restarted.
    pub was_active: bool,
    pub snoring: bool,
    pub walking_sound: bool,
    pub died_at: Option<Duration>,
}

impl Character {
    pub fn new(flasks: u32, now: Duration) -> Self {
        Self {
            flasks,
            idle_since: now,
            ..default()
        }
    }

    pub fn is_throwing(&self, now: Duration, window: Duration) -> bool {
        self.last_throw
            .is_some_and(|at| now.saturating_sub(at) < window)
    }

    pub fn idle_for(&self, now: Duration) -> Duration {
        now.saturating_sub(self.idle_since)
    }

    pub fn is_dead(&self) -> bool {
        self.died_at.is_some()
    }

    pub fn start_snore(&mut self, cues: &mut Vec<SoundCue>) {
        if !self.snoring {
            self.snoring = true;
            cues.push(SoundCue::Loop(SoundId::Snore));
        }
    }

    pub fn stop_snore(&mut self, cues: &mut Vec<SoundCue>) {
        if self.snoring {
            self.snoring = false;
            cues.push(SoundCue::Stop(SoundId::Snore));
        }
    }

    pub fn start_walking_sound(&mut self, cues: &mut Vec<SoundCue>) {
        if !self.walking_sound {
            self.walking_sound = true;
            cues.push(SoundCue::Loop(SoundId::Walking));
        }
    }

    pub fn stop_walking_sound(&mut self, cues: &mut Vec<SoundCue>) {
        if self.walking_sound {
            self.walking_sound = false;
            cues.push(SoundCue::Stop(SoundId::Walking));
        }
    }

    /// Enter the terminal death state. Returns false if already dead.
    pub fn die(&mut self, now: Duration, cues: &mut Vec<SoundCue>) -> bool {
        if self.died_at.is_some() {
            return false;
        }
        self.died_at = Some(now);
        self.moving = false;
        self.stop_snore(cues);
        self.stop_walking_sound(cues);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snore_cues_are_edge_triggered() {
        let mut character = Character::default();
        let mut cues = Vec::new();
        character.start_snore(&mut cues);
        character.start_snore(&mut cues);
        character.stop_snore(&mut cues);
        character.stop_snore(&mut cues);
        assert_eq!(
            cues,
            vec![SoundCue::Loop(SoundId::Snore), SoundCue::Stop(SoundId::Snore)]
        );
    }

    #[test]
    fn death_happens_once() {
        let mut character = Character::default();
        let mut cues = Vec::new();
        assert!(character.die(Duration::from_secs(3), &mut cues));
        assert!(!character.die(Duration::from_secs(4), &mut cues));
        assert_eq!(character.died_at, Some(Duration::from_secs(3)));
    }
}
