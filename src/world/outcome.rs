//! End-of-run scheduling and world teardown.

use std::time::Duration;

use bevy::prelude::*;

use crate::core::{GameState, Outcome, RunEnded, SimClock, SoundCue, SoundId};
use crate::enemies::BossBrain;
use crate::physics::{Body, Frozen};
use crate::player::Controls;

/// The run's terminal event: scheduled at most once, resolved at most once.
#[derive(Resource, Debug, Default, Clone)]
pub struct RunOutcome {
    pending: Option<(Outcome, Duration)>,
    resolved: Option<Outcome>,
}

impl RunOutcome {
    /// Schedule the end of the run. The first scheduled outcome wins.
    pub fn schedule(&mut self, outcome: Outcome, at: Duration) -> bool {
        if self.pending.is_some() || self.resolved.is_some() {
            return false;
        }
        self.pending = Some((outcome, at));
        true
    }

    pub fn resolved(&self) -> Option<Outcome> {
        self.resolved
    }

    /// Take the outcome if its time has come.
    fn take_due(&mut self, now: Duration) -> Option<Outcome> {
        match self.pending {
            Some((outcome, at)) if now >= at => {
                self.pending = None;
                self.resolved = Some(outcome);
                Some(outcome)
            }
            _ => None,
        }
    }
}

/// Freeze the world and announce the result once the scheduled time arrives.
pub fn resolve_outcome(
    mut commands: Commands,
    mut clock: ResMut<SimClock>,
    mut outcome: ResMut<RunOutcome>,
    mut controls: ResMut<Controls>,
    mut bodies: Query<(Entity, &mut Body)>,
    mut brains: Query<&mut BossBrain>,
    mut sounds: EventWriter<SoundCue>,
    mut ended: EventWriter<RunEnded>,
    next_state: Option<ResMut<NextState<GameState>>>,
) {
    let Some(result) = outcome.take_due(clock.now()) else {
        return;
    };
    info!("Run ended: {:?} at {:?}", result, clock.now());

    clock.freeze();
    controls.block();
    for (entity, mut body) in bodies.iter_mut() {
        body.halt();
        commands.entity(entity).insert(Frozen);
    }
    for mut brain in brains.iter_mut() {
        brain.stand_down();
    }

    sounds.send(SoundCue::StopAll);
    sounds.send(SoundCue::Play(match result {
        Outcome::Won => SoundId::GameWin,
        Outcome::Lost => SoundId::GameOver,
    }));
    ended.send(RunEnded { outcome: result });

    if let Some(mut next_state) = next_state {
        next_state.set(match result {
            Outcome::Won => GameState::Won,
            Outcome::Lost => GameState::Lost,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_outcome_wins_and_resolves_once() {
        let mut outcome = RunOutcome::default();
        assert!(outcome.schedule(Outcome::Won, Duration::from_millis(1600)));
        assert!(!outcome.schedule(Outcome::Lost, Duration::from_millis(100)));
        assert_eq!(outcome.take_due(Duration::from_millis(1599)), None);
        assert_eq!(outcome.take_due(Duration::from_millis(1600)), Some(Outcome::Won));
        assert_eq!(outcome.take_due(Duration::from_millis(5000)), None);
        assert!(!outcome.schedule(Outcome::Lost, Duration::from_millis(6000)));
        assert_eq!(outcome.resolved(), Some(Outcome::Won));
    }
}
