//! The single fixed-tick scheduler that drives the simulation.
//!
//! Bevy's `FixedUpdate` runs at the base step; every simulation concern has
//! its own repeating timer in [`SimSchedule`] and only runs on the base ticks
//! where that timer fires. Stopping or freezing the [`SimClock`] therefore
//! halts every concern at once.

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;

use super::config::CadenceConfig;

/// Simulation time, independent of wall-clock time.
#[derive(Resource, Debug, Default, Clone)]
pub struct SimClock {
    now: Duration,
    running: bool,
    frozen: bool,
}

impl SimClock {
    /// Reset to zero and start ticking.
    pub fn start(&mut self) {
        *self = Self {
            now: Duration::ZERO,
            running: true,
            frozen: false,
        };
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Terminal for the current run; only [`start`](Self::start) undoes it.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_active(&self) -> bool {
        self.running && !self.frozen
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Time elapsed since `instant`, zero for instants in the future.
    pub fn since(&self, instant: Duration) -> Duration {
        self.now.saturating_sub(instant)
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.is_active() {
            self.now += delta;
        }
    }
}

/// Each independently paced simulation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    Gravity,
    Motion,
    Flight,
    Contact,
    Throw,
    Pickup,
    BossAi,
    Animation,
    DeathFrames,
    Splash,
    EnemySpawn,
    BottleSpawn,
}

impl Concern {
    pub const ALL: [Concern; 12] = [
        Concern::Gravity,
        Concern::Motion,
        Concern::Flight,
        Concern::Contact,
        Concern::Throw,
        Concern::Pickup,
        Concern::BossAi,
        Concern::Animation,
        Concern::DeathFrames,
        Concern::Splash,
        Concern::EnemySpawn,
        Concern::BottleSpawn,
    ];

    pub fn period(self, cadence: &CadenceConfig) -> Duration {
        let ms = |v: u64| Duration::from_millis(v.max(1));
        match self {
            Concern::Gravity => ms(cadence.gravity_ms),
            Concern::Motion => Duration::from_secs_f64(1.0 / cadence.motion_hz.max(1.0)),
            Concern::Flight => ms(cadence.flight_ms),
            Concern::Contact => ms(cadence.contact_ms),
            Concern::Throw => ms(cadence.throw_ms),
            Concern::Pickup => ms(cadence.pickup_ms),
            Concern::BossAi => ms(cadence.boss_ai_ms),
            Concern::Animation => ms(cadence.animation_ms),
            Concern::DeathFrames => ms(cadence.death_frame_ms),
            Concern::Splash => ms(cadence.splash_frame_ms),
            Concern::EnemySpawn => ms(cadence.enemy_spawn_ms),
            Concern::BottleSpawn => ms(cadence.bottle_spawn_ms),
        }
    }
}

/// Repeating timers, one per concern.
#[derive(Resource, Debug)]
pub struct SimSchedule {
    timers: HashMap<Concern, Timer>,
}

impl SimSchedule {
    pub fn new(cadence: &CadenceConfig) -> Self {
        let timers = Concern::ALL
            .into_iter()
            .map(|c| (c, Timer::new(c.period(cadence), TimerMode::Repeating)))
            .collect();
        Self { timers }
    }

    pub fn tick(&mut self, delta: Duration) {
        for timer in self.timers.values_mut() {
            timer.tick(delta);
        }
    }

    /// Whether the concern fires on the current base tick.
    pub fn is_due(&self, concern: Concern) -> bool {
        self.timers
            .get(&concern)
            .is_some_and(|timer| timer.just_finished())
    }

    pub fn reset(&mut self) {
        for timer in self.timers.values_mut() {
            timer.reset();
        }
    }
}

/// Ordering of the simulation inside one base tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Gravity and projectile flight
    Physics,
    /// Input-driven character motion and ambient movement
    Motion,
    /// Contacts, throws, projectile hits, pickups
    Combat,
    /// Boss decisions and attack windows
    Ai,
    Spawning,
    Animation,
    /// Death delays, win/lose, teardown
    Resolution,
}

/// Run condition: the clock is running and the world is not frozen.
pub fn simulation_active(clock: Option<Res<SimClock>>) -> bool {
    clock.is_some_and(|clock| clock.is_active())
}

/// Run condition: the concern's timer fired on this base tick.
pub fn concern_due(concern: Concern) -> impl FnMut(Res<SimSchedule>) -> bool + Clone {
    move |schedule: Res<SimSchedule>| schedule.is_due(concern)
}

/// Advance simulation time by the fixed step.
pub fn advance_sim_clock(
    time: Res<Time>,
    mut clock: ResMut<SimClock>,
    mut schedule: ResMut<SimSchedule>,
) {
    advance_by(&mut clock, &mut schedule, time.delta());
}

/// Advance simulation time outside of Bevy's fixed loop.
pub fn advance_world(world: &mut World, delta: Duration) {
    world.resource_scope(|world, mut schedule: Mut<SimSchedule>| {
        let mut clock = world.resource_mut::<SimClock>();
        advance_by(&mut clock, &mut schedule, delta);
    });
}

fn advance_by(clock: &mut SimClock, schedule: &mut SimSchedule, delta: Duration) {
    if !clock.is_active() {
        return;
    }
    clock.advance(delta);
    schedule.tick(delta);
}
