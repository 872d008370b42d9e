//! Headless app for driving the simulation in tests.

use std::time::Duration;

use bevy::ecs::event::Events;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::core::{advance_world, GameConfig, SimClock};
use crate::SimulationPlugin;

pub struct Harness {
    pub app: App,
    step: Duration,
}

impl Harness {
    /// Seeded and with both spawners silenced.
    pub fn quiet_config() -> GameConfig {
        let mut config = GameConfig {
            seed: Some(7),
            ..default()
        };
        config.spawner.enemy_probability = 0.0;
        config.spawner.bottle_cap = 0;
        config
    }

    pub fn new(config: GameConfig) -> Self {
        let step = config.cadence.base_step();
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .insert_resource(config)
            .add_plugins(SimulationPlugin);
        app.world_mut().resource_mut::<SimClock>().start();
        Self { app, step }
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn spawn(&mut self, bundle: impl Bundle) -> Entity {
        self.world_mut().spawn(bundle).id()
    }

    pub fn now(&self) -> Duration {
        self.world().resource::<SimClock>().now()
    }

    /// One base tick.
    pub fn step(&mut self) {
        let step = self.step;
        advance_world(self.world_mut(), step);
        self.world_mut().run_schedule(FixedUpdate);
    }

    /// Step until the clock reads `at` (or stops advancing).
    pub fn run_until(&mut self, at: Duration) {
        while self.now() < at {
            let before = self.now();
            self.step();
            if self.now() == before {
                break;
            }
        }
    }

    pub fn get<C: Component>(&self, entity: Entity) -> &C {
        self.world()
            .get::<C>(entity)
            .expect("component present on entity")
    }

    pub fn get_mut<C: Component>(&mut self, entity: Entity) -> Mut<'_, C> {
        self.world_mut()
            .get_mut::<C>(entity)
            .expect("component present on entity")
    }

    pub fn exists(&self, entity: Entity) -> bool {
        self.world().entities().contains(entity)
    }

    pub fn count<C: Component>(&mut self) -> usize {
        let mut query = self.world_mut().query_filtered::<Entity, With<C>>();
        query.iter(self.world()).count()
    }

    /// Take every event of type `E` sent so far.
    pub fn drain<E: Event>(&mut self) -> Vec<E> {
        self.world_mut().resource_mut::<Events<E>>().drain().collect()
    }
}
