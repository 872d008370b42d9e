//! World module - level population, spawners and the end of a run.

mod level;
mod outcome;
mod plugin;
mod scenery;
mod spawner;
mod spawning;

#[cfg(test)]
mod scenarios;

pub use level::{initial_bars, populate_level, CameraOffset, LevelEntity, BACKDROP_LAYERS};
pub use outcome::RunOutcome;
pub use plugin::WorldPlugin;
pub use spawner::{roll_bottle_spawn, roll_enemy_spawn};
pub use spawning::*;
