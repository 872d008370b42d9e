//! Core module - states, events, tuning and the simulation scheduler.
//!
//! This module provides the foundation that all other game systems build upon.

mod actor;
mod animation;
mod clock;
mod config;
mod error;
mod events;
mod plugin;
mod rng;
mod states;

pub use actor::*;
pub use animation::*;
pub use clock::*;
pub use config::*;
pub use error::ConfigError;
pub use events::*;
pub use plugin::CorePlugin;
pub use rng::SimRng;
pub use states::*;
