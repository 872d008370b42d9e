//! Physics module - bodies, hitboxes and gravity.

mod components;
mod gravity;
mod plugin;

pub use components::*;
pub use gravity::{gravity_tick, is_airborne};
pub use plugin::PhysicsPlugin;
