//! Combat module - vitals, contacts, bottles and pickups.

mod collision;
mod components;
mod plugin;
mod systems;

pub use collision::{adjudicate_contact, is_stomp, knock_back, Contact};
pub use components::*;
pub use plugin::CombatPlugin;
