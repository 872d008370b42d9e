//! Enemies module - chickens and the boss.

mod boss;
mod chicken;
mod components;
mod plugin;

pub use boss::{boss_win_at, is_enraged, move_toward, poll_windows, think};
pub use components::*;
pub use plugin::EnemyPlugin;
