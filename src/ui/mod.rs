//! UI module - start and end overlays plus the HUD bars.

mod hud;
mod plugin;

pub use hud::{bar_bucket, BarFill, HudBars};
pub use plugin::UiPlugin;
