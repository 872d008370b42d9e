//! Player module - the character, its controls, motion and poses.

mod animation;
mod components;
mod input;
mod motion;
mod plugin;

pub use animation::{pose_tick, select_pose, PoseInput};
pub use components::*;
pub use input::{Action, Controls};
pub use motion::{camera_x, drive};
pub use plugin::PlayerPlugin;
