//! Rendering module - sprites and the side-scrolling camera.

mod plugin;
mod sprites;

pub use plugin::{GameCamera, RenderingPlugin, VIEW_HEIGHT, VIEW_WIDTH};
pub use sprites::{draw_layer, frame_paths};
