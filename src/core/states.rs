//! Game state definitions that control the overall flow of a run.
//!
//! The simulation itself is gated by [`SimClock`](super::SimClock), so a
//! frozen world stays visible behind the win/lose overlays while nothing
//! in it moves.

use bevy::prelude::*;

/// Main game states.
///
/// - Start on the `StartScreen`
/// - `Playing` builds a fresh world every time it is entered
/// - `Won` / `Lost` are entered exactly once per run, after the world froze
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Title screen, waiting for the player to start
    #[default]
    StartScreen,
    /// Active run
    Playing,
    /// Boss defeated
    Won,
    /// Character defeated
    Lost,
}
