//! Enemy-related components.

use std::time::Duration;

use bevy::prelude::*;

/// Boss behavior state.
///
/// The hurt flinch is not a mode; it overlays whatever mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BossMode {
    /// Character out of range, boss stands its ground.
    #[default]
    Patrol,
    /// Character in range, boss walks toward it.
    AggroWalk,
    /// Inside the attack window; melee contact hurts.
    Attacking,
    /// Terminal.
    Dead,
}

/// Boss AI memory. The attack window is the single source of truth for melee.
#[derive(Component, Debug, Clone, Default)]
pub struct BossBrain {
    pub mode: BossMode,
    pub last_attack_at: Option<Duration>,
    pub attack_ends_at: Option<Duration>,
    /// Enrage state captured when the current attack started.
    pub attack_enraged: bool,
    pub chain_at: Option<Duration>,
}

impl BossBrain {
    pub fn is_attacking(&self) -> bool {
        self.mode == BossMode::Attacking
    }

    pub fn is_dead(&self) -> bool {
        self.mode == BossMode::Dead
    }

    /// Drop pending windows and lock the brain; used on teardown.
    pub fn stand_down(&mut self) {
        self.mode = BossMode::Dead;
        self.attack_ends_at = None;
        self.chain_at = None;
    }
}

/// Marker for chickens that walk toward the left edge.
#[derive(Component, Debug, Default)]
pub struct Walker;
