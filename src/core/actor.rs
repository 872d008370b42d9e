//! The tag every simulated entity carries.
//!
//! Shared data (body, gravity, vitals) lives in components; per-kind behavior
//! is chosen by matching on [`Actor`].

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Character,
    Enemy(EnemyKind),
    Projectile,
    Pickup(PickupKind),
    Scenery(SceneryKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    NormalChicken,
    SmallChicken,
    BossChicken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupKind {
    Coin,
    Bottle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneryKind {
    /// Backdrop segment; the layer index picks the image
    Backdrop { layer: u8, variant: u8 },
    Cloud,
}
