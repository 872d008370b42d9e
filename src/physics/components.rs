//! Position, size and hitbox data shared by every simulated entity.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::BodySpec;

/// Rectangle narrowing the hitbox relative to the sprite box.
///
/// `x`/`y` move the top-left corner in, `width`/`height` shrink the box.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub struct Inset {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Inset {
    pub const ZERO: Inset = Inset::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Axis-aligned box in world coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Strict overlap on both axes; touching edges do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}

/// Kinematic state of an entity.
#[derive(Component, Clone, Debug)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal step per movement tick
    pub speed: f32,
    /// Upward positive
    pub speed_y: f32,
    pub acceleration: f32,
    pub inset: Inset,
    /// Facing left; read by the renderer only.
    pub mirrored: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, spec: BodySpec) -> Self {
        Self {
            x,
            y,
            width: spec.width,
            height: spec.height,
            speed: 0.0,
            speed_y: 0.0,
            acceleration: 0.0,
            inset: spec.inset,
            mirrored: false,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb {
            left: self.x + self.inset.x,
            top: self.y + self.inset.y,
            right: self.x + self.inset.x + self.width - self.inset.width,
            bottom: self.y + self.inset.y + self.height - self.inset.height,
        }
    }

    pub fn collides_with(&self, other: &Body) -> bool {
        self.hitbox().overlaps(&other.hitbox())
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Bottom edge of the sprite box.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Stop all motion for good.
    pub fn halt(&mut self) {
        self.speed = 0.0;
        self.speed_y = 0.0;
        self.acceleration = 0.0;
    }
}

/// Subjects an entity to vertical integration.
#[derive(Component, Clone, Copy, Debug)]
pub struct Gravity {
    /// Y the entity rests at
    pub ground: f32,
    /// Keep integrating even when resting on the ground.
    pub always_airborne: bool,
}

impl Gravity {
    pub fn grounded_at(ground: f32) -> Self {
        Self {
            ground,
            always_airborne: false,
        }
    }

    pub fn airborne_until(ground: f32) -> Self {
        Self {
            ground,
            always_airborne: true,
        }
    }
}

/// Teardown marker; every movement system skips frozen entities.
#[derive(Component, Debug, Default)]
pub struct Frozen;
