//! Combat-related components.

use std::time::Duration;

use bevy::prelude::*;

use crate::physics::Body;

/// What a damage call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    /// Dead already, or still inside the hurt window
    Ignored,
    Hurt,
    Killed,
}

/// Energy plus the post-hit window.
#[derive(Component, Debug, Clone)]
pub struct Vitals {
    pub energy: f32,
    pub max: f32,
    pub last_hit: Option<Duration>,
    pub hurt_window: Duration,
}

impl Vitals {
    pub fn new(max: f32, hurt_window: Duration) -> Self {
        Self {
            energy: max,
            max,
            last_hit: None,
            hurt_window,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.energy <= 0.0
    }

    /// Inside the window that follows a landed hit.
    pub fn is_hurt(&self, now: Duration) -> bool {
        self.last_hit
            .is_some_and(|at| now.saturating_sub(at) < self.hurt_window)
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.energy / self.max * 100.0).clamp(0.0, 100.0)
    }

    /// Damage that respects the hurt window; re-entrant hits inside it are no-ops.
    pub fn take_hit(&mut self, amount: f32, now: Duration) -> HitResult {
        if self.is_dead() || self.is_hurt(now) {
            return HitResult::Ignored;
        }
        self.apply(amount, now)
    }

    /// Damage that lands every time until death.
    pub fn absorb(&mut self, amount: f32, now: Duration) -> HitResult {
        if self.is_dead() {
            return HitResult::Ignored;
        }
        self.apply(amount, now)
    }

    fn apply(&mut self, amount: f32, now: Duration) -> HitResult {
        self.energy = (self.energy - amount).max(0.0);
        self.last_hit = Some(now);
        if self.is_dead() {
            HitResult::Killed
        } else {
            HitResult::Hurt
        }
    }
}

/// A thrown bottle.
#[derive(Component, Debug, Clone)]
pub struct Projectile {
    /// +1 flies right, -1 flies left
    pub direction: f32,
    impacted_at: Option<Duration>,
}

impl Projectile {
    pub fn new(direction: f32) -> Self {
        Self {
            direction,
            impacted_at: None,
        }
    }

    pub fn has_impacted(&self) -> bool {
        self.impacted_at.is_some()
    }

    pub fn impacted_at(&self) -> Option<Duration> {
        self.impacted_at
    }

    /// End the flight and pin the bottle where it is.
    ///
    /// Returns true only for the call that actually ended the flight.
    pub fn impact(&mut self, body: &mut Body, now: Duration) -> bool {
        if self.impacted_at.is_some() {
            return false;
        }
        self.impacted_at = Some(now);
        body.halt();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BodySpec;
    use crate::physics::Inset;

    #[test]
    fn hurt_window_swallows_second_hit() {
        let mut vitals = Vitals::new(100.0, Duration::from_millis(1000));
        assert_eq!(vitals.take_hit(10.0, Duration::from_millis(100)), HitResult::Hurt);
        assert_eq!(vitals.take_hit(10.0, Duration::from_millis(900)), HitResult::Ignored);
        assert_eq!(vitals.energy, 90.0);
        assert_eq!(vitals.take_hit(10.0, Duration::from_millis(1100)), HitResult::Hurt);
        assert_eq!(vitals.energy, 80.0);
    }

    #[test]
    fn energy_never_drops_below_zero() {
        let mut vitals = Vitals::new(100.0, Duration::from_millis(1000));
        vitals.energy = 15.0;
        assert_eq!(vitals.absorb(20.0, Duration::ZERO), HitResult::Killed);
        assert_eq!(vitals.energy, 0.0);
        assert_eq!(vitals.absorb(20.0, Duration::ZERO), HitResult::Ignored);
        assert_eq!(vitals.energy, 0.0);
    }

    #[test]
    fn impact_is_idempotent() {
        let mut body = Body::new(0.0, 0.0, BodySpec::new(80.0, 100.0, Inset::ZERO));
        body.speed_y = 12.0;
        let mut projectile = Projectile::new(1.0);
        assert!(projectile.impact(&mut body, Duration::from_millis(300)));
        assert!(!projectile.impact(&mut body, Duration::from_millis(400)));
        assert_eq!(projectile.impacted_at(), Some(Duration::from_millis(300)));
        assert_eq!(body.speed_y, 0.0);
    }
}
