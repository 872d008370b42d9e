//! Seedable random source shared by level population, spawners and the boss.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Resource)]
pub struct SimRng(StdRng);

impl SimRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }

    /// Uniform in `[min, min + span)`.
    pub fn span(&mut self, min: f32, span: f32) -> f32 {
        min + self.unit() * span
    }

    /// True with probability `p`. Never true for `p <= 0`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }
}
