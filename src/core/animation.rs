//! Animation set selection state shared by every animated entity.

use bevy::prelude::*;

/// Which frame sequence an entity is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationSet {
    #[default]
    Idle,
    LongIdle,
    Walk,
    Jump,
    Hurt,
    Throw,
    Dead,
    Alert,
    Attack,
    Spin,
    Splash,
}

impl AnimationSet {
    /// One-shot sets hold their last frame instead of looping.
    pub fn is_one_shot(self) -> bool {
        matches!(self, AnimationSet::Dead | AnimationSet::Splash)
    }
}

/// Current set plus how many ticks it has been shown.
#[derive(Component, Debug, Clone, Default)]
pub struct Animator {
    pub set: AnimationSet,
    pub ticks: u32,
}

impl Animator {
    pub fn new(set: AnimationSet) -> Self {
        Self { set, ticks: 0 }
    }

    /// Show `set` for one more tick; switching sets restarts from frame zero.
    pub fn select(&mut self, set: AnimationSet) {
        if self.set == set {
            self.ticks = self.ticks.saturating_add(1);
        } else {
            self.set = set;
            self.ticks = 0;
        }
    }

    /// Frame index within a sequence of `len` frames.
    pub fn frame(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let ticks = self.ticks as usize;
        if self.set.is_one_shot() {
            ticks.min(len - 1)
        } else {
            ticks % len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_set_restarts_sequence() {
        let mut animator = Animator::new(AnimationSet::Walk);
        animator.select(AnimationSet::Walk);
        animator.select(AnimationSet::Walk);
        assert_eq!(animator.frame(6), 2);
        animator.select(AnimationSet::Jump);
        assert_eq!(animator.frame(9), 0);
    }

    #[test]
    fn one_shot_holds_last_frame() {
        let mut animator = Animator::new(AnimationSet::Dead);
        for _ in 0..10 {
            animator.select(AnimationSet::Dead);
        }
        assert_eq!(animator.frame(3), 2);
    }
}
