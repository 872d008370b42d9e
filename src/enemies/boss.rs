//! Boss AI: aggro, attack windows, enrage and chained attacks.
//!
//! Decisions run on the AI cadence through [`think`]. Window deadlines (end
//! of an attack, delayed chain attack) are polled every base tick through
//! [`poll_windows`] so they fire on time regardless of the AI cadence.

use std::time::Duration;

use bevy::prelude::*;

use super::components::{BossBrain, BossMode};
use crate::combat::{HitResult, Vitals};
use crate::core::{
    AnimationSet, Animator, BossConfig, GameConfig, SimClock, SimRng, SoundCue, SoundId,
};
use crate::physics::{Body, Frozen};
use crate::player::Character;

impl BossBrain {
    /// Projectile damage. Lands every time until the boss is dead.
    pub fn take_hit(&mut self, vitals: &mut Vitals, amount: f32, now: Duration) -> HitResult {
        if self.is_dead() {
            return HitResult::Ignored;
        }
        let result = vitals.absorb(amount, now);
        if result == HitResult::Killed {
            self.mode = BossMode::Dead;
            self.attack_ends_at = None;
            self.chain_at = None;
        }
        result
    }
}

/// When the win fires for a boss killed at `died_at`.
pub fn boss_win_at(died_at: Duration, config: &GameConfig) -> Duration {
    let frames = config.cadence.death_frame_ms * u64::from(config.boss.death_frames);
    died_at + Duration::from_millis(frames + config.boss.win_delay_ms)
}

pub fn is_enraged(vitals: &Vitals, config: &BossConfig) -> bool {
    vitals.energy <= config.enrage_threshold
}

fn cooldown(enraged: bool, config: &BossConfig) -> Duration {
    Duration::from_millis(if enraged {
        config.enraged_cooldown_ms
    } else {
        config.cooldown_ms
    })
}

fn walk_step(enraged: bool, config: &BossConfig) -> f32 {
    config.speed
        * if enraged {
            config.enraged_walk_multiplier
        } else {
            config.walk_multiplier
        }
}

fn sprint_step(enraged: bool, config: &BossConfig) -> f32 {
    config.speed
        * if enraged {
            config.enraged_sprint_multiplier
        } else {
            config.sprint_multiplier
        }
}

fn in_range(body: &Body, target_x: Option<f32>, config: &BossConfig) -> bool {
    target_x.is_some_and(|x| (x - body.x).abs() < config.aggro_range)
}

/// Step toward the target; facing right sets `mirrored`.
pub fn move_toward(body: &mut Body, target_x: Option<f32>, step: f32) {
    let Some(target_x) = target_x else {
        return;
    };
    if target_x < body.x {
        body.x -= step;
        body.mirrored = false;
    } else {
        body.x += step;
        body.mirrored = true;
    }
}

fn start_attack(
    brain: &mut BossBrain,
    body: &mut Body,
    target_x: Option<f32>,
    enraged: bool,
    config: &BossConfig,
    now: Duration,
    cues: &mut Vec<SoundCue>,
) {
    brain.mode = BossMode::Attacking;
    brain.last_attack_at = Some(now);
    brain.attack_ends_at = Some(now + Duration::from_millis(config.attack_window_ms));
    brain.attack_enraged = enraged;
    brain.chain_at = None;
    cues.push(SoundCue::Play(SoundId::EndbossAttack));
    move_toward(body, target_x, sprint_step(enraged, config));
}

/// One AI tick. Returns the pose to show, or `None` once dead.
pub fn think(
    brain: &mut BossBrain,
    body: &mut Body,
    vitals: &Vitals,
    target_x: Option<f32>,
    config: &BossConfig,
    now: Duration,
    cues: &mut Vec<SoundCue>,
) -> Option<AnimationSet> {
    if brain.is_dead() {
        return None;
    }
    let enraged = is_enraged(vitals, config);
    let near = in_range(body, target_x, config);

    let pose = if vitals.is_hurt(now) {
        AnimationSet::Hurt
    } else if brain.is_attacking() {
        move_toward(body, target_x, sprint_step(enraged, config));
        AnimationSet::Attack
    } else if near {
        brain.mode = BossMode::AggroWalk;
        move_toward(body, target_x, walk_step(enraged, config));
        AnimationSet::Walk
    } else {
        brain.mode = BossMode::Patrol;
        AnimationSet::Alert
    };

    let rested = brain
        .last_attack_at
        .map_or(true, |at| now.saturating_sub(at) >= cooldown(enraged, config));
    if !brain.is_attacking() && near && rested {
        start_attack(brain, body, target_x, enraged, config, now, cues);
    }

    Some(pose)
}

/// Close finished attack windows and fire due chain attacks.
pub fn poll_windows(
    brain: &mut BossBrain,
    body: &mut Body,
    target_x: Option<f32>,
    config: &BossConfig,
    now: Duration,
    rng: &mut SimRng,
    cues: &mut Vec<SoundCue>,
) {
    if brain.is_dead() {
        return;
    }

    if brain.attack_ends_at.is_some_and(|end| now >= end) {
        brain.attack_ends_at = None;
        let near = in_range(body, target_x, config);
        brain.mode = if near {
            BossMode::AggroWalk
        } else {
            BossMode::Patrol
        };
        if brain.attack_enraged && rng.chance(config.chain_probability) && near {
            brain.chain_at = Some(now + Duration::from_millis(config.chain_delay_ms));
        }
    }

    if brain.chain_at.is_some_and(|at| now >= at) {
        brain.chain_at = None;
        if !brain.is_attacking() && in_range(body, target_x, config) {
            start_attack(brain, body, target_x, true, config, now, cues);
        }
    }
}

fn character_x(characters: &Query<&Body, (With<Character>, Without<BossBrain>)>) -> Option<f32> {
    characters.iter().next().map(|body| body.x)
}

pub fn boss_think(
    clock: Res<SimClock>,
    config: Res<GameConfig>,
    characters: Query<&Body, (With<Character>, Without<BossBrain>)>,
    mut bosses: Query<(&mut BossBrain, &mut Body, &Vitals, &mut Animator), Without<Frozen>>,
    mut sounds: EventWriter<SoundCue>,
) {
    let target_x = character_x(&characters);
    for (mut brain, mut body, vitals, mut animator) in bosses.iter_mut() {
        let mut cues = Vec::new();
        if let Some(pose) = think(
            &mut brain,
            &mut body,
            vitals,
            target_x,
            &config.boss,
            clock.now(),
            &mut cues,
        ) {
            animator.select(pose);
        }
        sounds.send_batch(cues);
    }
}

pub fn boss_windows(
    clock: Res<SimClock>,
    config: Res<GameConfig>,
    mut rng: ResMut<SimRng>,
    characters: Query<&Body, (With<Character>, Without<BossBrain>)>,
    mut bosses: Query<(&mut BossBrain, &mut Body), Without<Frozen>>,
    mut sounds: EventWriter<SoundCue>,
) {
    let target_x = character_x(&characters);
    for (mut brain, mut body) in bosses.iter_mut() {
        let mut cues = Vec::new();
        poll_windows(
            &mut brain,
            &mut body,
            target_x,
            &config.boss,
            clock.now(),
            &mut rng,
            &mut cues,
        );
        sounds.send_batch(cues);
    }
}

/// Step the death sequence of a dead boss.
pub fn play_boss_death(mut bosses: Query<(&BossBrain, &mut Animator), Without<Frozen>>) {
    for (brain, mut animator) in bosses.iter_mut() {
        if brain.is_dead() {
            animator.select(AnimationSet::Dead);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss() -> (BossBrain, Body, Vitals, BossConfig) {
        let config = GameConfig::default().boss;
        let body = Body::new(config.spawn_x, config.y, config.body).with_speed(config.speed);
        let vitals = Vitals::new(config.max_energy, Duration::from_millis(config.hurt_window_ms));
        (BossBrain::default(), body, vitals, config)
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn out_of_range_boss_patrols_in_place() {
        let (mut brain, mut body, vitals, config) = boss();
        let mut cues = Vec::new();
        let pose = think(&mut brain, &mut body, &vitals, Some(100.0), &config, ms(120), &mut cues);
        assert_eq!(pose, Some(AnimationSet::Alert));
        assert_eq!(brain.mode, BossMode::Patrol);
        assert_eq!(body.x, config.spawn_x);
        assert!(cues.is_empty());
    }

    #[test]
    fn aggro_walk_then_attack_with_sprint() {
        let (mut brain, mut body, vitals, config) = boss();
        let mut cues = Vec::new();
        let target = Some(2000.0);
        think(&mut brain, &mut body, &vitals, target, &config, ms(120), &mut cues);
        // walk 15 * 1.25, then the attack dash 15 * 1.8
        assert!((body.x - (2500.0 - 18.75 - 27.0)).abs() < 1e-3);
        assert!(brain.is_attacking());
        assert!(!body.mirrored);
        assert_eq!(cues, vec![SoundCue::Play(SoundId::EndbossAttack)]);
        assert_eq!(brain.attack_ends_at, Some(ms(1320)));
    }

    #[test]
    fn attack_window_closes_and_cooldown_holds() {
        let (mut brain, mut body, vitals, config) = boss();
        let mut rng = SimRng::new(Some(1));
        let mut cues = Vec::new();
        let target = Some(2000.0);
        think(&mut brain, &mut body, &vitals, target, &config, ms(0), &mut cues);
        poll_windows(&mut brain, &mut body, target, &config, ms(1195), &mut rng, &mut cues);
        assert!(brain.is_attacking());
        poll_windows(&mut brain, &mut body, target, &config, ms(1200), &mut rng, &mut cues);
        assert_eq!(brain.mode, BossMode::AggroWalk);
        // not enraged, so no chain was scheduled
        assert_eq!(brain.chain_at, None);

        cues.clear();
        think(&mut brain, &mut body, &vitals, target, &config, ms(1210), &mut cues);
        assert!(brain.is_attacking(), "cooldown of 800ms elapsed since attack start");
    }

    #[test]
    fn enraged_boss_chains_when_roll_succeeds() {
        let (mut brain, mut body, mut vitals, mut config) = boss();
        config.chain_probability = 1.0;
        vitals.energy = 40.0;
        let mut rng = SimRng::new(Some(3));
        let mut cues = Vec::new();
        let target = Some(2200.0);

        think(&mut brain, &mut body, &vitals, target, &config, ms(0), &mut cues);
        assert!(brain.attack_enraged);
        poll_windows(&mut brain, &mut body, target, &config, ms(1200), &mut rng, &mut cues);
        assert_eq!(brain.chain_at, Some(ms(1420)));
        assert!(!brain.is_attacking());

        cues.clear();
        poll_windows(&mut brain, &mut body, target, &config, ms(1420), &mut rng, &mut cues);
        assert!(brain.is_attacking());
        assert_eq!(cues, vec![SoundCue::Play(SoundId::EndbossAttack)]);
    }

    #[test]
    fn chain_is_dropped_when_character_escapes() {
        let (mut brain, mut body, mut vitals, mut config) = boss();
        config.chain_probability = 1.0;
        vitals.energy = 20.0;
        let mut rng = SimRng::new(Some(3));
        let mut cues = Vec::new();

        think(&mut brain, &mut body, &vitals, Some(2200.0), &config, ms(0), &mut cues);
        poll_windows(&mut brain, &mut body, Some(2200.0), &config, ms(1200), &mut rng, &mut cues);
        poll_windows(&mut brain, &mut body, Some(0.0), &config, ms(1420), &mut rng, &mut cues);
        assert!(!brain.is_attacking());
        assert_eq!(brain.chain_at, None);
    }

    #[test]
    fn five_hits_of_twenty_kill_exactly_once() {
        let (mut brain, _, mut vitals, _) = boss();
        let mut kills = 0;
        for i in 1..=5u64 {
            let result = brain.take_hit(&mut vitals, 20.0, ms(i * 100));
            assert_eq!(vitals.energy, 100.0 - 20.0 * i as f32);
            if result == HitResult::Killed {
                kills += 1;
                assert_eq!(i, 5);
            }
        }
        assert_eq!(kills, 1);
        assert!(brain.is_dead());
        assert_eq!(brain.take_hit(&mut vitals, 20.0, ms(700)), HitResult::Ignored);
        assert_eq!(vitals.energy, 0.0);
    }

    #[test]
    fn dead_boss_stops_thinking() {
        let (mut brain, mut body, vitals, config) = boss();
        brain.mode = BossMode::Dead;
        let mut cues = Vec::new();
        assert_eq!(
            think(&mut brain, &mut body, &vitals, Some(2400.0), &config, ms(0), &mut cues),
            None
        );
        assert_eq!(body.x, config.spawn_x);
    }

    #[test]
    fn win_waits_for_death_frames_and_delay() {
        let config = GameConfig::default();
        assert_eq!(boss_win_at(ms(500), &config), ms(500 + 600 + 1000));
    }
}
