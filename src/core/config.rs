//! Gameplay tuning loaded from an external RON file.
//!
//! Every constant the simulation uses lives here so balancing never needs a
//! recompile. Each section falls back to its defaults field by field, which
//! keeps partial files valid.

use std::fs;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use super::error::ConfigError;
use crate::physics::Inset;

/// Location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Sprite box and hitbox inset of one entity type.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct BodySpec {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub inset: Inset,
}

impl BodySpec {
    pub const fn new(width: f32, height: f32, inset: Inset) -> Self {
        Self { width, height, inset }
    }
}

/// Root tuning resource.
#[derive(Resource, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub cadence: CadenceConfig,
    pub physics: PhysicsConfig,
    pub character: CharacterConfig,
    pub combat: CombatConfig,
    pub chickens: ChickenConfig,
    pub boss: BossConfig,
    pub projectile: ProjectileConfig,
    pub pickups: PickupConfig,
    pub spawner: SpawnerConfig,
    pub level: LevelConfig,
    pub hud: HudConfig,
}

impl GameConfig {
    /// Load the tuning file, falling back to defaults when it is missing or broken.
    pub fn load() -> Self {
        match Self::try_load(TUNING_PATH) {
            Ok(config) => {
                info!("Loaded tuning from {}", TUNING_PATH);
                config
            }
            Err(ConfigError::Read { path, source }) => {
                warn!("Could not read {}: {}. Using defaults.", path, source);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_ron(path, &contents)
    }

    pub fn from_ron(path: &str, contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

/// Per-concern tick intervals.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    /// Base scheduler step every other cadence is measured against.
    pub base_step_ms: u64,
    pub gravity_ms: u64,
    pub motion_hz: f64,
    pub flight_ms: u64,
    pub contact_ms: u64,
    pub throw_ms: u64,
    pub pickup_ms: u64,
    pub boss_ai_ms: u64,
    pub animation_ms: u64,
    pub death_frame_ms: u64,
    pub splash_frame_ms: u64,
    pub enemy_spawn_ms: u64,
    pub bottle_spawn_ms: u64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            base_step_ms: 5,
            gravity_ms: 40,
            motion_hz: 60.0,
            flight_ms: 25,
            contact_ms: 50,
            throw_ms: 100,
            pickup_ms: 200,
            boss_ai_ms: 120,
            animation_ms: 150,
            death_frame_ms: 200,
            splash_frame_ms: 100,
            enemy_spawn_ms: 1500,
            bottle_spawn_ms: 4000,
        }
    }
}

impl CadenceConfig {
    pub fn base_step(&self) -> Duration {
        Duration::from_millis(self.base_step_ms.max(1))
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Vertical speed lost per gravity tick.
    pub acceleration: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { acceleration: 2.5 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub body: BodySpec,
    /// Horizontal step per motion tick
    pub speed: f32,
    pub jump_speed: f32,
    pub ground: f32,
    pub min_x: f32,
    pub max_x: f32,
    pub max_energy: f32,
    pub start_flasks: u32,
    pub hurt_window_ms: u64,
    pub throw_window_ms: u64,
    pub throw_cooldown_ms: u64,
    pub long_idle_ms: u64,
    pub loss_delay_ms: u64,
    /// Screen X the camera keeps the character at
    pub camera_anchor: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            spawn_x: 120.0,
            spawn_y: 60.0,
            body: BodySpec::new(100.0, 280.0, Inset::new(20.0, 95.0, 40.0, 110.0)),
            speed: 10.0,
            jump_speed: 25.0,
            ground: 150.0,
            min_x: -100.0,
            max_x: 2200.0,
            max_energy: 100.0,
            start_flasks: 0,
            hurt_window_ms: 1000,
            throw_window_ms: 500,
            throw_cooldown_ms: 500,
            long_idle_ms: 4000,
            loss_delay_ms: 1000,
            camera_anchor: 100.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Height of the band above an enemy's top edge that counts as a stomp.
    pub stomp_band: f32,
    pub stomp_center_tolerance: f32,
    pub stomp_bounce: f32,
    pub knockback: f32,
    pub normal_chicken_damage: f32,
    pub small_chicken_damage: f32,
    pub boss_melee_damage: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            stomp_band: 50.0,
            stomp_center_tolerance: 50.0,
            stomp_bounce: 15.0,
            knockback: 20.0,
            normal_chicken_damage: 10.0,
            small_chicken_damage: 5.0,
            boss_melee_damage: 25.0,
        }
    }
}

/// Placement and pace of one chicken kind.
#[derive(Clone, Debug, Deserialize)]
pub struct ChickenSpec {
    pub y: f32,
    pub body: BodySpec,
    pub min_x: f32,
    pub x_span: f32,
    pub min_speed: f32,
    pub speed_span: f32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ChickenConfig {
    pub normal: ChickenSpec,
    pub small: ChickenSpec,
    pub normal_count: usize,
    pub small_count: usize,
}

impl Default for ChickenConfig {
    fn default() -> Self {
        Self {
            normal: ChickenSpec {
                y: 350.0,
                body: BodySpec::new(75.0, 75.0, Inset::new(6.0, 6.0, 12.0, 12.0)),
                min_x: 600.0,
                x_span: 1800.0,
                min_speed: 0.35,
                speed_span: 0.8,
            },
            small: ChickenSpec {
                y: 360.0,
                body: BodySpec::new(60.0, 60.0, Inset::new(6.0, 6.0, 12.0, 12.0)),
                min_x: 300.0,
                x_span: 1300.0,
                min_speed: 0.36,
                speed_span: 0.0,
            },
            normal_count: 3,
            small_count: 3,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BossConfig {
    pub spawn_x: f32,
    pub y: f32,
    pub body: BodySpec,
    pub max_energy: f32,
    pub speed: f32,
    pub aggro_range: f32,
    pub hurt_window_ms: u64,
    pub attack_window_ms: u64,
    pub cooldown_ms: u64,
    pub walk_multiplier: f32,
    pub sprint_multiplier: f32,
    /// Energy at or below which the boss is enraged.
    pub enrage_threshold: f32,
    pub enraged_cooldown_ms: u64,
    pub enraged_walk_multiplier: f32,
    pub enraged_sprint_multiplier: f32,
    pub chain_probability: f32,
    pub chain_delay_ms: u64,
    pub death_frames: u32,
    pub win_delay_ms: u64,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            spawn_x: 2500.0,
            y: 55.0,
            body: BodySpec::new(250.0, 400.0, Inset::new(10.0, 70.0, 15.0, 90.0)),
            max_energy: 100.0,
            speed: 15.0,
            aggro_range: 820.0,
            hurt_window_ms: 1000,
            attack_window_ms: 1200,
            cooldown_ms: 800,
            walk_multiplier: 1.25,
            sprint_multiplier: 1.8,
            enrage_threshold: 40.0,
            enraged_cooldown_ms: 600,
            enraged_walk_multiplier: 1.45,
            enraged_sprint_multiplier: 2.0,
            chain_probability: 0.35,
            chain_delay_ms: 220,
            death_frames: 3,
            win_delay_ms: 1000,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub body: BodySpec,
    pub launch_speed_y: f32,
    /// Flight plane the bottle shatters on.
    pub ground: f32,
    /// Horizontal step per flight tick
    pub flight_step: f32,
    pub spawn_offset_right: f32,
    pub spawn_offset_left: f32,
    pub spawn_offset_y: f32,
    pub boss_damage: f32,
    pub splash_frames: u32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            body: BodySpec::new(80.0, 100.0, Inset::new(8.0, 8.0, 16.0, 16.0)),
            launch_speed_y: 30.0,
            ground: 370.0,
            flight_step: 6.0,
            spawn_offset_right: 100.0,
            spawn_offset_left: -50.0,
            spawn_offset_y: 100.0,
            boss_damage: 20.0,
            splash_frames: 6,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    pub coin_body: BodySpec,
    pub coin_min_x: f32,
    pub coin_x_span: f32,
    pub coin_min_y: f32,
    pub coin_y_span: f32,
    pub coin_count: usize,
    pub bottle_body: BodySpec,
    pub bottle_min_x: f32,
    pub bottle_x_span: f32,
    pub bottle_y: f32,
    pub bottle_count: usize,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            coin_body: BodySpec::new(80.0, 80.0, Inset::new(12.0, 12.0, 24.0, 24.0)),
            coin_min_x: 200.0,
            coin_x_span: 2000.0,
            coin_min_y: 60.0,
            coin_y_span: 170.0,
            coin_count: 5,
            bottle_body: BodySpec::new(64.0, 90.0, Inset::new(10.0, 10.0, 20.0, 20.0)),
            bottle_min_x: 200.0,
            bottle_x_span: 2000.0,
            bottle_y: 340.0,
            bottle_count: 9,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub enemy_cap: usize,
    pub enemy_probability: f32,
    pub enemy_min_offset: f32,
    pub enemy_offset_span: f32,
    pub enemy_end_margin: f32,
    pub bottle_cap: usize,
    pub bottle_min_offset: f32,
    pub bottle_offset_span: f32,
    pub bottle_end_margin: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            enemy_cap: 15,
            enemy_probability: 0.4,
            enemy_min_offset: 400.0,
            enemy_offset_span: 400.0,
            enemy_end_margin: 500.0,
            bottle_cap: 17,
            bottle_min_offset: 300.0,
            bottle_offset_span: 600.0,
            bottle_end_margin: 200.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub end_x: f32,
    pub backdrop_width: f32,
    pub backdrop_height: f32,
    pub backdrop_first_x: f32,
    /// Distance between segment origins; one pixel of overlap hides seams
    pub backdrop_spacing: f32,
    pub backdrop_segments: usize,
    pub cloud_count: usize,
    pub cloud_body: BodySpec,
    pub cloud_y: f32,
    pub cloud_x_span: f32,
    pub cloud_min_speed: f32,
    pub cloud_speed_span: f32,
    /// X a cloud reappears at after drifting off the left edge.
    pub cloud_wrap_x: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            end_x: 3000.0,
            backdrop_width: 720.0,
            backdrop_height: 480.0,
            backdrop_first_x: -719.0,
            backdrop_spacing: 719.0,
            backdrop_segments: 5,
            cloud_count: 1,
            cloud_body: BodySpec::new(500.0, 250.0, Inset::ZERO),
            cloud_y: 20.0,
            cloud_x_span: 500.0,
            cloud_min_speed: 0.2,
            cloud_speed_span: 0.2,
            cloud_wrap_x: 3000.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Horizontal distance under which the boss bar is shown.
    pub boss_bar_range: f32,
    /// Collected count that fills a counter bar.
    pub full_count: u32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            boss_bar_range: 600.0,
            full_count: 5,
        }
    }
}
