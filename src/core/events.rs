//! Messages the simulation publishes to its collaborators.
//!
//! The world never talks to audio, HUD or overlay code directly. It sends
//! these events and whoever is listening reacts; with nobody listening the
//! events are simply dropped, which is how headless runs work.

use bevy::prelude::*;

/// Every sound the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Background,
    Walking,
    Jumping,
    Hurt,
    CharacterDead,
    ChickenDie,
    ThrowBottle,
    BottleSplash,
    GameOver,
    GameWin,
    EndbossAttack,
    EndbossDie,
    Snore,
}

impl SoundId {
    pub const ALL: [SoundId; 13] = [
        SoundId::Background,
        SoundId::Walking,
        SoundId::Jumping,
        SoundId::Hurt,
        SoundId::CharacterDead,
        SoundId::ChickenDie,
        SoundId::ThrowBottle,
        SoundId::BottleSplash,
        SoundId::GameOver,
        SoundId::GameWin,
        SoundId::EndbossAttack,
        SoundId::EndbossDie,
        SoundId::Snore,
    ];

    /// Asset path relative to the `assets/` folder.
    pub fn path(self) -> &'static str {
        match self {
            SoundId::Background => "audio/background.mp3",
            SoundId::Walking => "audio/walking.mp3",
            SoundId::Jumping => "audio/jumping.mp3",
            SoundId::Hurt => "audio/hurt.mp3",
            SoundId::CharacterDead => "audio/character_dead.mp3",
            SoundId::ChickenDie => "audio/chicken_die.mp3",
            SoundId::ThrowBottle => "audio/throw_bottle.mp3",
            SoundId::BottleSplash => "audio/bottle_splash.mp3",
            SoundId::GameOver => "audio/game_over.mp3",
            SoundId::GameWin => "audio/game_win.mp3",
            SoundId::EndbossAttack => "audio/endboss_attack.mp3",
            SoundId::EndbossDie => "audio/endboss_die.mp3",
            SoundId::Snore => "audio/snore.mp3",
        }
    }

    /// Playback volume as a linear amplitude.
    pub fn volume(self) -> f64 {
        match self {
            SoundId::Background => 0.05,
            SoundId::Walking => 1.0,
            SoundId::Jumping | SoundId::Hurt => 0.5,
            SoundId::CharacterDead | SoundId::ChickenDie => 0.4,
            SoundId::ThrowBottle => 0.2,
            SoundId::BottleSplash | SoundId::GameOver | SoundId::GameWin => 0.5,
            SoundId::EndbossAttack | SoundId::EndbossDie | SoundId::Snore => 1.0,
        }
    }
}

/// Fire-and-forget request for the sound service.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// One-shot playback.
    Play(SoundId),
    /// Stop every running instance of a sound.
    Stop(SoundId),
    /// Start looping unless the sound already loops.
    Loop(SoundId),
    StopAll,
    SetMuted(bool),
}

/// The four HUD bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarKind {
    Health,
    Bottles,
    Coins,
    Boss,
}

/// One-way push of a stat change to the HUD.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum BarUpdate {
    /// Value already expressed in percent (health, boss energy).
    Percent { bar: BarKind, percent: f32 },
    /// Raw collected count (bottles, coins).
    Count { bar: BarKind, count: u32 },
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Sent exactly once per run, when the world freezes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunEnded {
    pub outcome: Outcome,
}
