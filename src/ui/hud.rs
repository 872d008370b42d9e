//! In-game HUD - health, bottle, coin and boss bars.
//!
//! The bars never look at the world directly; they follow [`BarUpdate`]
//! messages. Only the boss bar's visibility reads positions.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::core::{BarKind, BarUpdate, GameConfig, GameState};
use crate::enemies::BossBrain;
use crate::physics::Body;
use crate::player::Character;

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Fill node of one bar.
#[derive(Component)]
pub struct BarFill(pub BarKind);

/// Container of the boss bar, hidden unless the boss is close.
#[derive(Component)]
pub struct BossBarRoot;

/// Which of the six bar images a percentage shows (0, 20, ..., 100).
pub fn bar_bucket(percent: f32) -> u8 {
    match percent {
        p if p <= 0.0 => 0,
        p if p <= 20.0 => 1,
        p if p <= 40.0 => 2,
        p if p <= 60.0 => 3,
        p if p <= 80.0 => 4,
        _ => 5,
    }
}

/// Last known percentage per bar.
#[derive(Resource, Debug, Default)]
pub struct HudBars {
    levels: HashMap<BarKind, f32>,
}

impl HudBars {
    /// Counts are shown relative to `full_count` collected items.
    pub fn apply(&mut self, update: BarUpdate, full_count: u32) {
        let (bar, percent) = match update {
            BarUpdate::Percent { bar, percent } => (bar, percent),
            BarUpdate::Count { bar, count } => {
                let full = full_count.max(1) as f32;
                (bar, count as f32 / full * 100.0)
            }
        };
        self.levels.insert(bar, percent.clamp(0.0, 100.0));
    }

    pub fn percent(&self, bar: BarKind) -> f32 {
        self.levels.get(&bar).copied().unwrap_or(0.0)
    }

    pub fn bucket(&self, bar: BarKind) -> u8 {
        bar_bucket(self.percent(bar))
    }
}

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.init_resource::<HudBars>()
        .add_systems(OnEnter(GameState::Playing), (cleanup_hud, spawn_hud).chain())
        .add_systems(Update, (update_bars, show_boss_bar));
}

fn spawn_hud(mut commands: Commands, mut bars: ResMut<HudBars>) {
    *bars = HudBars::default();

    // Player bars (top-left corner)
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                top: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, "Health", Color::srgb(0.3, 0.75, 0.3), BarKind::Health);
            spawn_bar(parent, "Bottles", Color::srgb(0.3, 0.5, 0.85), BarKind::Bottles);
            spawn_bar(parent, "Coins", Color::srgb(0.9, 0.75, 0.2), BarKind::Coins);
        });

    // Boss bar (top-right corner)
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                top: Val::Px(10.0),
                ..default()
            },
            Visibility::Hidden,
            HudRoot,
            BossBarRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, "Boss", Color::srgb(0.85, 0.4, 0.2), BarKind::Boss);
        });
}

fn spawn_bar(parent: &mut ChildBuilder, label: &str, color: Color, kind: BarKind) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.15, 0.1, 0.05)),
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));

            row.spawn((
                Node {
                    width: Val::Px(150.0),
                    height: Val::Px(12.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.6)),
            ))
            .with_children(|bg| {
                bg.spawn((
                    Node {
                        width: Val::Percent(0.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(color),
                    BarFill(kind),
                ));
            });
        });
}

/// Fold bar messages into [`HudBars`] and resize the fills in 20% steps.
fn update_bars(
    mut updates: EventReader<BarUpdate>,
    config: Res<GameConfig>,
    mut bars: ResMut<HudBars>,
    mut fills: Query<(&BarFill, &mut Node)>,
) {
    let mut changed = false;
    for update in updates.read() {
        bars.apply(*update, config.hud.full_count);
        changed = true;
    }
    if !changed {
        return;
    }
    for (fill, mut node) in fills.iter_mut() {
        node.width = Val::Percent(bars.bucket(fill.0) as f32 * 20.0);
    }
}

fn show_boss_bar(
    config: Res<GameConfig>,
    characters: Query<&Body, With<Character>>,
    bosses: Query<(&Body, &BossBrain)>,
    mut roots: Query<&mut Visibility, With<BossBarRoot>>,
) {
    let Ok(mut visibility) = roots.get_single_mut() else {
        return;
    };
    let near = characters.get_single().ok().is_some_and(|character| {
        bosses.iter().any(|(boss, brain)| {
            !brain.is_dead() && (boss.x - character.x).abs() < config.hud.boss_bar_range
        })
    });
    visibility.set_if_neq(if near {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    });
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
