//! Character-versus-enemy contact adjudication.

use crate::core::{CombatConfig, EnemyKind};
use crate::physics::Body;

/// The single outcome of one character/enemy overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Character lands on a chicken and kills it.
    Stomp,
    Damage { amount: f32 },
    /// Overlap without consequence (idle boss, stomp on the boss).
    Harmless,
}

/// Falling feet inside the band above the enemy's top edge, roughly centered.
pub fn is_stomp(character: &Body, enemy: &Body, config: &CombatConfig) -> bool {
    let feet = character.bottom();
    character.speed_y < 0.0
        && feet >= enemy.y
        && feet <= enemy.y + config.stomp_band
        && (character.center_x() - enemy.center_x()).abs() < config.stomp_center_tolerance
}

/// Decide what an overlap does. Callers check the overlap itself.
pub fn adjudicate_contact(
    character: &Body,
    enemy: &Body,
    kind: EnemyKind,
    boss_attacking: bool,
    config: &CombatConfig,
) -> Contact {
    if is_stomp(character, enemy, config) {
        return match kind {
            EnemyKind::BossChicken => Contact::Harmless,
            _ => Contact::Stomp,
        };
    }
    match kind {
        EnemyKind::NormalChicken => Contact::Damage {
            amount: config.normal_chicken_damage,
        },
        EnemyKind::SmallChicken => Contact::Damage {
            amount: config.small_chicken_damage,
        },
        EnemyKind::BossChicken if boss_attacking => Contact::Damage {
            amount: config.boss_melee_damage,
        },
        EnemyKind::BossChicken => Contact::Harmless,
    }
}

/// Push the character away from the enemy's center, then clamp to bounds.
pub fn knock_back(character: &mut Body, enemy: &Body, distance: f32, min_x: f32, max_x: f32) {
    if character.center_x() < enemy.center_x() {
        character.x -= distance;
    } else {
        character.x += distance;
    }
    character.x = character.x.clamp(min_x, max_x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn bodies() -> (Body, Body, Body, GameConfig) {
        let config = GameConfig::default();
        let character = Body::new(100.0, 100.0, config.character.body);
        let normal = Body::new(110.0, config.chickens.normal.y, config.chickens.normal.body);
        let boss = Body::new(110.0, config.boss.y, config.boss.body);
        (character, normal, boss, config)
    }

    #[test]
    fn descending_onto_chicken_is_a_stomp() {
        let (mut character, normal, _, config) = bodies();
        character.speed_y = -5.0;
        // feet at 380, chicken top at 350
        assert_eq!(
            adjudicate_contact(
                &character,
                &normal,
                EnemyKind::NormalChicken,
                false,
                &config.combat,
            ),
            Contact::Stomp
        );
    }

    #[test]
    fn standing_contact_damages() {
        let (character, normal, _, config) = bodies();
        assert_eq!(
            adjudicate_contact(
                &character,
                &normal,
                EnemyKind::NormalChicken,
                false,
                &config.combat,
            ),
            Contact::Damage { amount: 10.0 }
        );
        assert_eq!(
            adjudicate_contact(&character, &normal, EnemyKind::SmallChicken, false, &config.combat),
            Contact::Damage { amount: 5.0 }
        );
    }

    #[test]
    fn boss_only_hurts_while_attacking_and_ignores_stomps() {
        let (mut character, _, boss, config) = bodies();
        assert_eq!(
            adjudicate_contact(&character, &boss, EnemyKind::BossChicken, false, &config.combat),
            Contact::Harmless
        );
        assert_eq!(
            adjudicate_contact(&character, &boss, EnemyKind::BossChicken, true, &config.combat),
            Contact::Damage { amount: 25.0 }
        );
        character.y = boss.y - character.height + 10.0;
        character.x = boss.center_x() - character.width / 2.0;
        character.speed_y = -3.0;
        assert_eq!(
            adjudicate_contact(&character, &boss, EnemyKind::BossChicken, true, &config.combat),
            Contact::Harmless
        );
    }

    #[test]
    fn rising_character_never_stomps() {
        let (mut character, normal, _, config) = bodies();
        character.speed_y = 4.0;
        assert!(!is_stomp(&character, &normal, &config.combat));
    }

    #[test]
    fn knock_back_pushes_away_and_clamps() {
        let (mut character, normal, _, config) = bodies();
        // character center 150, chicken center 147.5
        knock_back(&mut character, &normal, 20.0, config.character.min_x, config.character.max_x);
        assert_eq!(character.x, 120.0);

        character.x = 2195.0;
        knock_back(&mut character, &normal, 20.0, config.character.min_x, config.character.max_x);
        assert_eq!(character.x, 2200.0);
    }
}
