//! Monster state: defensive normalization, category bonuses, level scaling.

use crate::catalog::MonsterTemplate;
use crate::config::GameConfig;

use super::Stats;

// Bounds applied to raw template damage/defense; data files are untrusted.
const STAT_MIN: f64 = 5.0;
const STAT_MAX: f64 = 70.0;
const DODGE_MAX: f64 = 0.5;
// Level-1 monsters are softened regardless of file data.
const ROOKIE_SOFTENING: f64 = 0.2;
const SCALING_PER_LEVEL: f64 = 1.05;
const SCALED_DAMAGE_FLOOR: f64 = 10.0;
const SCALED_DEFENSE_FLOOR: f64 = 5.0;
const DODGE_SHIFT_PER_LEVEL: f64 = 0.01;

/// Monster categories, each with a small favored-stat bonus.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MonsterKind {
    /// Dragons hit harder (+5% damage).
    Dragon,
    /// Exoskeletons tank more (+5% defense).
    Exoskeleton,
    /// Spirits evade more (+3pp dodge).
    Spirit,
}

/// Original normalized stats, kept apart from the live battle-modified
/// values so level rescaling always starts from a clean baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
struct TemplateStats {
    level: u32,
    damage: f64,
    defense: f64,
    dodge: f64,
}

/// A spawned monster.
#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    stats: Stats,
    kind: MonsterKind,
    base_damage: f64,
    template: TemplateStats,
}

impl Monster {
    /// Builds a monster from a template record.
    ///
    /// Raw damage/defense are clamped into engineered bounds, the dodge
    /// percentage is converted and clamped, level-1 spawns are softened, and
    /// the category bonus is applied; the resulting values are captured as
    /// the immutable template baseline for later rescaling.
    pub fn from_template(template: &MonsterTemplate) -> Self {
        let level = template.level.max(1);
        let mut base_damage = normalize_stat(template.damage);
        let mut defense = normalize_stat(template.defense);
        let mut dodge = clamp_dodge(template.dodge_percent / 100.0);
        if level <= 1 {
            base_damage *= ROOKIE_SOFTENING;
            defense *= ROOKIE_SOFTENING;
        }
        match template.kind {
            MonsterKind::Dragon => base_damage *= 1.05,
            MonsterKind::Exoskeleton => defense *= 1.05,
            MonsterKind::Spirit => dodge = clamp_dodge(dodge + 0.03),
        }
        Self {
            stats: Stats::new(
                template.name.clone(),
                level,
                GameConfig::MONSTER_HP_PER_LEVEL * level as f64,
                0.0,
                0.0,
                0.0,
                defense,
                dodge,
            ),
            kind: template.kind,
            base_damage,
            template: TemplateStats {
                level,
                damage: base_damage,
                defense,
                dodge,
            },
        }
    }

    pub fn name(&self) -> &str {
        self.stats.name()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    pub fn level(&self) -> u32 {
        self.stats.level()
    }

    pub fn hp(&self) -> f64 {
        self.stats.hp()
    }

    pub fn max_hp(&self) -> f64 {
        self.stats.max_hp()
    }

    pub fn base_damage(&self) -> f64 {
        self.base_damage
    }

    pub fn defense(&self) -> f64 {
        self.stats.defense
    }

    pub fn dodge_chance(&self) -> f64 {
        self.stats.dodge_chance
    }

    pub fn is_fainted(&self) -> bool {
        self.stats.is_fainted()
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn take_damage(&mut self, amount: f64) -> f64 {
        self.stats.take_damage(amount)
    }

    /// Damage added on top of base damage per monster level.
    pub fn attack_damage(&self) -> f64 {
        self.base_damage + self.level() as f64 * 5.0
    }

    // ========================================================================
    // Elemental debuffs (touch live stats only, never the template)
    // ========================================================================

    pub fn reduce_base_damage(&mut self, fraction: f64) {
        self.base_damage *= 1.0 - fraction;
    }

    pub fn reduce_defense(&mut self, fraction: f64) {
        self.stats.defense *= 1.0 - fraction;
    }

    pub fn reduce_dodge(&mut self, fraction: f64) {
        self.stats.dodge_chance *= 1.0 - fraction;
    }

    // ========================================================================
    // Level rescaling
    // ========================================================================

    /// Fresh copy rescaled to `target_level`.
    ///
    /// Scaling always starts from the stored template (never the live,
    /// possibly debuffed stats), so repeated rescaling to the same level is
    /// idempotent and template reuse never compounds prior battles.
    pub fn scaled_copy_for_level(&self, target_level: u32) -> Monster {
        let target_level = target_level.max(1);
        let delta = target_level as f64 - self.template.level as f64;
        let scaling = SCALING_PER_LEVEL.powf(delta);
        let damage = (self.template.damage * scaling).max(SCALED_DAMAGE_FLOOR);
        let defense = (self.template.defense * scaling).max(SCALED_DEFENSE_FLOOR);
        let dodge = clamp_dodge(self.template.dodge + DODGE_SHIFT_PER_LEVEL * delta);
        Monster {
            stats: Stats::new(
                self.stats.name(),
                target_level,
                GameConfig::MONSTER_HP_PER_LEVEL * target_level as f64,
                0.0,
                0.0,
                0.0,
                defense,
                dodge,
            ),
            kind: self.kind,
            base_damage: damage,
            template: self.template,
        }
    }
}

fn normalize_stat(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(STAT_MIN, STAT_MAX)
    } else {
        STAT_MIN
    }
}

fn clamp_dodge(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, DODGE_MAX)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MonsterTemplate;

    fn template(kind: MonsterKind, level: u32) -> MonsterTemplate {
        MonsterTemplate {
            name: "Desghidorrah".into(),
            kind,
            level,
            damage: 50.0,
            defense: 40.0,
            dodge_percent: 20.0,
        }
    }

    #[test]
    fn raw_stats_normalize_into_engineered_bounds() {
        let wild = Monster::from_template(&MonsterTemplate {
            damage: 900.0,
            defense: -3.0,
            dodge_percent: 400.0,
            ..template(MonsterKind::Exoskeleton, 3)
        });
        // 900 clamps to 70, -3 clamps to 5 (then the +5% category bonus).
        assert_eq!(wild.base_damage(), 70.0);
        assert!((wild.defense() - 5.0 * 1.05).abs() < 1e-9);
        assert_eq!(wild.dodge_chance(), 0.5);
    }

    #[test]
    fn rookie_monsters_are_softened() {
        let rookie = Monster::from_template(&template(MonsterKind::Dragon, 1));
        // 50 * 0.2 softening * 1.05 dragon bonus
        assert!((rookie.base_damage() - 50.0 * 0.2 * 1.05).abs() < 1e-9);
        assert!((rookie.defense() - 40.0 * 0.2).abs() < 1e-9);
        assert_eq!(rookie.hp(), GameConfig::MONSTER_HP_PER_LEVEL);
    }

    #[test]
    fn category_bonus_matches_kind() {
        let dragon = Monster::from_template(&template(MonsterKind::Dragon, 3));
        let exo = Monster::from_template(&template(MonsterKind::Exoskeleton, 3));
        let spirit = Monster::from_template(&template(MonsterKind::Spirit, 3));
        assert!((dragon.base_damage() - 50.0 * 1.05).abs() < 1e-9);
        assert!((exo.defense() - 40.0 * 1.05).abs() < 1e-9);
        assert!((spirit.dodge_chance() - 0.23).abs() < 1e-9);
    }

    #[test]
    fn scaling_is_idempotent_per_target_level() {
        let base = Monster::from_template(&template(MonsterKind::Dragon, 2));
        let once = base.scaled_copy_for_level(6);
        let twice = once.scaled_copy_for_level(6);
        assert_eq!(once.base_damage(), twice.base_damage());
        assert_eq!(once.defense(), twice.defense());
        assert_eq!(once.dodge_chance(), twice.dodge_chance());
        assert_eq!(once.hp(), twice.hp());
    }

    #[test]
    fn scaling_ignores_live_debuffs() {
        let base = Monster::from_template(&template(MonsterKind::Dragon, 2));
        let mut bruised = base.clone();
        bruised.reduce_base_damage(0.1);
        bruised.reduce_defense(0.1);
        bruised.reduce_dodge(0.1);
        let clean = base.scaled_copy_for_level(5);
        let from_bruised = bruised.scaled_copy_for_level(5);
        assert_eq!(clean.base_damage(), from_bruised.base_damage());
        assert_eq!(clean.defense(), from_bruised.defense());
        assert_eq!(clean.dodge_chance(), from_bruised.dodge_chance());
    }

    #[test]
    fn scaled_stats_respect_floors_and_dodge_shift() {
        let base = Monster::from_template(&template(MonsterKind::Dragon, 5));
        let down = base.scaled_copy_for_level(1);
        assert!(down.base_damage() >= 10.0);
        assert!(down.defense() >= 5.0);
        let up = base.scaled_copy_for_level(8);
        assert!((up.dodge_chance() - (0.2 + 0.03)).abs() < 1e-9);
        assert_eq!(up.level(), 8);
    }
}
