use crate::creature::Monster;

use super::{Durability, ItemSpec};

/// Fraction shaved off the afflicted stat by an elemental hit.
const DEBUFF_FRACTION: f64 = 0.1;

/// Spell elements; each applies a distinct persistent debuff on hit.
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
pub enum Element {
    /// Fire burns away defenses.
    Fire,
    /// Ice dampens damage output.
    Ice,
    /// Lightning cripples dodge chance.
    Lightning,
}

impl Element {
    /// Applies this element's lasting debuff to the target.
    pub fn apply_debuff(self, target: &mut Monster) {
        match self {
            Element::Fire => target.reduce_defense(DEBUFF_FRACTION),
            Element::Ice => target.reduce_base_damage(DEBUFF_FRACTION),
            Element::Lightning => target.reduce_dodge(DEBUFF_FRACTION),
        }
    }
}

/// Single-use offensive spell; consumed when cast.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    spec: ItemSpec,
    base_damage: f64,
    mana_cost: f64,
    element: Element,
}

impl Spell {
    pub fn new(
        name: impl Into<String>,
        price: u32,
        level_requirement: u32,
        base_damage: f64,
        mana_cost: f64,
        element: Element,
    ) -> Self {
        Self {
            spec: ItemSpec::new(name, price, level_requirement, Durability::new(1)),
            base_damage,
            mana_cost,
            element,
        }
    }

    pub fn spec(&self) -> &ItemSpec {
        &self.spec
    }

    pub fn base_damage(&self) -> f64 {
        self.base_damage
    }

    pub fn mana_cost(&self) -> f64 {
        self.mana_cost
    }

    pub fn element(&self) -> Element {
        self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MonsterTemplate;
    use crate::creature::{Monster, MonsterKind};

    fn monster() -> Monster {
        Monster::from_template(&MonsterTemplate {
            name: "Casper".into(),
            kind: MonsterKind::Spirit,
            level: 4,
            damage: 40.0,
            defense: 30.0,
            dodge_percent: 25.0,
        })
    }

    #[test]
    fn each_element_debuffs_its_own_stat() {
        let mut fire_target = monster();
        let defense = fire_target.defense();
        Element::Fire.apply_debuff(&mut fire_target);
        assert!((fire_target.defense() - defense * 0.9).abs() < 1e-9);

        let mut ice_target = monster();
        let damage = ice_target.base_damage();
        Element::Ice.apply_debuff(&mut ice_target);
        assert!((ice_target.base_damage() - damage * 0.9).abs() < 1e-9);

        let mut bolt_target = monster();
        let dodge = bolt_target.dodge_chance();
        Element::Lightning.apply_debuff(&mut bolt_target);
        assert!((bolt_target.dodge_chance() - dodge * 0.9).abs() < 1e-9);
    }
}
