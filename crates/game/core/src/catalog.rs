//! Template records the engine consumes.
//!
//! Catalogs are plain structured data: how they reach memory (data files,
//! built-in defaults, tests) is the caller's concern. Out-of-range values
//! are not rejected here; creature and item constructors normalize them at
//! build time, because catalog sources are untrusted.

use crate::creature::{Hero, HeroClass, Monster, MonsterKind};
use crate::items::{Armor, Element, Potion, PotionAttribute, Spell, Weapon};

/// Raw hero record (pre-normalization stats).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroTemplate {
    pub name: String,
    pub class: HeroClass,
    pub mana: f64,
    pub strength: f64,
    pub agility: f64,
    pub dexterity: f64,
    pub gold: u32,
    pub experience: u32,
}

/// Raw monster record (pre-normalization stats; dodge given as a percent).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub kind: MonsterKind,
    pub level: u32,
    pub damage: f64,
    pub defense: f64,
    pub dodge_percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponTemplate {
    pub name: String,
    pub price: u32,
    pub level_requirement: u32,
    pub damage: f64,
    pub hands_required: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorTemplate {
    pub name: String,
    pub price: u32,
    pub level_requirement: u32,
    pub damage_reduction: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionTemplate {
    pub name: String,
    pub price: u32,
    pub level_requirement: u32,
    pub attribute: PotionAttribute,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellTemplate {
    pub name: String,
    pub price: u32,
    pub level_requirement: u32,
    pub element: Element,
    pub damage: f64,
    pub mana_cost: f64,
}

/// Every template table the game consumes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub heroes: Vec<HeroTemplate>,
    pub monsters: Vec<MonsterTemplate>,
    pub weapons: Vec<WeaponTemplate>,
    pub armors: Vec<ArmorTemplate>,
    pub potions: Vec<PotionTemplate>,
    pub spells: Vec<SpellTemplate>,
}

impl Catalog {
    pub fn heroes_of(&self, class: HeroClass) -> impl Iterator<Item = &HeroTemplate> {
        self.heroes.iter().filter(move |h| h.class == class)
    }

    pub fn monsters_of(&self, kind: MonsterKind) -> impl Iterator<Item = &MonsterTemplate> {
        self.monsters.iter().filter(move |m| m.kind == kind)
    }
}

impl WeaponTemplate {
    pub fn build(&self) -> Weapon {
        Weapon::new(
            self.name.clone(),
            self.price,
            self.level_requirement,
            self.damage,
            self.hands_required,
        )
    }
}

impl ArmorTemplate {
    pub fn build(&self) -> Armor {
        Armor::new(
            self.name.clone(),
            self.price,
            self.level_requirement,
            self.damage_reduction,
        )
    }
}

impl PotionTemplate {
    pub fn build(&self) -> Potion {
        Potion::new(
            self.name.clone(),
            self.price,
            self.level_requirement,
            self.attribute,
            self.amount,
        )
    }
}

impl SpellTemplate {
    pub fn build(&self) -> Spell {
        Spell::new(
            self.name.clone(),
            self.price,
            self.level_requirement,
            self.damage,
            self.mana_cost,
            self.element,
        )
    }
}

impl HeroTemplate {
    pub fn build(&self) -> Hero {
        Hero::from_template(self)
    }
}

impl MonsterTemplate {
    pub fn build(&self) -> Monster {
        Monster::from_template(self)
    }
}
