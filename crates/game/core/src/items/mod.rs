//! Item domain: weapons, armor, potions, spells.
//!
//! Each concrete item embeds an [`ItemSpec`] (name, price, level gate,
//! durability budget); the [`Item`] enum is the tagged-variant view used
//! where a heterogeneous bag is needed.

mod armor;
mod potion;
mod spell;
mod weapon;

pub use armor::Armor;
pub use potion::{Potion, PotionAttribute};
pub use spell::{Element, Spell};
pub use weapon::Weapon;

/// Bounded use counter. Reaching zero renders the item unusable; equipped
/// gear is automatically unequipped when it breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Durability {
    remaining: u32,
    maximum: u32,
}

impl Durability {
    /// Sentinel for items that never wear out.
    pub const UNLIMITED: Self = Self {
        remaining: u32::MAX,
        maximum: u32::MAX,
    };

    pub fn new(uses: u32) -> Self {
        Self {
            remaining: uses,
            maximum: uses,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn consume(&mut self) {
        if self.remaining != u32::MAX && self.remaining > 0 {
            self.remaining -= 1;
        }
    }

    /// Remaining budget as a percentage for status display data.
    pub fn percent(&self) -> f64 {
        if self.maximum == u32::MAX {
            return 100.0;
        }
        if self.maximum == 0 {
            return 0.0;
        }
        self.remaining as f64 / self.maximum as f64 * 100.0
    }
}

/// Fields shared by every item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub name: String,
    pub price: u32,
    pub level_requirement: u32,
    durability: Durability,
}

impl ItemSpec {
    pub fn new(
        name: impl Into<String>,
        price: u32,
        level_requirement: u32,
        durability: Durability,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            level_requirement,
            durability,
        }
    }

    pub fn durability(&self) -> Durability {
        self.durability
    }

    pub fn is_usable(&self) -> bool {
        !self.durability.is_exhausted()
    }

    pub fn consume_use(&mut self) {
        self.durability.consume();
    }
}

/// Tagged-variant view over the item family.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Weapon(Weapon),
    Armor(Armor),
    Potion(Potion),
    Spell(Spell),
}

impl Item {
    pub fn spec(&self) -> &ItemSpec {
        match self {
            Item::Weapon(w) => w.spec(),
            Item::Armor(a) => a.spec(),
            Item::Potion(p) => p.spec(),
            Item::Spell(s) => s.spec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.spec().name
    }
}

/// Addresses one item inside a hero's holdings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemSlot {
    Weapon(usize),
    Armor(usize),
    Potion(usize),
    Spell(usize),
}
