use super::{Durability, ItemSpec};

/// Attribute a potion restores or raises.
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
pub enum PotionAttribute {
    Hp,
    Mp,
    Strength,
    Dexterity,
    Agility,
}

/// Single-use consumable targeting one attribute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Potion {
    spec: ItemSpec,
    attribute: PotionAttribute,
    amount: f64,
}

impl Potion {
    pub fn new(
        name: impl Into<String>,
        price: u32,
        level_requirement: u32,
        attribute: PotionAttribute,
        amount: f64,
    ) -> Self {
        Self {
            spec: ItemSpec::new(name, price, level_requirement, Durability::new(1)),
            attribute,
            amount,
        }
    }

    pub fn spec(&self) -> &ItemSpec {
        &self.spec
    }

    pub fn attribute(&self) -> PotionAttribute {
        self.attribute
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}
