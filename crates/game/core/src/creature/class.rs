//! Hero classes and their favored-stat policies.
//!
//! Class behavior is a lookup table keyed by the enum, applied at creation
//! and on every level-up, rather than a dispatch hierarchy.

/// Playable hero archetypes.
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
pub enum HeroClass {
    Warrior,
    Sorcerer,
    Paladin,
}

/// Stat multipliers a class applies at creation and on each level-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassPolicy {
    pub strength: f64,
    pub dexterity: f64,
    pub agility: f64,
    pub favored_label: &'static str,
}

const FAVORED_BOOST: f64 = 1.05;

impl HeroClass {
    /// Favored-stat policy for this class.
    pub fn policy(self) -> ClassPolicy {
        match self {
            HeroClass::Warrior => ClassPolicy {
                strength: FAVORED_BOOST,
                dexterity: 1.0,
                agility: FAVORED_BOOST,
                favored_label: "Strength & Agility",
            },
            HeroClass::Sorcerer => ClassPolicy {
                strength: 1.0,
                dexterity: FAVORED_BOOST,
                agility: FAVORED_BOOST,
                favored_label: "Dexterity & Agility",
            },
            HeroClass::Paladin => ClassPolicy {
                strength: FAVORED_BOOST,
                dexterity: FAVORED_BOOST,
                agility: 1.0,
                favored_label: "Strength & Dexterity",
            },
        }
    }
}
