use super::{Durability, ItemSpec};

/// Extreme weapon values are normalized so heroes cannot one-shot encounters.
const DAMAGE_MIN: f64 = 5.0;
const DAMAGE_MAX: f64 = 40.0;
const DEFAULT_DURABILITY: u32 = 100;

/// An equippable weapon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    spec: ItemSpec,
    damage: f64,
    hands_required: u32,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        price: u32,
        level_requirement: u32,
        damage: f64,
        hands_required: u32,
    ) -> Self {
        Self {
            spec: ItemSpec::new(
                name,
                price,
                level_requirement,
                Durability::new(DEFAULT_DURABILITY),
            ),
            damage: damage.clamp(DAMAGE_MIN, DAMAGE_MAX),
            hands_required,
        }
    }

    pub fn spec(&self) -> &ItemSpec {
        &self.spec
    }

    pub fn spec_mut(&mut self) -> &mut ItemSpec {
        &mut self.spec
    }

    pub fn damage(&self) -> f64 {
        self.damage
    }

    pub fn hands_required(&self) -> u32 {
        self.hands_required
    }

    pub fn is_usable(&self) -> bool {
        self.spec.is_usable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_into_balance_window() {
        assert_eq!(Weapon::new("Toothpick", 1, 1, 0.5, 1).damage(), 5.0);
        assert_eq!(Weapon::new("Doomblade", 1, 1, 900.0, 2).damage(), 40.0);
        assert_eq!(Weapon::new("Sword", 1, 1, 25.0, 1).damage(), 25.0);
    }

    #[test]
    fn weapons_ship_with_a_full_durability_budget() {
        let w = Weapon::new("Sword", 500, 1, 20.0, 1);
        assert!(w.is_usable());
        assert_eq!(w.spec().durability().remaining(), 100);
    }
}
