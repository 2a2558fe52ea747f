use super::{Durability, ItemSpec};

const DEFAULT_DURABILITY: u32 = 120;

/// Equippable armor; its reduction value feeds the shared mitigation formula.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armor {
    spec: ItemSpec,
    damage_reduction: f64,
}

impl Armor {
    pub fn new(
        name: impl Into<String>,
        price: u32,
        level_requirement: u32,
        damage_reduction: f64,
    ) -> Self {
        Self {
            spec: ItemSpec::new(
                name,
                price,
                level_requirement,
                Durability::new(DEFAULT_DURABILITY),
            ),
            damage_reduction,
        }
    }

    pub fn spec(&self) -> &ItemSpec {
        &self.spec
    }

    pub fn spec_mut(&mut self) -> &mut ItemSpec {
        &mut self.spec
    }

    pub fn damage_reduction(&self) -> f64 {
        self.damage_reduction
    }

    pub fn is_usable(&self) -> bool {
        self.spec.is_usable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_wears_out_after_its_budget() {
        let mut a = Armor::new("Breastplate", 350, 1, 30.0);
        for _ in 0..120 {
            a.spec_mut().consume_use();
        }
        assert!(!a.is_usable());
    }
}
