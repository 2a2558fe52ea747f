//! Built-in template tables.
//!
//! Stat columns follow the classic campaign data sheets; values outside the
//! engine's engineered bounds are intentional and get normalized by the
//! creature/item constructors at build time.

use valor_core::{
    ArmorTemplate, Catalog, Element, HeroClass, HeroTemplate, MonsterKind, MonsterTemplate,
    PotionAttribute, PotionTemplate, SpellTemplate, WeaponTemplate,
};

/// The full built-in catalog.
pub fn default_catalog() -> Catalog {
    Catalog {
        heroes: heroes(),
        monsters: monsters(),
        weapons: weapons(),
        armors: armors(),
        potions: potions(),
        spells: spells(),
    }
}

fn hero(
    name: &str,
    class: HeroClass,
    mana: f64,
    strength: f64,
    agility: f64,
    dexterity: f64,
    gold: u32,
    experience: u32,
) -> HeroTemplate {
    HeroTemplate {
        name: name.to_string(),
        class,
        mana,
        strength,
        agility,
        dexterity,
        gold,
        experience,
    }
}

fn monster(
    name: &str,
    kind: MonsterKind,
    level: u32,
    damage: f64,
    defense: f64,
    dodge_percent: f64,
) -> MonsterTemplate {
    MonsterTemplate {
        name: name.to_string(),
        kind,
        level,
        damage,
        defense,
        dodge_percent,
    }
}

fn heroes() -> Vec<HeroTemplate> {
    use HeroClass::*;
    vec![
        hero("Gaerdal_Ironhand", Warrior, 100.0, 700.0, 500.0, 600.0, 1354, 7),
        hero("Sehanine_Monnbow", Warrior, 600.0, 700.0, 800.0, 500.0, 2500, 8),
        hero("Muamman_Duathall", Warrior, 300.0, 900.0, 500.0, 750.0, 2546, 6),
        hero("Flandal_Steelskin", Warrior, 200.0, 750.0, 650.0, 700.0, 2500, 7),
        hero("Undefeated_Yoj", Warrior, 400.0, 800.0, 400.0, 700.0, 2500, 7),
        hero("Rillifane_Rallathil", Sorcerer, 1300.0, 750.0, 450.0, 500.0, 2500, 9),
        hero("Segojan_Earthcaller", Sorcerer, 900.0, 800.0, 500.0, 650.0, 2500, 5),
        hero("Reign_Havoc", Sorcerer, 800.0, 800.0, 800.0, 800.0, 2500, 8),
        hero("Reverie_Ashels", Sorcerer, 900.0, 800.0, 700.0, 400.0, 2500, 7),
        hero("Kalabar", Sorcerer, 800.0, 850.0, 600.0, 400.0, 2500, 6),
        hero("Parzival", Paladin, 300.0, 750.0, 650.0, 700.0, 2500, 7),
        hero("Skoraeus_Stonebones", Paladin, 250.0, 650.0, 600.0, 350.0, 2500, 4),
        hero("Garl_Glittergold", Paladin, 100.0, 600.0, 500.0, 400.0, 2500, 5),
        hero("Amaryllis_Astra", Paladin, 500.0, 500.0, 500.0, 500.0, 2500, 5),
        hero("Caliber_Heist", Paladin, 400.0, 400.0, 400.0, 400.0, 2500, 8),
    ]
}

fn monsters() -> Vec<MonsterTemplate> {
    use MonsterKind::*;
    vec![
        monster("Desghidorrah", Dragon, 3, 300.0, 400.0, 35.0),
        monster("Chrysophylax", Dragon, 2, 200.0, 500.0, 20.0),
        monster("BunsenBurner", Dragon, 4, 400.0, 500.0, 45.0),
        monster("Natsunomeryu", Dragon, 1, 100.0, 200.0, 10.0),
        monster("TheScaleless", Dragon, 7, 700.0, 600.0, 75.0),
        monster("Phaarthurnax", Dragon, 6, 600.0, 700.0, 60.0),
        monster("BigBad-Wolf", Exoskeleton, 1, 150.0, 250.0, 15.0),
        monster("Wicked-Witch", Exoskeleton, 2, 250.0, 350.0, 25.0),
        monster("Cerberus", Exoskeleton, 5, 400.0, 500.0, 40.0),
        monster("Defender", Exoskeleton, 4, 500.0, 500.0, 35.0),
        monster("ChocolateFactoryGuard", Exoskeleton, 3, 400.0, 400.0, 30.0),
        monster("Andrealphus", Spirit, 2, 600.0, 500.0, 40.0),
        monster("Andromalius", Spirit, 3, 550.0, 450.0, 25.0),
        monster("Chiang_Shih", Spirit, 4, 700.0, 600.0, 40.0),
        monster("FallenAngel", Spirit, 5, 800.0, 700.0, 50.0),
        monster("Ereshkigall", Spirit, 6, 950.0, 450.0, 35.0),
        monster("Melchiresas", Spirit, 7, 350.0, 150.0, 75.0),
    ]
}

fn weapons() -> Vec<WeaponTemplate> {
    let weapon = |name: &str, price, level_requirement, damage, hands_required| WeaponTemplate {
        name: name.to_string(),
        price,
        level_requirement,
        damage,
        hands_required,
    };
    vec![
        weapon("Sword", 500, 1, 800.0, 1),
        weapon("Bow", 300, 2, 500.0, 2),
        weapon("Scythe", 1000, 6, 1100.0, 2),
        weapon("Axe", 550, 5, 850.0, 1),
        weapon("TSwords", 1400, 8, 1600.0, 2),
        weapon("Dagger", 200, 1, 250.0, 1),
    ]
}

fn armors() -> Vec<ArmorTemplate> {
    let armor = |name: &str, price, level_requirement, damage_reduction| ArmorTemplate {
        name: name.to_string(),
        price,
        level_requirement,
        damage_reduction,
    };
    vec![
        armor("Platinum_Shield", 150, 1, 200.0),
        armor("Breastplate", 350, 3, 600.0),
        armor("Full_Body_Armor", 1000, 8, 1100.0),
        armor("Wizard_Shield", 1200, 10, 1500.0),
        armor("Guardian_Angel", 1000, 10, 1000.0),
    ]
}

fn potions() -> Vec<PotionTemplate> {
    let potion = |name: &str, price, level_requirement, attribute, amount| PotionTemplate {
        name: name.to_string(),
        price,
        level_requirement,
        attribute,
        amount,
    };
    vec![
        potion("Healing_Potion", 250, 1, PotionAttribute::Hp, 100.0),
        potion("Strength_Potion", 200, 1, PotionAttribute::Strength, 75.0),
        potion("Magic_Potion", 350, 2, PotionAttribute::Mp, 100.0),
        potion("Luck_Elixir", 500, 4, PotionAttribute::Agility, 65.0),
        potion("Dexterity_Draught", 450, 3, PotionAttribute::Dexterity, 80.0),
    ]
}

fn spells() -> Vec<SpellTemplate> {
    let spell = |name: &str, price, level_requirement, element, damage, mana_cost| SpellTemplate {
        name: name.to_string(),
        price,
        level_requirement,
        element,
        damage,
        mana_cost,
    };
    vec![
        spell("Flame_Tornado", 700, 4, Element::Fire, 850.0, 300.0),
        spell("Breath_of_Fire", 350, 1, Element::Fire, 450.0, 100.0),
        spell("Heat_Wave", 450, 2, Element::Fire, 600.0, 150.0),
        spell("Snow_Cannon", 500, 2, Element::Ice, 650.0, 250.0),
        spell("Ice_Blade", 250, 1, Element::Ice, 450.0, 100.0),
        spell("Frost_Blizzard", 750, 5, Element::Ice, 850.0, 350.0),
        spell("Lightning_Dagger", 400, 1, Element::Lightning, 500.0, 150.0),
        spell("Thunder_Blast", 950, 6, Element::Lightning, 950.0, 400.0),
        spell("Electric_Arrows", 550, 5, Element::Lightning, 650.0, 200.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use valor_core::{Hero, Monster};

    #[test]
    fn catalog_covers_every_class_and_kind() {
        let catalog = default_catalog();
        for class in [HeroClass::Warrior, HeroClass::Sorcerer, HeroClass::Paladin] {
            assert!(catalog.heroes_of(class).next().is_some(), "no {class} heroes");
        }
        for kind in [
            MonsterKind::Dragon,
            MonsterKind::Exoskeleton,
            MonsterKind::Spirit,
        ] {
            assert!(catalog.monsters_of(kind).next().is_some(), "no {kind} monsters");
        }
        assert!(!catalog.weapons.is_empty());
        assert!(!catalog.armors.is_empty());
        assert!(!catalog.potions.is_empty());
        assert!(!catalog.spells.is_empty());
    }

    #[test]
    fn every_template_builds_a_valid_unit() {
        let catalog = default_catalog();
        for template in &catalog.heroes {
            let hero: Hero = template.build();
            assert!(hero.is_alive());
            assert!((40.0..=105.1).contains(&hero.strength()));
            assert!((100.0..=250.0).contains(&hero.max_mana()));
        }
        for template in &catalog.monsters {
            let monster: Monster = template.build();
            assert!(monster.is_alive());
            assert!(monster.dodge_chance() <= 0.5 + 0.03);
        }
        for template in &catalog.weapons {
            let weapon = template.build();
            assert!((5.0..=40.0).contains(&weapon.damage()));
        }
    }
}
