//! Hero state: progression, equipment, inventory, and battle caps.

use crate::catalog::HeroTemplate;
use crate::error::ActionError;
use crate::items::{Armor, Item, ItemSlot, Potion, PotionAttribute, Spell, Weapon};

use super::class::HeroClass;
use super::Stats;

// Balance bounds applied to raw template stats. Data files are untrusted;
// out-of-range values are normalized here instead of rejected.
const ATTRIBUTE_DIVISOR: f64 = 8.0;
const ATTRIBUTE_MIN: f64 = 40.0;
const ATTRIBUTE_MAX: f64 = 100.0;
const MANA_DIVISOR: f64 = 4.0;
const MANA_MIN: f64 = 100.0;
const MANA_MAX: f64 = 250.0;

const BASE_HP_PER_LEVEL: f64 = 100.0;
const LEVEL_UP_HP_BONUS: f64 = 100.0;
const LEVEL_UP_MANA_GROWTH: f64 = 1.04;
const LEVEL_UP_STAT_GROWTH: f64 = 1.03;
const DODGE_PER_AGILITY: f64 = 0.0005;
const DODGE_CAP: f64 = 0.35;
const UNARMED_MIN_DAMAGE: f64 = 5.0;

/// Typed bag of a hero's unequipped gear and consumables.
///
/// Equipped items are owned by the equipment slots and are never present
/// here at the same time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inventory {
    pub weapons: Vec<Weapon>,
    pub armors: Vec<Armor>,
    pub potions: Vec<Potion>,
}

/// A playable hero.
#[derive(Clone, Debug, PartialEq)]
pub struct Hero {
    stats: Stats,
    class: HeroClass,
    mana: f64,
    max_mana: f64,
    gold: u32,
    experience: u32,
    inventory: Inventory,
    equipped_weapon: Option<Weapon>,
    equipped_armor: Option<Armor>,
    spells: Vec<Spell>,
    base_max_hp: f64,
    battle_max_hp: f64,
    in_battle: bool,
}

/// Result of drinking a potion, for narration.
#[derive(Clone, Debug, PartialEq)]
pub struct PotionUse {
    pub potion: String,
    pub attribute: PotionAttribute,
    pub applied: f64,
}

impl Hero {
    /// Builds a level-1 hero from a template record, normalizing raw stats
    /// into playable bounds and applying the class's initial favored boost.
    pub fn from_template(template: &HeroTemplate) -> Self {
        let base_max_hp = BASE_HP_PER_LEVEL;
        let mut hero = Self {
            stats: Stats::new(
                template.name.clone(),
                1,
                base_max_hp,
                normalize_attribute(template.strength),
                normalize_attribute(template.dexterity),
                normalize_attribute(template.agility),
                0.0,
                0.0,
            ),
            class: template.class,
            mana: normalize_mana(template.mana),
            max_mana: normalize_mana(template.mana),
            gold: template.gold,
            experience: template.experience,
            inventory: Inventory::default(),
            equipped_weapon: None,
            equipped_armor: None,
            spells: Vec::new(),
            base_max_hp,
            battle_max_hp: base_max_hp,
            in_battle: false,
        };
        let policy = hero.class.policy();
        hero.stats.strength *= policy.strength;
        hero.stats.dexterity *= policy.dexterity;
        hero.stats.agility *= policy.agility;
        hero
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        self.stats.name()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn class(&self) -> HeroClass {
        self.class
    }

    pub fn level(&self) -> u32 {
        self.stats.level()
    }

    pub fn hp(&self) -> f64 {
        self.stats.hp()
    }

    /// The HP ceiling currently in effect (battle cap during a fight).
    pub fn max_hp(&self) -> f64 {
        self.battle_max_hp
    }

    pub fn base_max_hp(&self) -> f64 {
        self.base_max_hp
    }

    pub fn battle_max_hp(&self) -> f64 {
        self.battle_max_hp
    }

    pub fn mana(&self) -> f64 {
        self.mana
    }

    pub fn max_mana(&self) -> f64 {
        self.max_mana
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn strength(&self) -> f64 {
        self.stats.strength
    }

    pub fn dexterity(&self) -> f64 {
        self.stats.dexterity
    }

    pub fn agility(&self) -> f64 {
        self.stats.agility
    }

    pub fn is_fainted(&self) -> bool {
        self.stats.is_fainted()
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.equipped_weapon.as_ref()
    }

    pub fn equipped_armor(&self) -> Option<&Armor> {
        self.equipped_armor.as_ref()
    }

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    // ========================================================================
    // Derived combat values
    // ========================================================================

    /// Raw weapon-attack damage: `max(5, strength*0.3 + weapon*0.7)`.
    ///
    /// Monotonically non-decreasing in both strength and weapon damage; an
    /// unarmed hero still lands the floor value.
    pub fn attack_damage(&self) -> f64 {
        let weapon_damage = self.equipped_weapon.as_ref().map_or(0.0, Weapon::damage);
        let raw = self.stats.strength * 0.3 + weapon_damage * 0.7;
        raw.max(UNARMED_MIN_DAMAGE)
    }

    /// Raw spell damage scaled by dexterity.
    pub fn spell_damage(&self, spell: &Spell) -> f64 {
        spell.base_damage() * (1.0 + self.stats.dexterity / 10_000.0)
    }

    /// Chance to dodge an incoming attack, capped below certainty.
    pub fn dodge_chance(&self) -> f64 {
        (self.stats.agility * DODGE_PER_AGILITY).min(DODGE_CAP)
    }

    // ========================================================================
    // HP / mana / stat mutation
    // ========================================================================

    pub fn take_damage(&mut self, amount: f64) -> f64 {
        self.stats.take_damage(amount)
    }

    pub fn heal(&mut self, amount: f64) {
        self.stats.heal(amount);
    }

    pub fn use_mana(&mut self, amount: f64) {
        self.mana = (self.mana - amount).max(0.0);
    }

    pub fn restore_mana(&mut self, amount: f64) {
        if !(amount > 0.0) {
            return;
        }
        self.mana = (self.mana + amount).min(self.max_mana);
    }

    /// Signed stat adjustments; terrain buffs revert through these with the
    /// exact delta they granted.
    pub fn adjust_strength(&mut self, delta: f64) {
        self.stats.strength += delta;
    }

    pub fn adjust_dexterity(&mut self, delta: f64) {
        self.stats.dexterity += delta;
    }

    pub fn adjust_agility(&mut self, delta: f64) {
        self.stats.agility += delta;
    }

    // ========================================================================
    // Battle caps and over-heal
    // ========================================================================

    /// Pins the battle HP ceiling to the persistent base cap at the start of
    /// an engagement.
    pub fn prepare_for_battle(&mut self) {
        self.in_battle = true;
        self.set_battle_max_hp(self.base_max_hp);
    }

    /// Drops any over-heal inflation once the engagement ends.
    pub fn reset_after_battle_caps(&mut self) {
        self.in_battle = false;
        self.set_battle_max_hp(self.base_max_hp);
    }

    /// Applies a healing potion. Over-healing at full HP mid-battle raises
    /// the battle cap by the full amount for the remainder of that fight.
    ///
    /// Returns the HP actually gained.
    pub fn apply_health_potion(&mut self, amount: f64) -> f64 {
        if !(amount > 0.0) {
            return 0.0;
        }
        let before = self.stats.hp();
        if self.in_battle && self.stats.hp() >= self.battle_max_hp {
            self.set_battle_max_hp(self.battle_max_hp + amount);
            self.stats.set_hp(before + amount);
        } else {
            self.stats
                .set_hp((before + amount).min(self.battle_max_hp));
        }
        if self.stats.hp() > 0.0 {
            self.stats.set_fainted(false);
        }
        self.stats.hp() - before
    }

    fn set_battle_max_hp(&mut self, value: f64) {
        self.battle_max_hp = value;
        self.stats.set_max_hp(value);
    }

    // ========================================================================
    // Inventory and equipment
    // ========================================================================

    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.inventory.weapons.push(weapon);
    }

    pub fn add_armor(&mut self, armor: Armor) {
        self.inventory.armors.push(armor);
    }

    pub fn add_potion(&mut self, potion: Potion) {
        self.inventory.potions.push(potion);
    }

    pub fn learn_spell(&mut self, spell: Spell) {
        self.spells.push(spell);
    }

    /// Equips the weapon at `index` in the bag, returning the previously
    /// equipped weapon to the bag if it is still usable.
    pub fn equip_weapon(&mut self, index: usize) -> Result<&Weapon, ActionError> {
        let chosen = self
            .inventory
            .weapons
            .get(index)
            .ok_or(ActionError::EmptySlot)?;
        self.check_equippable(chosen.spec().level_requirement, chosen.is_usable())?;
        let chosen = self.inventory.weapons.remove(index);
        if let Some(old) = self.equipped_weapon.take() {
            if old.is_usable() {
                self.inventory.weapons.push(old);
            }
        }
        Ok(&*self.equipped_weapon.insert(chosen))
    }

    /// Equips the armor at `index` in the bag; same swap rules as weapons.
    pub fn equip_armor(&mut self, index: usize) -> Result<&Armor, ActionError> {
        let chosen = self
            .inventory
            .armors
            .get(index)
            .ok_or(ActionError::EmptySlot)?;
        self.check_equippable(chosen.spec().level_requirement, chosen.is_usable())?;
        let chosen = self.inventory.armors.remove(index);
        if let Some(old) = self.equipped_armor.take() {
            if old.is_usable() {
                self.inventory.armors.push(old);
            }
        }
        Ok(&*self.equipped_armor.insert(chosen))
    }

    fn check_equippable(&self, required_level: u32, usable: bool) -> Result<(), ActionError> {
        if self.level() < required_level {
            return Err(ActionError::LevelTooLow {
                level: self.level(),
                required: required_level,
            });
        }
        if !usable {
            return Err(ActionError::ItemBroken);
        }
        Ok(())
    }

    /// Spends one use of the equipped weapon; a broken weapon is unequipped
    /// and its name returned for narration.
    pub fn tick_weapon_durability(&mut self) -> Option<String> {
        let weapon = self.equipped_weapon.as_mut()?;
        weapon.spec_mut().consume_use();
        if weapon.is_usable() {
            None
        } else {
            self.equipped_weapon.take().map(|w| w.spec().name.clone())
        }
    }

    /// Spends one use of the equipped armor; broken armor is unequipped and
    /// its name returned for narration.
    pub fn tick_armor_durability(&mut self) -> Option<String> {
        let armor = self.equipped_armor.as_mut()?;
        armor.spec_mut().consume_use();
        if armor.is_usable() {
            None
        } else {
            self.equipped_armor.take().map(|a| a.spec().name.clone())
        }
    }

    // ========================================================================
    // Spells and potions
    // ========================================================================

    pub fn spell(&self, index: usize) -> Option<&Spell> {
        self.spells.get(index)
    }

    /// Removes a known spell; spells are single-use and leave the list when
    /// cast.
    pub(crate) fn consume_spell(&mut self, index: usize) -> Spell {
        self.spells.remove(index)
    }

    /// Drinks the potion at `index`, applying its attribute effect.
    pub fn drink_potion(&mut self, index: usize) -> Result<PotionUse, ActionError> {
        let potion = self
            .inventory
            .potions
            .get(index)
            .ok_or(ActionError::EmptySlot)?;
        let name = potion.spec().name.clone();
        let attribute = potion.attribute();
        let amount = potion.amount();
        let applied = match attribute {
            PotionAttribute::Hp => self.apply_health_potion(amount),
            PotionAttribute::Mp => {
                let before = self.mana;
                self.restore_mana(amount);
                self.mana - before
            }
            PotionAttribute::Strength => {
                self.adjust_strength(amount);
                amount
            }
            PotionAttribute::Dexterity => {
                self.adjust_dexterity(amount);
                amount
            }
            PotionAttribute::Agility => {
                self.adjust_agility(amount);
                amount
            }
        };
        self.inventory.potions.remove(index);
        Ok(PotionUse {
            potion: name,
            attribute,
            applied,
        })
    }

    // ========================================================================
    // Progression
    // ========================================================================

    /// Grants experience and gold, then resolves any level-ups in sequence.
    ///
    /// Returns each level reached, in order, for narration.
    pub fn gain_rewards(&mut self, experience: u32, gold: u32) -> Vec<u32> {
        self.experience += experience;
        self.gold += gold;
        self.check_level_up()
    }

    fn check_level_up(&mut self) -> Vec<u32> {
        let mut reached = Vec::new();
        let mut needed = self.level() * 10;
        while self.experience >= needed {
            self.experience -= needed;
            let level = self.level() + 1;
            self.stats.set_level(level);
            self.base_max_hp += LEVEL_UP_HP_BONUS;
            self.set_battle_max_hp(self.base_max_hp);
            self.stats.set_hp(self.battle_max_hp);
            self.mana *= LEVEL_UP_MANA_GROWTH;
            self.max_mana = self.max_mana.max(self.mana);
            self.stats.strength *= LEVEL_UP_STAT_GROWTH;
            self.stats.dexterity *= LEVEL_UP_STAT_GROWTH;
            self.stats.agility *= LEVEL_UP_STAT_GROWTH;
            let policy = self.class.policy();
            self.stats.strength *= policy.strength;
            self.stats.dexterity *= policy.dexterity;
            self.stats.agility *= policy.agility;
            reached.push(level);
            needed = level * 10;
        }
        reached
    }

    /// Brings a fainted hero back at half base HP and half mana.
    ///
    /// Used at round boundaries in board mode and after a lost skirmish.
    pub fn revive_half(&mut self) {
        if !self.is_fainted() {
            return;
        }
        self.set_battle_max_hp(self.base_max_hp);
        self.stats.set_hp(self.base_max_hp * 0.5);
        self.mana = self.max_mana * 0.5;
        self.stats.set_fainted(false);
    }

    // ========================================================================
    // Market transactions
    // ========================================================================

    /// Pays for an item and stores it (spells go to the known-spell list).
    pub fn purchase(&mut self, item: Item) -> Result<(), ActionError> {
        let price = item.spec().price;
        if self.gold < price {
            return Err(ActionError::InsufficientGold {
                price,
                gold: self.gold,
            });
        }
        self.gold -= price;
        match item {
            Item::Weapon(w) => self.inventory.weapons.push(w),
            Item::Armor(a) => self.inventory.armors.push(a),
            Item::Potion(p) => self.inventory.potions.push(p),
            Item::Spell(s) => self.spells.push(s),
        }
        Ok(())
    }

    /// Sells an unequipped item back at half price.
    pub fn sell(&mut self, slot: ItemSlot) -> Result<Item, ActionError> {
        let item = match slot {
            ItemSlot::Weapon(i) if i < self.inventory.weapons.len() => {
                Item::Weapon(self.inventory.weapons.remove(i))
            }
            ItemSlot::Armor(i) if i < self.inventory.armors.len() => {
                Item::Armor(self.inventory.armors.remove(i))
            }
            ItemSlot::Potion(i) if i < self.inventory.potions.len() => {
                Item::Potion(self.inventory.potions.remove(i))
            }
            ItemSlot::Spell(i) if i < self.spells.len() => Item::Spell(self.spells.remove(i)),
            _ => return Err(ActionError::EmptySlot),
        };
        self.gold += item.spec().price / 2;
        Ok(item)
    }
}

fn normalize_attribute(value: f64) -> f64 {
    (value / ATTRIBUTE_DIVISOR).clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX)
}

fn normalize_mana(value: f64) -> f64 {
    (value / MANA_DIVISOR).clamp(MANA_MIN, MANA_MAX)
}
