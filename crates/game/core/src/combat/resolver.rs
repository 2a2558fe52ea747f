//! Single-action combat resolution.
//!
//! Each function validates, rolls, mutates, and reports events in that
//! order; a failed validation leaves every participant untouched.

use crate::config::GameConfig;
use crate::creature::{mitigate_damage, Hero, Monster};
use crate::error::ActionError;
use crate::items::Armor;
use crate::rng::RngSource;

use super::event::{AttackResult, GameEvent};

/// Resolves a hero weapon attack against a monster.
///
/// The dodge roll comes first and aborts all damage; weapon durability is
/// spent on every attempt, dodged or not.
pub fn hero_attack(
    hero: &mut Hero,
    target: &mut Monster,
    rng: &mut dyn RngSource,
) -> Vec<GameEvent> {
    let result = if rng.chance(target.dodge_chance()) {
        AttackResult::dodged()
    } else {
        let mut damage = hero.attack_damage();
        let critical = rng.chance(GameConfig::HERO_CRIT_CHANCE);
        if critical {
            damage *= GameConfig::CRIT_MULTIPLIER;
        }
        let applied = target.take_damage(mitigate_damage(damage, target.defense()));
        AttackResult::hit(applied, critical)
    };
    let broken_weapon = hero.tick_weapon_durability();

    let mut events = Vec::new();
    if result.dodged {
        events.push(GameEvent::Dodged {
            attacker: hero.name().to_string(),
            target: target.name().to_string(),
        });
    } else {
        events.push(GameEvent::Attacked {
            attacker: hero.name().to_string(),
            target: target.name().to_string(),
            damage: result.damage,
            critical: result.critical,
        });
    }
    if let Some(item) = broken_weapon {
        events.push(GameEvent::ItemBroke {
            owner: hero.name().to_string(),
            item,
        });
    }
    if target.is_fainted() {
        events.push(GameEvent::Fainted {
            name: target.name().to_string(),
        });
    }
    tracing::debug!(attacker = hero.name(), target = target.name(), dodged = result.dodged, damage = result.damage, "hero attack resolved");
    events
}

/// Resolves a monster attack against a hero.
///
/// Mitigation uses the hero's equipped armor (none means zero reduction);
/// armor durability is spent only when a nonzero hit lands.
pub fn monster_attack(
    monster: &mut Monster,
    target: &mut Hero,
    rng: &mut dyn RngSource,
) -> Vec<GameEvent> {
    let result = if rng.chance(target.dodge_chance()) {
        AttackResult::dodged()
    } else {
        let mut damage = monster.attack_damage();
        let critical = rng.chance(GameConfig::MONSTER_CRIT_CHANCE);
        if critical {
            damage *= GameConfig::CRIT_MULTIPLIER;
        }
        let armor = target.equipped_armor().map_or(0.0, Armor::damage_reduction);
        let applied = target.take_damage(mitigate_damage(damage, armor));
        AttackResult::hit(applied, critical)
    };

    let mut events = Vec::new();
    if result.dodged {
        events.push(GameEvent::Dodged {
            attacker: monster.name().to_string(),
            target: target.name().to_string(),
        });
        return events;
    }
    events.push(GameEvent::Attacked {
        attacker: monster.name().to_string(),
        target: target.name().to_string(),
        damage: result.damage,
        critical: result.critical,
    });
    if result.damage > 0.0 {
        if let Some(item) = target.tick_armor_durability() {
            events.push(GameEvent::ItemBroke {
                owner: target.name().to_string(),
                item,
            });
        }
    }
    if target.is_fainted() {
        events.push(GameEvent::Fainted {
            name: target.name().to_string(),
        });
    }
    events
}

/// Resolves a spell cast at a monster.
///
/// A mana shortfall fails before anything is spent (the wasted turn is the
/// caller's bookkeeping). Once paid, the spell and mana stay spent even if
/// the target resists; a landed hit also applies the element's debuff.
pub fn cast_spell(
    hero: &mut Hero,
    spell_index: usize,
    target: &mut Monster,
    rng: &mut dyn RngSource,
) -> Result<Vec<GameEvent>, ActionError> {
    let spell = hero.spell(spell_index).ok_or(ActionError::EmptySlot)?;
    let cost = spell.mana_cost();
    if hero.mana() < cost {
        return Err(ActionError::InsufficientMana {
            needed: cost,
            available: hero.mana(),
        });
    }
    let spell = hero.consume_spell(spell_index);
    hero.use_mana(cost);

    let mitigation = (100.0 / (100.0 + target.defense())).max(0.1);
    let damage = (hero.spell_damage(&spell) * mitigation).max(1.0);

    let mut events = Vec::new();
    if rng.chance(target.dodge_chance()) {
        events.push(GameEvent::SpellResisted {
            caster: hero.name().to_string(),
            spell: spell.spec().name.clone(),
            target: target.name().to_string(),
        });
        return Ok(events);
    }
    let applied = target.take_damage(damage);
    spell.element().apply_debuff(target);
    events.push(GameEvent::SpellCast {
        caster: hero.name().to_string(),
        spell: spell.spec().name.clone(),
        target: target.name().to_string(),
        damage: applied,
        element: spell.element(),
    });
    if target.is_fainted() {
        events.push(GameEvent::Fainted {
            name: target.name().to_string(),
        });
    }
    Ok(events)
}
