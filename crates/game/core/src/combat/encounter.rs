//! Engagement state machine: Start → (hero turns → monster turn)* → End.
//!
//! The encounter owns the spawned monsters; the caller keeps ownership of
//! the party and passes it into each phase. Heroes act through
//! [`Encounter::hero_action`]; info queries are plain state reads and never
//! consume a turn.

use crate::creature::{Hero, Monster};
use crate::error::{ActionError, ActionReport};
use crate::rng::RngSource;

use super::event::GameEvent;
use super::resolver;

/// One turn-consuming battle choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleAction {
    /// Weapon attack on the monster at `target` (encounter index).
    Attack { target: usize },
    /// Cast the known spell at `spell` on the monster at `target`.
    CastSpell { spell: usize, target: usize },
    /// Drink the potion at `potion` in the bag.
    DrinkPotion { potion: usize },
    /// Equip the weapon at `weapon` in the bag.
    EquipWeapon { weapon: usize },
    /// Equip the armor at `armor` in the bag.
    EquipArmor { armor: usize },
}

/// Where the engagement currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterPhase {
    Ongoing,
    HeroesVictorious,
    HeroesDefeated,
}

/// Final report of a concluded engagement.
#[derive(Clone, Debug, PartialEq)]
pub struct EncounterOutcome {
    pub victory: bool,
    pub events: Vec<GameEvent>,
}

/// A running battle between the party and a wave of monsters.
#[derive(Clone, Debug)]
pub struct Encounter {
    monsters: Vec<Monster>,
    monster_count: usize,
    highest_monster_level: u32,
}

impl Encounter {
    /// Starts the engagement: pins every hero's battle HP cap to its base.
    pub fn begin(heroes: &mut [Hero], monsters: Vec<Monster>) -> Self {
        for hero in heroes.iter_mut() {
            hero.prepare_for_battle();
        }
        let highest_monster_level = monsters.iter().map(Monster::level).max().unwrap_or(1);
        let monster_count = monsters.len();
        tracing::debug!(monster_count, highest_monster_level, "encounter begins");
        Self {
            monsters,
            monster_count,
            highest_monster_level,
        }
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Executes one hero's battle action.
    ///
    /// Errors never mutate state except the documented mana-shortfall case
    /// (see [`ActionError::consumes_turn`]); the caller re-prompts while the
    /// turn is unconsumed.
    pub fn hero_action(
        &mut self,
        heroes: &mut [Hero],
        hero_index: usize,
        action: BattleAction,
        rng: &mut dyn RngSource,
    ) -> Result<ActionReport, ActionError> {
        let hero = heroes.get_mut(hero_index).ok_or(ActionError::UnknownTarget)?;
        if hero.is_fainted() {
            return Err(ActionError::ActorFainted);
        }
        match action {
            BattleAction::Attack { target } => {
                let monster = self.living_target(target)?;
                Ok(ActionReport::consumed(resolver::hero_attack(
                    hero, monster, rng,
                )))
            }
            BattleAction::CastSpell { spell, target } => {
                let monster = self.living_target(target)?;
                let events = resolver::cast_spell(hero, spell, monster, rng)?;
                Ok(ActionReport::consumed(events))
            }
            BattleAction::DrinkPotion { potion } => {
                let report = hero.drink_potion(potion)?;
                Ok(ActionReport::consumed(vec![GameEvent::PotionUsed {
                    hero: hero.name().to_string(),
                    potion: report.potion,
                    attribute: report.attribute,
                    applied: report.applied,
                }]))
            }
            BattleAction::EquipWeapon { weapon } => {
                let item = hero.equip_weapon(weapon)?.spec().name.clone();
                Ok(ActionReport::consumed(vec![GameEvent::Equipped {
                    hero: hero.name().to_string(),
                    item,
                }]))
            }
            BattleAction::EquipArmor { armor } => {
                let item = hero.equip_armor(armor)?.spec().name.clone();
                Ok(ActionReport::consumed(vec![GameEvent::Equipped {
                    hero: hero.name().to_string(),
                    item,
                }]))
            }
        }
    }

    fn living_target(&mut self, index: usize) -> Result<&mut Monster, ActionError> {
        let monster = self
            .monsters
            .get_mut(index)
            .ok_or(ActionError::UnknownTarget)?;
        if monster.is_fainted() {
            return Err(ActionError::TargetFainted);
        }
        Ok(monster)
    }

    /// Runs the monster phase: each living monster strikes one uniformly
    /// random living hero.
    pub fn monsters_turn(&mut self, heroes: &mut [Hero], rng: &mut dyn RngSource) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for monster in self.monsters.iter_mut().filter(|m| m.is_alive()) {
            let living: Vec<usize> = heroes
                .iter()
                .enumerate()
                .filter(|(_, h)| h.is_alive())
                .map(|(i, _)| i)
                .collect();
            if living.is_empty() {
                break;
            }
            let target = living[rng.pick(living.len())];
            events.extend(resolver::monster_attack(monster, &mut heroes[target], rng));
        }
        events
    }

    /// Current phase given the party state.
    pub fn phase(&self, heroes: &[Hero]) -> EncounterPhase {
        if heroes.iter().all(Hero::is_fainted) {
            EncounterPhase::HeroesDefeated
        } else if self.monsters.iter().all(Monster::is_fainted) {
            EncounterPhase::HeroesVictorious
        } else {
            EncounterPhase::Ongoing
        }
    }

    /// Ends the engagement: battle caps reset for everyone; on victory the
    /// survivors collect rewards and the fainted are revived at half
    /// strength instead.
    pub fn conclude(self, heroes: &mut [Hero]) -> EncounterOutcome {
        let victory = self.monsters.iter().all(Monster::is_fainted);
        let mut events = Vec::new();
        for hero in heroes.iter_mut() {
            hero.reset_after_battle_caps();
        }
        if victory {
            let experience = 2u32.max(self.monster_count as u32 * 2);
            let gold = 50u32.max(self.highest_monster_level * 80);
            for hero in heroes.iter_mut() {
                if hero.is_fainted() {
                    hero.revive_half();
                    events.push(GameEvent::Revived {
                        hero: hero.name().to_string(),
                    });
                    continue;
                }
                let levels = hero.gain_rewards(experience, gold);
                events.push(GameEvent::RewardsGranted {
                    hero: hero.name().to_string(),
                    experience,
                    gold,
                });
                for level in levels {
                    events.push(GameEvent::LeveledUp {
                        hero: hero.name().to_string(),
                        level,
                    });
                }
            }
        }
        tracing::debug!(victory, "encounter concluded");
        EncounterOutcome { victory, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{HeroTemplate, MonsterTemplate};
    use crate::creature::{HeroClass, MonsterKind};
    use crate::rng::testing::ScriptedRng;

    fn party() -> Vec<Hero> {
        vec![Hero::from_template(&HeroTemplate {
            name: "Skoraeus".into(),
            class: HeroClass::Sorcerer,
            mana: 600.0,
            strength: 480.0,
            agility: 400.0,
            dexterity: 400.0,
            gold: 500,
            experience: 0,
        })]
    }

    fn wave(level: u32) -> Vec<Monster> {
        vec![Monster::from_template(&MonsterTemplate {
            name: "BigBad-Wolf".into(),
            kind: MonsterKind::Exoskeleton,
            level,
            damage: 25.0,
            defense: 15.0,
            dodge_percent: 0.0,
        })]
    }

    #[test]
    fn begin_pins_battle_caps() {
        let mut heroes = party();
        let encounter = Encounter::begin(&mut heroes, wave(2));
        assert_eq!(heroes[0].battle_max_hp(), heroes[0].base_max_hp());
        assert_eq!(encounter.phase(&heroes), EncounterPhase::Ongoing);
    }

    #[test]
    fn fainted_targets_are_rejected() {
        let mut heroes = party();
        let mut encounter = Encounter::begin(&mut heroes, wave(2));
        encounter.monsters[0].take_damage(f64::MAX);
        let err = encounter
            .hero_action(
                &mut heroes,
                0,
                BattleAction::Attack { target: 0 },
                &mut ScriptedRng::new(&[0.99]),
            )
            .unwrap_err();
        assert_eq!(err, ActionError::TargetFainted);
        assert_eq!(
            encounter
                .hero_action(
                    &mut heroes,
                    0,
                    BattleAction::Attack { target: 9 },
                    &mut ScriptedRng::new(&[0.99]),
                )
                .unwrap_err(),
            ActionError::UnknownTarget
        );
    }

    #[test]
    fn equip_failure_does_not_consume_the_turn() {
        let mut heroes = party();
        let mut encounter = Encounter::begin(&mut heroes, wave(2));
        let err = encounter
            .hero_action(
                &mut heroes,
                0,
                BattleAction::EquipWeapon { weapon: 0 },
                &mut ScriptedRng::new(&[0.99]),
            )
            .unwrap_err();
        assert_eq!(err, ActionError::EmptySlot);
        assert!(!err.consumes_turn());
    }

    #[test]
    fn victory_distributes_rewards_and_revives_the_fallen() {
        let mut heroes = party();
        heroes.push(Hero::from_template(&HeroTemplate {
            name: "Parzival".into(),
            class: HeroClass::Warrior,
            mana: 400.0,
            strength: 600.0,
            agility: 500.0,
            dexterity: 400.0,
            gold: 300,
            experience: 0,
        }));
        let mut encounter = Encounter::begin(&mut heroes, wave(3));
        encounter.monsters[0].take_damage(f64::MAX);
        heroes[1].take_damage(f64::MAX);

        let gold_before = heroes[0].gold();
        let outcome = encounter.conclude(&mut heroes);
        assert!(outcome.victory);
        // gold = max(50, 3 * 80)
        assert_eq!(heroes[0].gold(), gold_before + 240);
        assert!(heroes[1].is_alive());
        assert_eq!(heroes[1].hp(), heroes[1].base_max_hp() * 0.5);
        assert!(outcome
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Revived { .. })));
    }

    #[test]
    fn defeat_grants_nothing() {
        let mut heroes = party();
        let mut encounter = Encounter::begin(&mut heroes, wave(2));
        heroes[0].take_damage(f64::MAX);
        assert_eq!(encounter.phase(&heroes), EncounterPhase::HeroesDefeated);
        let gold_before = heroes[0].gold();
        let outcome = encounter.conclude(&mut heroes);
        assert!(!outcome.victory);
        assert_eq!(heroes[0].gold(), gold_before);
        assert!(heroes[0].is_fainted());
    }

    #[test]
    fn monster_phase_targets_a_living_hero() {
        let mut heroes = party();
        let mut encounter = Encounter::begin(&mut heroes, wave(2));
        // No dodge, no crit.
        let mut rng = ScriptedRng::new(&[0.99, 0.99]);
        let events = encounter.monsters_turn(&mut heroes, &mut rng);
        assert!(matches!(events[0], GameEvent::Attacked { .. }));
        assert!(heroes[0].hp() < heroes[0].max_hp());
    }
}
