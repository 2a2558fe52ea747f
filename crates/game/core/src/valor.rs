//! Board-mode session: hero commands, monster rounds, waves, win conditions.
//!
//! The session owns the board and every unit, exposes the typed command
//! surface a front end drives, and runs the end-of-round pipeline (monster
//! turns, interval spawning, regeneration, revival). Queries for rendering
//! go straight to [`ValorSession::board`] and the unit accessors.

use std::collections::BTreeMap;

use crate::board::{self, Direction, Position, Side, ValorBoard};
use crate::catalog::MonsterTemplate;
use crate::combat::{cast_spell, hero_attack, GameEvent};
use crate::config::GameConfig;
use crate::creature::{Hero, HeroId, Monster, MonsterId};
use crate::error::{ActionError, ActionReport};
use crate::rng::RngSource;

/// Rewards granted to the killer when a monster falls on the board.
const KILL_XP_PER_LEVEL: u32 = 2;
const KILL_GOLD_PER_LEVEL: u32 = 80;

/// One hero request in board mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValorCommand {
    Move(Direction),
    Attack { target: MonsterId },
    CastSpell { spell: usize, target: MonsterId },
    DrinkPotion { potion: usize },
    EquipWeapon { weapon: usize },
    EquipArmor { armor: usize },
    Teleport { ally: HeroId, destination: Position },
    Recall,
    RemoveObstacle { target: Position },
}

/// A running Valor match.
#[derive(Debug)]
pub struct ValorSession {
    config: GameConfig,
    board: ValorBoard,
    heroes: BTreeMap<HeroId, Hero>,
    monsters: BTreeMap<MonsterId, Monster>,
    monster_pool: Vec<MonsterTemplate>,
    round: u32,
    next_monster_id: u32,
    winner: Option<Side>,
}

impl ValorSession {
    /// Starts a match: generates the board, places each hero on its lane's
    /// hero-Nexus entry cell, and spawns the opening wave.
    pub fn new(
        config: GameConfig,
        heroes: Vec<Hero>,
        monster_pool: Vec<MonsterTemplate>,
        rng: &mut dyn RngSource,
    ) -> Self {
        let mut session = Self {
            config,
            board: ValorBoard::generate(rng),
            heroes: BTreeMap::new(),
            monsters: BTreeMap::new(),
            monster_pool,
            round: 1,
            next_monster_id: 0,
            winner: None,
        };
        for (index, mut hero) in heroes.into_iter().enumerate() {
            let id = HeroId(index as u32);
            let lane = index % GameConfig::LANE_COUNT;
            let entry = GameConfig::LANE_ENTRY_COLUMNS[lane];
            // Both nexus columns of the lane are walkable; the second one
            // catches parties larger than the lane count.
            for col in [entry, entry + 1] {
                let spawn = Position::new(GameConfig::HERO_NEXUS_ROW, col);
                if session.board.place_hero(id, spawn, &mut hero).is_ok() {
                    break;
                }
            }
            session.heroes.insert(id, hero);
        }
        session.spawn_wave(rng);
        session
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn board(&self) -> &ValorBoard {
        &self.board
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.get(&id)
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(&id)
    }

    pub fn heroes(&self) -> impl Iterator<Item = (HeroId, &Hero)> {
        self.heroes.iter().map(|(&id, h)| (id, h))
    }

    pub fn monsters(&self) -> impl Iterator<Item = (MonsterId, &Monster)> {
        self.monsters.iter().map(|(&id, m)| (id, m))
    }

    /// Monsters a hero could attack this turn.
    pub fn attackable_monsters(&self, id: HeroId) -> Vec<MonsterId> {
        let Some(position) = self.board.hero_position(id) else {
            return Vec::new();
        };
        self.board
            .monsters_in_range(position)
            .into_iter()
            .filter(|m| self.monsters.get(m).is_some_and(Monster::is_alive))
            .collect()
    }

    // ========================================================================
    // Hero commands
    // ========================================================================

    /// Executes one hero command.
    ///
    /// Failures are typed and retryable; whether a failed action still spent
    /// the turn is [`ActionError::consumes_turn`]'s call. Reaching the
    /// monster Nexus decides the match immediately.
    pub fn hero_command(
        &mut self,
        id: HeroId,
        command: ValorCommand,
        rng: &mut dyn RngSource,
    ) -> Result<ActionReport, ActionError> {
        if self.winner.is_some() {
            return Err(ActionError::MatchOver);
        }
        let hero = self.heroes.get_mut(&id).ok_or(ActionError::UnknownTarget)?;
        if hero.is_fainted() {
            return Err(ActionError::ActorFainted);
        }
        let report = match command {
            ValorCommand::Move(direction) => {
                let from = self.board.hero_position(id).ok_or(ActionError::NotOnBoard)?;
                let to = direction.apply(from).ok_or(ActionError::OutOfBounds)?;
                self.board.move_hero(id, to, hero)?;
                let mut events = vec![GameEvent::Moved {
                    name: hero.name().to_string(),
                    row: to.row,
                    col: to.col,
                }];
                events.extend(self.check_hero_nexus(to));
                ActionReport::consumed(events)
            }
            ValorCommand::Attack { target } => {
                let position = self.board.hero_position(id).ok_or(ActionError::NotOnBoard)?;
                let monster = self
                    .monsters
                    .get_mut(&target)
                    .ok_or(ActionError::UnknownTarget)?;
                if monster.is_fainted() {
                    return Err(ActionError::TargetFainted);
                }
                let monster_pos = self
                    .board
                    .monster_position(target)
                    .ok_or(ActionError::UnknownTarget)?;
                if position.chebyshev(monster_pos) > 1 {
                    return Err(ActionError::OutOfRange);
                }
                let mut events = hero_attack(hero, monster, rng);
                events.extend(self.reap_monster(id, target));
                ActionReport::consumed(events)
            }
            ValorCommand::CastSpell { spell, target } => {
                let position = self.board.hero_position(id).ok_or(ActionError::NotOnBoard)?;
                let monster = self
                    .monsters
                    .get_mut(&target)
                    .ok_or(ActionError::UnknownTarget)?;
                if monster.is_fainted() {
                    return Err(ActionError::TargetFainted);
                }
                let monster_pos = self
                    .board
                    .monster_position(target)
                    .ok_or(ActionError::UnknownTarget)?;
                if position.chebyshev(monster_pos) > 1 {
                    return Err(ActionError::OutOfRange);
                }
                let mut events = cast_spell(hero, spell, monster, rng)?;
                events.extend(self.reap_monster(id, target));
                ActionReport::consumed(events)
            }
            ValorCommand::DrinkPotion { potion } => {
                let use_report = hero.drink_potion(potion)?;
                ActionReport::consumed(vec![GameEvent::PotionUsed {
                    hero: hero.name().to_string(),
                    potion: use_report.potion,
                    attribute: use_report.attribute,
                    applied: use_report.applied,
                }])
            }
            ValorCommand::EquipWeapon { weapon } => {
                let item = hero.equip_weapon(weapon)?.spec().name.clone();
                ActionReport::consumed(vec![GameEvent::Equipped {
                    hero: hero.name().to_string(),
                    item,
                }])
            }
            ValorCommand::EquipArmor { armor } => {
                let item = hero.equip_armor(armor)?.spec().name.clone();
                ActionReport::consumed(vec![GameEvent::Equipped {
                    hero: hero.name().to_string(),
                    item,
                }])
            }
            ValorCommand::Teleport { ally, destination } => {
                self.board.teleport_hero(id, ally, destination, hero)?;
                let mut events = vec![GameEvent::Teleported {
                    hero: hero.name().to_string(),
                    row: destination.row,
                    col: destination.col,
                }];
                events.extend(self.check_hero_nexus(destination));
                ActionReport::consumed(events)
            }
            ValorCommand::Recall => {
                let spawn = self.board.recall_hero(id, hero)?;
                ActionReport::consumed(vec![GameEvent::Recalled {
                    hero: hero.name().to_string(),
                    row: spawn.row,
                    col: spawn.col,
                }])
            }
            ValorCommand::RemoveObstacle { target } => {
                self.board.remove_obstacle(id, target)?;
                ActionReport::consumed(vec![GameEvent::ObstacleRemoved {
                    row: target.row,
                    col: target.col,
                }])
            }
        };
        tracing::debug!(hero = %id, ?command, "hero command executed");
        Ok(report)
    }

    /// Removes a slain monster from play and rewards its killer.
    fn reap_monster(&mut self, killer: HeroId, target: MonsterId) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let Some(monster) = self.monsters.get(&target) else {
            return events;
        };
        if monster.is_alive() {
            return events;
        }
        let level = monster.level();
        self.board.remove_monster(target);
        self.monsters.remove(&target);
        if let Some(hero) = self.heroes.get_mut(&killer) {
            let experience = KILL_XP_PER_LEVEL * level;
            let gold = KILL_GOLD_PER_LEVEL * level;
            let levels = hero.gain_rewards(experience, gold);
            events.push(GameEvent::RewardsGranted {
                hero: hero.name().to_string(),
                experience,
                gold,
            });
            for new_level in levels {
                events.push(GameEvent::LeveledUp {
                    hero: hero.name().to_string(),
                    level: new_level,
                });
            }
        }
        events
    }

    fn check_hero_nexus(&mut self, destination: Position) -> Option<GameEvent> {
        if self.board.is_monster_nexus(destination) {
            self.winner = Some(Side::Heroes);
            return Some(GameEvent::NexusReached { side: Side::Heroes });
        }
        None
    }

    // ========================================================================
    // Round pipeline
    // ========================================================================

    /// Runs everything between the last hero turn and the next round:
    /// monster turns, interval spawning, elimination check, regeneration,
    /// and revival of fainted heroes at their spawn cells.
    pub fn end_of_round(&mut self, rng: &mut dyn RngSource) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.winner.is_some() {
            return events;
        }

        let ids: Vec<MonsterId> = self.monsters.keys().copied().collect();
        for id in ids {
            let Some(monster) = self.monsters.get_mut(&id) else {
                continue;
            };
            if monster.is_fainted() {
                continue;
            }
            events.extend(board::monster_turn(
                &mut self.board,
                id,
                monster,
                &mut self.heroes,
                rng,
            ));
            if let Some(position) = self.board.monster_position(id) {
                if self.board.is_hero_nexus(position) {
                    self.winner = Some(Side::Monsters);
                    events.push(GameEvent::NexusReached {
                        side: Side::Monsters,
                    });
                    return events;
                }
            }
        }

        self.round += 1;
        if self.round % self.config.spawn_interval == 0 {
            events.extend(self.spawn_wave(rng));
        }
        if self.monsters.is_empty() {
            // The opposition has no units left to act and none arriving.
            self.winner = Some(Side::Heroes);
        }

        for hero in self.heroes.values_mut() {
            if hero.is_alive() {
                hero.heal(hero.max_hp() * GameConfig::ROUND_REGEN_FRACTION);
                hero.restore_mana(hero.max_mana() * GameConfig::ROUND_REGEN_FRACTION);
            }
        }
        events.extend(self.revive_fainted_heroes());
        tracing::debug!(round = self.round, winner = ?self.winner, "round advanced");
        events
    }

    /// Spawns one monster per lane, scaled to the strongest hero's level.
    fn spawn_wave(&mut self, rng: &mut dyn RngSource) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.monster_pool.is_empty() {
            return events;
        }
        let target_level = self
            .heroes
            .values()
            .map(Hero::level)
            .max()
            .unwrap_or(1);
        for position in board::wave_positions(&self.board) {
            let template = &self.monster_pool[rng.pick(self.monster_pool.len())];
            let monster = Monster::from_template(template).scaled_copy_for_level(target_level);
            let id = MonsterId(self.next_monster_id);
            self.next_monster_id += 1;
            if self.board.place_monster(id, position).is_ok() {
                events.push(GameEvent::MonsterSpawned {
                    monster: monster.name().to_string(),
                    row: position.row,
                    col: position.col,
                });
                self.monsters.insert(id, monster);
            }
        }
        events
    }

    /// Fainted heroes return at half strength on their spawn cells at the
    /// round boundary; a hero whose spawn is momentarily blocked stays off
    /// the board until it frees up.
    fn revive_fainted_heroes(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let ids: Vec<HeroId> = self.heroes.keys().copied().collect();
        for id in ids {
            let Some(hero) = self.heroes.get_mut(&id) else {
                continue;
            };
            if !hero.is_fainted() {
                continue;
            }
            hero.revive_half();
            events.push(GameEvent::Revived {
                hero: hero.name().to_string(),
            });
            if let Some(spawn) = self.board.recall_destination(id) {
                self.board.remove_hero(id, hero);
                if self.board.place_hero(id, spawn, hero).is_err() {
                    tracing::debug!(hero = %id, "spawn cell blocked; hero waits off board");
                }
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HeroTemplate;
    use crate::config::Difficulty;
    use crate::creature::{HeroClass, MonsterKind};
    use crate::rng::GameRng;

    fn hero(name: &str) -> Hero {
        Hero::from_template(&HeroTemplate {
            name: name.into(),
            class: HeroClass::Warrior,
            mana: 500.0,
            strength: 600.0,
            agility: 480.0,
            dexterity: 480.0,
            gold: 1000,
            experience: 0,
        })
    }

    fn pool() -> Vec<MonsterTemplate> {
        vec![MonsterTemplate {
            name: "Blinky".into(),
            kind: MonsterKind::Dragon,
            level: 1,
            damage: 30.0,
            defense: 20.0,
            dodge_percent: 0.0,
        }]
    }

    fn session() -> ValorSession {
        let mut rng = GameRng::seeded(42);
        ValorSession::new(
            GameConfig::with_difficulty(Difficulty::Easy),
            vec![hero("Gaerdal"), hero("Skoraeus"), hero("Parzival")],
            pool(),
            &mut rng,
        )
    }

    #[test]
    fn session_opens_with_heroes_and_a_wave_in_place() {
        let s = session();
        assert_eq!(s.heroes().count(), 3);
        assert_eq!(s.monsters().count(), 3);
        for (id, _) in s.heroes() {
            let pos = s.board().hero_position(id).unwrap();
            assert_eq!(pos.row, GameConfig::HERO_NEXUS_ROW);
        }
        for (id, _) in s.monsters() {
            let pos = s.board().monster_position(id).unwrap();
            assert_eq!(pos.row, GameConfig::MONSTER_NEXUS_ROW);
        }
        assert_eq!(s.winner(), None);
    }

    #[test]
    fn wave_monsters_scale_to_the_strongest_hero() {
        let mut rng = GameRng::seeded(9);
        let mut veteran = hero("Veteran");
        veteran.gain_rewards(30, 0); // reaches level 3
        let s = ValorSession::new(
            GameConfig::with_difficulty(Difficulty::Easy),
            vec![veteran, hero("Novice")],
            pool(),
            &mut rng,
        );
        for (_, monster) in s.monsters() {
            assert_eq!(monster.level(), 3);
        }
    }

    #[test]
    fn monsters_press_toward_the_hero_nexus_each_round() {
        let mut s = session();
        let mut rng = GameRng::seeded(7);
        let before: Vec<usize> = s
            .monsters()
            .map(|(id, _)| s.board().monster_position(id).unwrap().row)
            .collect();
        s.end_of_round(&mut rng);
        let after: Vec<usize> = s
            .monsters()
            .map(|(id, _)| s.board().monster_position(id).unwrap().row)
            .collect();
        for (b, a) in before.iter().zip(after.iter()) {
            assert!(a >= b, "monsters never retreat");
        }
        assert_eq!(s.round(), 2);
    }

    #[test]
    fn monster_reaching_the_hero_nexus_wins_the_match() {
        // One hero defends lane 0; the lanes 1 and 2 monsters walk their
        // empty lanes down to the hero Nexus unopposed.
        let mut rng = GameRng::seeded(42);
        let mut s = ValorSession::new(
            GameConfig::with_difficulty(Difficulty::Easy),
            vec![hero("Gaerdal")],
            pool(),
            &mut rng,
        );
        for _ in 0..20 {
            let events = s.end_of_round(&mut rng);
            if s.winner().is_some() {
                assert_eq!(s.winner(), Some(Side::Monsters));
                assert!(events
                    .iter()
                    .any(|e| matches!(e, GameEvent::NexusReached { side: Side::Monsters })));
                return;
            }
        }
        panic!("monsters never reached the hero nexus");
    }

    #[test]
    fn hero_reaching_the_monster_nexus_wins_immediately() {
        use crate::board::Terrain;

        let mut rng = GameRng::seeded(3);
        let mut s = ValorSession::new(
            GameConfig::with_difficulty(Difficulty::Easy),
            vec![hero("Gaerdal")],
            Vec::new(), // no monsters contest the march
            &mut rng,
        );
        for row in 1..GameConfig::BOARD_SIZE - 1 {
            s.board
                .set_terrain_for_testing(Position::new(row, 0), Terrain::Plain);
        }
        for _ in 0..GameConfig::BOARD_SIZE - 1 {
            let report = s
                .hero_command(HeroId(0), ValorCommand::Move(Direction::Up), &mut rng)
                .unwrap();
            assert!(report.turn_consumed);
        }
        assert_eq!(s.winner(), Some(Side::Heroes));
        assert_eq!(
            s.board().hero_position(HeroId(0)),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn commands_are_rejected_after_the_match_ends() {
        let mut s = session();
        s.winner = Some(Side::Heroes);
        let mut rng = GameRng::seeded(1);
        assert_eq!(
            s.hero_command(HeroId(0), ValorCommand::Recall, &mut rng),
            Err(ActionError::MatchOver)
        );
    }

    #[test]
    fn out_of_range_attacks_are_rejected() {
        let mut s = session();
        let mut rng = GameRng::seeded(1);
        let target = s.monsters().next().map(|(id, _)| id).unwrap();
        // Heroes start on row 7, monsters on row 0.
        assert_eq!(
            s.hero_command(HeroId(0), ValorCommand::Attack { target }, &mut rng),
            Err(ActionError::OutOfRange)
        );
    }
}
