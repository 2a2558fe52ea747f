//! Monster wave placement and the per-round monster turn policy.

use std::collections::BTreeMap;

use crate::combat::{monster_attack, GameEvent};
use crate::config::GameConfig;
use crate::creature::{Hero, HeroId, Monster, MonsterId};
use crate::rng::RngSource;

use super::{Direction, Position, ValorBoard};

/// Free spawn cells for the next wave: one per lane on the monster Nexus
/// row, preferring the lane's entry column.
pub fn wave_positions(board: &ValorBoard) -> Vec<Position> {
    let mut positions = Vec::new();
    for &entry in &GameConfig::LANE_ENTRY_COLUMNS {
        for col in [entry, entry + 1] {
            let cell = Position::new(GameConfig::MONSTER_NEXUS_ROW, col);
            if board.monster_at(cell).is_none() {
                positions.push(cell);
                break;
            }
        }
    }
    positions
}

/// One monster's turn: strike a hero in range, otherwise press one row
/// toward the hero Nexus when the lane allows it.
pub fn monster_turn(
    board: &mut ValorBoard,
    id: MonsterId,
    monster: &mut Monster,
    heroes: &mut BTreeMap<HeroId, Hero>,
    rng: &mut dyn RngSource,
) -> Vec<GameEvent> {
    let Some(position) = board.monster_position(id) else {
        return Vec::new();
    };
    let in_range: Vec<HeroId> = board
        .heroes_in_range(position)
        .into_iter()
        .filter(|hero_id| heroes.get(hero_id).is_some_and(Hero::is_alive))
        .collect();
    if !in_range.is_empty() {
        let target = in_range[rng.pick(in_range.len())];
        if let Some(hero) = heroes.get_mut(&target) {
            return monster_attack(monster, hero, rng);
        }
    }
    if let Some(to) = Direction::Down.apply(position) {
        if board.move_monster(id, to).is_ok() {
            return vec![GameEvent::Moved {
                name: monster.name().to_string(),
                row: to.row,
                col: to.col,
            }];
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Terrain;
    use crate::catalog::{HeroTemplate, MonsterTemplate};
    use crate::creature::{HeroClass, MonsterKind};
    use crate::rng::testing::ScriptedRng;
    use crate::rng::GameRng;

    fn hero(name: &str) -> Hero {
        Hero::from_template(&HeroTemplate {
            name: name.into(),
            class: HeroClass::Paladin,
            mana: 400.0,
            strength: 480.0,
            agility: 400.0,
            dexterity: 400.0,
            gold: 100,
            experience: 0,
        })
    }

    fn monster() -> Monster {
        Monster::from_template(&MonsterTemplate {
            name: "Andrealphus".into(),
            kind: MonsterKind::Spirit,
            level: 3,
            damage: 30.0,
            defense: 20.0,
            dodge_percent: 0.0,
        })
    }

    fn open_board() -> ValorBoard {
        let mut rng = GameRng::seeded(5);
        let mut board = ValorBoard::generate(&mut rng);
        for row in 1..GameConfig::BOARD_SIZE - 1 {
            for col in 0..GameConfig::BOARD_SIZE {
                if crate::board::lane_of_column(col).is_some() {
                    board.set_terrain_for_testing(Position::new(row, col), Terrain::Plain);
                }
            }
        }
        board
    }

    #[test]
    fn waves_fill_each_lane_entry() {
        let board = open_board();
        assert_eq!(
            wave_positions(&board),
            vec![
                Position::new(0, 0),
                Position::new(0, 3),
                Position::new(0, 6)
            ]
        );

        let mut crowded = open_board();
        crowded.place_monster(MonsterId(9), Position::new(0, 0)).unwrap();
        let positions = wave_positions(&crowded);
        assert_eq!(positions[0], Position::new(0, 1));
    }

    #[test]
    fn monster_advances_when_nothing_is_in_range() {
        let mut board = open_board();
        let mut heroes = BTreeMap::new();
        board.place_monster(MonsterId(0), Position::new(1, 3)).unwrap();
        let mut m = monster();
        let events = monster_turn(
            &mut board,
            MonsterId(0),
            &mut m,
            &mut heroes,
            &mut ScriptedRng::new(&[0.99]),
        );
        assert!(matches!(events[0], GameEvent::Moved { row: 2, col: 3, .. }));
        assert_eq!(board.monster_position(MonsterId(0)), Some(Position::new(2, 3)));
    }

    #[test]
    fn monster_attacks_an_adjacent_hero_instead_of_moving() {
        let mut board = open_board();
        let mut heroes = BTreeMap::new();
        let mut h = hero("Gaerdal");
        board.place_hero(HeroId(0), Position::new(3, 4), &mut h).unwrap();
        heroes.insert(HeroId(0), h);
        board.place_monster(MonsterId(0), Position::new(2, 3)).unwrap();
        let mut m = monster();
        // Rolls: no dodge, no crit.
        let events = monster_turn(
            &mut board,
            MonsterId(0),
            &mut m,
            &mut heroes,
            &mut ScriptedRng::new(&[0.99, 0.99]),
        );
        assert!(matches!(events[0], GameEvent::Attacked { .. }));
        assert_eq!(board.monster_position(MonsterId(0)), Some(Position::new(2, 3)));
        assert!(heroes[&HeroId(0)].hp() < heroes[&HeroId(0)].max_hp());
    }
}
