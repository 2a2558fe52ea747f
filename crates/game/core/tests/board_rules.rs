//! Lane-board legality scenarios driven through the public API.

use valor_core::{
    ActionError, Direction, GameRng, Hero, HeroClass, HeroId, HeroTemplate, MonsterId, Position,
    Terrain, ValorBoard,
};

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

/// Generated board with every interior lane cell flattened to plain.
fn open_board(seed: u64) -> ValorBoard {
    let mut rng = GameRng::seeded(seed);
    let mut board = ValorBoard::generate(&mut rng);
    for row in 1..7 {
        for col in [0, 1, 3, 4, 6, 7] {
            board.set_terrain_for_testing(Position::new(row, col), Terrain::Plain);
        }
    }
    board
}

#[test]
fn identical_seeds_generate_identical_boards() {
    let a = ValorBoard::generate(&mut GameRng::seeded(99));
    let b = ValorBoard::generate(&mut GameRng::seeded(99));
    for row in 0..8 {
        for col in 0..8 {
            let cell = Position::new(row, col);
            assert_eq!(a.terrain(cell), b.terrain(cell));
        }
    }
}

#[test]
fn a_lane_monster_freezes_the_advance_until_cleared() {
    let mut board = open_board(1);
    let mut h = hero("Gaerdal");
    board
        .place_hero(HeroId(0), Position::new(5, 3), &mut h)
        .unwrap();
    board
        .place_monster(MonsterId(0), Position::new(3, 3))
        .unwrap();

    assert_eq!(
        board.validate_hero_move(HeroId(0), Position::new(4, 3)),
        Err(ActionError::FrontLineBlocked)
    );

    board.remove_monster(MonsterId(0));
    assert!(board
        .validate_hero_move(HeroId(0), Position::new(4, 3))
        .is_ok());
}

#[test]
fn teleport_crosses_lanes_but_never_lands_ahead() {
    let mut board = open_board(2);
    let mut a = hero("Gaerdal");
    let mut b = hero("Skoraeus");
    let mut c = hero("Parzival");
    board.place_hero(HeroId(0), Position::new(6, 0), &mut a).unwrap();
    board.place_hero(HeroId(1), Position::new(5, 1), &mut b).unwrap();
    board.place_hero(HeroId(2), Position::new(4, 4), &mut c).unwrap();

    // Same-lane ally rejected outright.
    assert_eq!(
        board.validate_teleport(HeroId(0), HeroId(1), Position::new(5, 0)),
        Err(ActionError::SameLaneTeleport)
    );
    // Beside the cross-lane ally: fine.
    assert!(board
        .validate_teleport(HeroId(0), HeroId(2), Position::new(4, 3))
        .is_ok());
    // A row closer to the enemy than the ally: rejected.
    assert_eq!(
        board.validate_teleport(HeroId(0), HeroId(2), Position::new(3, 4)),
        Err(ActionError::AheadOfAlly)
    );
}

#[test]
fn movement_needs_single_steps_on_walkable_cells() {
    let mut board = open_board(3);
    let mut h = hero("Gaerdal");
    board.place_hero(HeroId(0), Position::new(6, 1), &mut h).unwrap();

    assert_eq!(
        board.validate_hero_move(HeroId(0), Position::new(6, 2)),
        Err(ActionError::WallBlocked)
    );
    assert_eq!(
        board.validate_hero_move(HeroId(0), Position::new(4, 1)),
        Err(ActionError::NotAdjacent)
    );
    assert_eq!(
        board.validate_hero_move(HeroId(0), Position::new(5, 0)),
        Err(ActionError::NotAdjacent)
    );
    assert!(board.validate_hero_move(HeroId(0), Position::new(5, 1)).is_ok());
}

#[test]
fn obstacle_removal_is_adjacent_only_and_permanent() {
    let mut board = open_board(4);
    let mut h = hero("Gaerdal");
    board.place_hero(HeroId(0), Position::new(6, 6), &mut h).unwrap();
    board.set_terrain_for_testing(Position::new(5, 6), Terrain::Obstacle);
    board.set_terrain_for_testing(Position::new(3, 6), Terrain::Obstacle);

    assert_eq!(
        board.remove_obstacle(HeroId(0), Position::new(3, 6)),
        Err(ActionError::NotAdjacent)
    );
    assert_eq!(board.terrain(Position::new(3, 6)), Some(Terrain::Obstacle));

    board.remove_obstacle(HeroId(0), Position::new(5, 6)).unwrap();
    assert_eq!(board.terrain(Position::new(5, 6)), Some(Terrain::Plain));
    assert!(board.validate_hero_move(HeroId(0), Position::new(5, 6)).is_ok());
    // Removing it twice is an error: nothing is there anymore.
    assert_eq!(
        board.remove_obstacle(HeroId(0), Position::new(5, 6)),
        Err(ActionError::NotAnObstacle)
    );
}

#[test]
fn buffs_from_terrain_revert_on_the_way_out() {
    let mut board = open_board(5);
    board.set_terrain_for_testing(Position::new(5, 6), Terrain::Cave);
    let mut h = hero("Gaerdal");
    let agility_before = h.agility();
    board.place_hero(HeroId(0), Position::new(6, 6), &mut h).unwrap();
    board.move_hero(HeroId(0), Position::new(5, 6), &mut h).unwrap();
    assert!((h.agility() - agility_before * 1.1).abs() < 1e-9);
    board.move_hero(HeroId(0), Position::new(6, 6), &mut h).unwrap();
    assert!((h.agility() - agility_before).abs() < 1e-9);
}

#[test]
fn recall_is_unconditional_beyond_a_recorded_spawn() {
    let mut board = open_board(6);
    let mut h = hero("Gaerdal");
    board.place_hero(HeroId(0), Position::new(7, 0), &mut h).unwrap();
    for to in [Position::new(6, 0), Position::new(5, 0), Position::new(5, 1)] {
        board.move_hero(HeroId(0), to, &mut h).unwrap();
    }
    // A monster sitting ahead in the lane does not stop a recall.
    board.place_monster(MonsterId(0), Position::new(3, 0)).unwrap();
    let spawn = board.recall_hero(HeroId(0), &mut h).unwrap();
    assert_eq!(spawn, Position::new(7, 0));

    let mut other = hero("Skoraeus");
    assert_eq!(
        board.recall_hero(HeroId(1), &mut other),
        Err(ActionError::NoSpawnRecorded)
    );
}

#[test]
fn direction_helpers_match_board_geometry() {
    assert_eq!(
        Direction::Up.apply(Position::new(5, 3)),
        Some(Position::new(4, 3))
    );
    assert_eq!(Direction::Up.apply(Position::new(0, 3)), None);
    assert_eq!(Position::new(5, 3).lane(), Some(1));
    assert_eq!(Position::new(5, 2).lane(), None);
}
