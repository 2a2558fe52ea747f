//! The Valor lane board: three lanes, walls, nexus rows, occupancy,
//! movement legality, teleport, recall, obstacles, and terrain buffs.
//!
//! Occupancy is tracked as two separate position maps (hero and monster);
//! a cell may hold at most one of each kind, and walls/obstacles never hold
//! anyone. All legality checks run before any mutation.

mod npc;
mod position;
mod terrain;

pub use npc::{monster_turn, wave_positions};
pub use position::{lane_of_column, Direction, Position};
pub use terrain::{AppliedBuff, BuffedStat, Terrain, TERRAIN_BUFF_FACTOR};

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::creature::{Hero, HeroId, MonsterId};
use crate::error::ActionError;
use crate::rng::RngSource;

const SIZE: usize = GameConfig::BOARD_SIZE;

/// Which army a unit or outcome belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Heroes,
    Monsters,
}

/// The 8x8 lane board with its occupancy and buff bookkeeping.
#[derive(Clone, Debug)]
pub struct ValorBoard {
    grid: [[Terrain; SIZE]; SIZE],
    hero_positions: BTreeMap<HeroId, Position>,
    monster_positions: BTreeMap<MonsterId, Position>,
    hero_spawns: BTreeMap<HeroId, Position>,
    buffs: BTreeMap<HeroId, AppliedBuff>,
}

impl ValorBoard {
    /// Generates a fresh board.
    ///
    /// Wall columns and nexus rows are fixed; every interior lane cell draws
    /// uniformly from the five terrain kinds. A repair pass then guarantees
    /// at least one Bush, Cave, Koulou, and Plain cell somewhere in the
    /// lanes, so every buff type is always reachable.
    pub fn generate(rng: &mut dyn RngSource) -> Self {
        let mut grid = [[Terrain::Plain; SIZE]; SIZE];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = if GameConfig::WALL_COLUMNS.contains(&col) {
                    Terrain::Wall
                } else if row == GameConfig::MONSTER_NEXUS_ROW {
                    Terrain::MonsterNexus
                } else if row == GameConfig::HERO_NEXUS_ROW {
                    Terrain::HeroNexus
                } else {
                    random_lane_terrain(rng)
                };
            }
        }
        let mut board = Self {
            grid,
            hero_positions: BTreeMap::new(),
            monster_positions: BTreeMap::new(),
            hero_spawns: BTreeMap::new(),
            buffs: BTreeMap::new(),
        };
        for kind in [Terrain::Bush, Terrain::Cave, Terrain::Koulou] {
            board.ensure_terrain_present(kind, rng);
        }
        board.ensure_plain_exists();
        tracing::debug!("valor board generated");
        board
    }

    fn ensure_terrain_present(&mut self, kind: Terrain, rng: &mut dyn RngSource) {
        if self.contains_terrain(kind) {
            return;
        }
        let mut cells = interior_lane_cells();
        shuffle(&mut cells, rng);
        if let Some(cell) = cells.first() {
            self.grid[cell.row][cell.col] = kind;
        }
    }

    fn ensure_plain_exists(&mut self) {
        if self.contains_terrain(Terrain::Plain) {
            return;
        }
        let cell = interior_lane_cells()[0];
        self.grid[cell.row][cell.col] = Terrain::Plain;
    }

    fn contains_terrain(&self, kind: Terrain) -> bool {
        self.grid.iter().flatten().any(|&t| t == kind)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn terrain(&self, position: Position) -> Option<Terrain> {
        position
            .in_bounds()
            .then(|| self.grid[position.row][position.col])
    }

    pub fn is_hero_nexus(&self, position: Position) -> bool {
        self.terrain(position) == Some(Terrain::HeroNexus)
    }

    pub fn is_monster_nexus(&self, position: Position) -> bool {
        self.terrain(position) == Some(Terrain::MonsterNexus)
    }

    pub fn hero_position(&self, id: HeroId) -> Option<Position> {
        self.hero_positions.get(&id).copied()
    }

    pub fn monster_position(&self, id: MonsterId) -> Option<Position> {
        self.monster_positions.get(&id).copied()
    }

    pub fn hero_at(&self, position: Position) -> Option<HeroId> {
        self.hero_positions
            .iter()
            .find(|&(_, &p)| p == position)
            .map(|(&id, _)| id)
    }

    pub fn monster_at(&self, position: Position) -> Option<MonsterId> {
        self.monster_positions
            .iter()
            .find(|&(_, &p)| p == position)
            .map(|(&id, _)| id)
    }

    pub fn hero_positions(&self) -> impl Iterator<Item = (HeroId, Position)> + '_ {
        self.hero_positions.iter().map(|(&id, &p)| (id, p))
    }

    pub fn monster_positions(&self) -> impl Iterator<Item = (MonsterId, Position)> + '_ {
        self.monster_positions.iter().map(|(&id, &p)| (id, p))
    }

    /// Monsters within attack range (kings-move distance 1) of a cell.
    pub fn monsters_in_range(&self, position: Position) -> Vec<MonsterId> {
        self.monster_positions
            .iter()
            .filter(|&(_, &p)| p.chebyshev(position) <= 1)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Heroes within attack range (kings-move distance 1) of a cell.
    pub fn heroes_in_range(&self, position: Position) -> Vec<HeroId> {
        self.hero_positions
            .iter()
            .filter(|&(_, &p)| p.chebyshev(position) <= 1)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Hero spawn cell recorded at first placement; recall returns here.
    pub fn recall_destination(&self, id: HeroId) -> Option<Position> {
        self.hero_spawns.get(&id).copied()
    }

    /// Side that has reached the opposing Nexus, if any.
    pub fn nexus_winner(&self) -> Option<Side> {
        if self
            .hero_positions
            .values()
            .any(|p| p.row == GameConfig::MONSTER_NEXUS_ROW)
        {
            return Some(Side::Heroes);
        }
        if self
            .monster_positions
            .values()
            .any(|p| p.row == GameConfig::HERO_NEXUS_ROW)
        {
            return Some(Side::Monsters);
        }
        None
    }

    // ========================================================================
    // Placement
    // ========================================================================

    /// Places a hero, recording its spawn cell on first placement and
    /// applying the destination's terrain buff.
    pub fn place_hero(
        &mut self,
        id: HeroId,
        position: Position,
        hero: &mut Hero,
    ) -> Result<(), ActionError> {
        self.check_walkable(position)?;
        if self.hero_positions.contains_key(&id) || self.hero_at(position).is_some() {
            return Err(ActionError::Occupied);
        }
        self.hero_positions.insert(id, position);
        self.hero_spawns.entry(id).or_insert(position);
        self.apply_enter_buff(id, position, hero);
        Ok(())
    }

    /// Removes a hero from the board, reverting any terrain buff. The spawn
    /// record survives so the hero can recall or respawn later.
    pub fn remove_hero(&mut self, id: HeroId, hero: &mut Hero) {
        self.revert_exit_buff(id, hero);
        self.hero_positions.remove(&id);
    }

    pub fn place_monster(&mut self, id: MonsterId, position: Position) -> Result<(), ActionError> {
        self.check_walkable(position)?;
        if self.monster_positions.contains_key(&id) || self.monster_at(position).is_some() {
            return Err(ActionError::Occupied);
        }
        self.monster_positions.insert(id, position);
        Ok(())
    }

    /// Removes a monster (death or despawn); fainted monsters leave play.
    pub fn remove_monster(&mut self, id: MonsterId) {
        self.monster_positions.remove(&id);
    }

    fn check_walkable(&self, position: Position) -> Result<(), ActionError> {
        match self.terrain(position) {
            None => Err(ActionError::OutOfBounds),
            Some(Terrain::Wall) => Err(ActionError::WallBlocked),
            Some(Terrain::Obstacle) => Err(ActionError::ObstacleBlocked),
            Some(_) => Ok(()),
        }
    }

    // ========================================================================
    // Movement
    // ========================================================================

    /// Checks a one-step hero move without mutating anything.
    ///
    /// Front-line rule: while any monster occupies a strictly lower row of
    /// the hero's lane, every row-decreasing move is blocked; the hero must
    /// fight through the lane instead of running past.
    pub fn validate_hero_move(&self, id: HeroId, to: Position) -> Result<(), ActionError> {
        let from = self.hero_position(id).ok_or(ActionError::NotOnBoard)?;
        if !to.in_bounds() {
            return Err(ActionError::OutOfBounds);
        }
        if from.manhattan(to) != 1 {
            return Err(ActionError::NotAdjacent);
        }
        self.check_walkable(to)?;
        if self.hero_at(to).is_some() {
            return Err(ActionError::Occupied);
        }
        if to.row < from.row {
            if let Some(lane) = from.lane() {
                if self.monster_ahead_of(lane, from.row) {
                    return Err(ActionError::FrontLineBlocked);
                }
            }
        }
        Ok(())
    }

    /// Checks a one-step monster move.
    ///
    /// Monsters press toward the hero Nexus but may not move past the
    /// nearest hero ahead in their lane: they can advance up to the hero's
    /// row and must fight through from there.
    pub fn validate_monster_move(&self, id: MonsterId, to: Position) -> Result<(), ActionError> {
        let from = self.monster_position(id).ok_or(ActionError::NotOnBoard)?;
        if !to.in_bounds() {
            return Err(ActionError::OutOfBounds);
        }
        if from.manhattan(to) != 1 {
            return Err(ActionError::NotAdjacent);
        }
        self.check_walkable(to)?;
        if self.monster_at(to).is_some() {
            return Err(ActionError::Occupied);
        }
        if to.row > from.row {
            if let Some(lane) = from.lane() {
                if let Some(front) = self.hero_front_row(lane, from.row) {
                    if to.row > front {
                        return Err(ActionError::FrontLineBlocked);
                    }
                }
            }
        }
        Ok(())
    }

    /// Moves a hero one step, swapping terrain buffs between the cells.
    pub fn move_hero(
        &mut self,
        id: HeroId,
        to: Position,
        hero: &mut Hero,
    ) -> Result<(), ActionError> {
        self.validate_hero_move(id, to)?;
        self.revert_exit_buff(id, hero);
        self.hero_positions.insert(id, to);
        self.apply_enter_buff(id, to, hero);
        Ok(())
    }

    pub fn move_monster(&mut self, id: MonsterId, to: Position) -> Result<(), ActionError> {
        self.validate_monster_move(id, to)?;
        self.monster_positions.insert(id, to);
        Ok(())
    }

    fn monster_ahead_of(&self, lane: usize, row: usize) -> bool {
        self.monster_positions
            .values()
            .any(|p| p.lane() == Some(lane) && p.row < row)
    }

    /// Closest hero row at or ahead of a monster at `row` in `lane`.
    ///
    /// Inclusive of the monster's own row so a monster may draw level with
    /// the front hero but never step beyond it.
    fn hero_front_row(&self, lane: usize, row: usize) -> Option<usize> {
        self.hero_positions
            .values()
            .filter(|p| p.lane() == Some(lane) && p.row >= row)
            .map(|p| p.row)
            .min()
    }

    /// Deepest (largest) row a monster holds in a lane: the front line a
    /// teleport may not land beyond.
    fn deepest_monster_row(&self, lane: usize) -> Option<usize> {
        self.monster_positions
            .values()
            .filter(|p| p.lane() == Some(lane))
            .map(|p| p.row)
            .max()
    }

    // ========================================================================
    // Teleport / recall / obstacles
    // ========================================================================

    /// Checks a hero-to-hero teleport without mutating anything.
    ///
    /// The destination must neighbor an ally in a different lane, may not be
    /// ahead of that ally, must be free and walkable, and may not lie beyond
    /// the destination lane's front-line monster.
    pub fn validate_teleport(
        &self,
        id: HeroId,
        ally: HeroId,
        destination: Position,
    ) -> Result<(), ActionError> {
        let from = self.hero_position(id).ok_or(ActionError::NotOnBoard)?;
        let ally_pos = self.hero_position(ally).ok_or(ActionError::UnknownTarget)?;
        if id == ally || from.lane() == ally_pos.lane() {
            return Err(ActionError::SameLaneTeleport);
        }
        if !destination.in_bounds() {
            return Err(ActionError::OutOfBounds);
        }
        if ally_pos.manhattan(destination) != 1 {
            return Err(ActionError::NotAdjacent);
        }
        if destination.row < ally_pos.row {
            return Err(ActionError::AheadOfAlly);
        }
        self.check_walkable(destination)?;
        if self.hero_at(destination).is_some() {
            return Err(ActionError::Occupied);
        }
        if let Some(lane) = destination.lane() {
            if let Some(front) = self.deepest_monster_row(lane) {
                if destination.row < front {
                    return Err(ActionError::FrontLineBlocked);
                }
            }
        }
        Ok(())
    }

    pub fn teleport_hero(
        &mut self,
        id: HeroId,
        ally: HeroId,
        destination: Position,
        hero: &mut Hero,
    ) -> Result<(), ActionError> {
        self.validate_teleport(id, ally, destination)?;
        self.revert_exit_buff(id, hero);
        self.hero_positions.insert(id, destination);
        self.apply_enter_buff(id, destination, hero);
        Ok(())
    }

    /// Returns a hero to its recorded spawn cell. No legality applies beyond
    /// having a spawn and the cell being free of other heroes.
    pub fn recall_hero(&mut self, id: HeroId, hero: &mut Hero) -> Result<Position, ActionError> {
        let spawn = self
            .hero_spawns
            .get(&id)
            .copied()
            .ok_or(ActionError::NoSpawnRecorded)?;
        if self.hero_at(spawn).is_some_and(|other| other != id) {
            return Err(ActionError::Occupied);
        }
        self.revert_exit_buff(id, hero);
        self.hero_positions.insert(id, spawn);
        self.apply_enter_buff(id, spawn, hero);
        Ok(spawn)
    }

    /// Converts a cardinally adjacent obstacle to plain terrain, permanently.
    pub fn remove_obstacle(&mut self, id: HeroId, target: Position) -> Result<(), ActionError> {
        let from = self.hero_position(id).ok_or(ActionError::NotOnBoard)?;
        if !target.in_bounds() {
            return Err(ActionError::OutOfBounds);
        }
        if from.manhattan(target) != 1 {
            return Err(ActionError::NotAdjacent);
        }
        if self.terrain(target) != Some(Terrain::Obstacle) {
            return Err(ActionError::NotAnObstacle);
        }
        self.grid[target.row][target.col] = Terrain::Plain;
        tracing::debug!(row = target.row, col = target.col, "obstacle removed");
        Ok(())
    }

    /// Test hook mirroring the original board's terrain override.
    pub fn set_terrain_for_testing(&mut self, position: Position, terrain: Terrain) {
        self.grid[position.row][position.col] = terrain;
    }

    // ========================================================================
    // Terrain buffs
    // ========================================================================

    fn apply_enter_buff(&mut self, id: HeroId, position: Position, hero: &mut Hero) {
        let Some(stat) = self.terrain(position).and_then(Terrain::buffed_stat) else {
            return;
        };
        let delta = match stat {
            BuffedStat::Strength => hero.strength() * TERRAIN_BUFF_FACTOR,
            BuffedStat::Dexterity => hero.dexterity() * TERRAIN_BUFF_FACTOR,
            BuffedStat::Agility => hero.agility() * TERRAIN_BUFF_FACTOR,
        };
        match stat {
            BuffedStat::Strength => hero.adjust_strength(delta),
            BuffedStat::Dexterity => hero.adjust_dexterity(delta),
            BuffedStat::Agility => hero.adjust_agility(delta),
        }
        self.buffs.insert(id, AppliedBuff { stat, delta });
    }

    fn revert_exit_buff(&mut self, id: HeroId, hero: &mut Hero) {
        let Some(buff) = self.buffs.remove(&id) else {
            return;
        };
        match buff.stat {
            BuffedStat::Strength => hero.adjust_strength(-buff.delta),
            BuffedStat::Dexterity => hero.adjust_dexterity(-buff.delta),
            BuffedStat::Agility => hero.adjust_agility(-buff.delta),
        }
    }
}

fn random_lane_terrain(rng: &mut dyn RngSource) -> Terrain {
    match rng.pick(5) {
        0 => Terrain::Plain,
        1 => Terrain::Bush,
        2 => Terrain::Cave,
        3 => Terrain::Koulou,
        _ => Terrain::Obstacle,
    }
}

/// Lane cells strictly between the nexus rows.
fn interior_lane_cells() -> Vec<Position> {
    let mut cells = Vec::new();
    for row in 1..SIZE - 1 {
        for col in 0..SIZE {
            if lane_of_column(col).is_some() {
                cells.push(Position::new(row, col));
            }
        }
    }
    cells
}

fn shuffle(cells: &mut [Position], rng: &mut dyn RngSource) {
    for i in (1..cells.len()).rev() {
        cells.swap(i, rng.pick(i + 1));
    }
}
