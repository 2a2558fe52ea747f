/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Rounds between monster waves in board mode.
    pub spawn_interval: u32,
}

impl GameConfig {
    // ===== board geometry =====
    /// Side length of the square Valor board.
    pub const BOARD_SIZE: usize = 8;
    /// Permanently impassable columns separating the three lanes.
    pub const WALL_COLUMNS: [usize; 2] = [2, 5];
    /// Row of the monster Nexus (heroes win by reaching it).
    pub const MONSTER_NEXUS_ROW: usize = 0;
    /// Row of the hero Nexus (monsters win by reaching it).
    pub const HERO_NEXUS_ROW: usize = 7;
    /// Number of lanes (pairs of passable columns).
    pub const LANE_COUNT: usize = 3;
    /// Leftmost column of each lane; heroes spawn and waves arrive here.
    pub const LANE_ENTRY_COLUMNS: [usize; 3] = [0, 3, 6];

    // ===== combat balance =====
    /// Critical-hit chance for hero weapon attacks.
    pub const HERO_CRIT_CHANCE: f64 = 0.10;
    /// Critical-hit chance for monster attacks.
    pub const MONSTER_CRIT_CHANCE: f64 = 0.05;
    /// Damage multiplier on a critical hit.
    pub const CRIT_MULTIPLIER: f64 = 2.0;
    /// Monster hit points per level.
    pub const MONSTER_HP_PER_LEVEL: f64 = 60.0;
    /// Fraction of max HP and mana regained by survivors each board round.
    pub const ROUND_REGEN_FRACTION: f64 = 0.1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SPAWN_INTERVAL: u32 = 8;

    pub fn new() -> Self {
        Self {
            spawn_interval: Self::DEFAULT_SPAWN_INTERVAL,
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            spawn_interval: difficulty.spawn_interval(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Difficulty setting for board mode; harder settings spawn waves faster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Rounds between monster waves.
    pub fn spawn_interval(self) -> u32 {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 6,
            Difficulty::Hard => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_maps_to_spawn_interval() {
        assert_eq!(GameConfig::with_difficulty(Difficulty::Easy).spawn_interval, 8);
        assert_eq!(GameConfig::with_difficulty(Difficulty::Medium).spawn_interval, 6);
        assert_eq!(GameConfig::with_difficulty(Difficulty::Hard).spawn_interval, 4);
    }

    #[test]
    fn wall_columns_split_three_lanes() {
        assert_eq!(GameConfig::WALL_COLUMNS.len() + 1, GameConfig::LANE_COUNT);
    }
}
