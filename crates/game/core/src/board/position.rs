//! Grid coordinates, cardinal directions, and lane arithmetic.

use crate::config::GameConfig;

const SIZE: usize = GameConfig::BOARD_SIZE;

/// Discrete board cell. Row 0 is the monster Nexus; row 7 the hero Nexus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Kings-move distance; attack range on the board uses this metric.
    pub fn chebyshev(self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// In-bounds N/S/W/E neighbors.
    pub fn cardinal_neighbors(self) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter_map(|d| d.apply(self))
            .collect()
    }

    /// Lane index for this cell, if it is not on a wall column.
    pub fn lane(self) -> Option<usize> {
        lane_of_column(self.col)
    }
}

/// Lane index for a column: 0 (cols 0-1), 1 (cols 3-4), 2 (cols 6-7).
pub fn lane_of_column(col: usize) -> Option<usize> {
    match col {
        0 | 1 => Some(0),
        3 | 4 => Some(1),
        6 | 7 => Some(2),
        _ => None,
    }
}

/// The four cardinal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The neighbor in this direction, if it stays on the board.
    pub fn apply(self, from: Position) -> Option<Position> {
        let (row, col) = (from.row, from.col);
        let to = match self {
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col + 1),
        };
        let position = Position::new(to.0, to.1);
        position.in_bounds().then_some(position)
    }
}
