//! Terrain kinds and the stat buffs some cells grant.

/// Static terrain of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Terrain {
    Plain,
    Bush,
    Cave,
    Koulou,
    /// Impassable until removed by an adjacent hero.
    Obstacle,
    /// Permanently impassable lane separator.
    Wall,
    /// Hero-side goal row; monsters win by reaching it.
    HeroNexus,
    /// Monster-side goal row; heroes win by reaching it.
    MonsterNexus,
}

impl Terrain {
    pub fn is_walkable(self) -> bool {
        !matches!(self, Terrain::Wall | Terrain::Obstacle)
    }

    /// Stat this terrain buffs while a hero stands on it.
    pub fn buffed_stat(self) -> Option<BuffedStat> {
        match self {
            Terrain::Bush => Some(BuffedStat::Dexterity),
            Terrain::Cave => Some(BuffedStat::Agility),
            Terrain::Koulou => Some(BuffedStat::Strength),
            _ => None,
        }
    }
}

/// Stats terrain can buff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuffedStat {
    Strength,
    Dexterity,
    Agility,
}

/// Fraction of the current stat granted while standing on a buff cell.
pub const TERRAIN_BUFF_FACTOR: f64 = 0.1;

/// Exact delta granted to one hero by the cell it stands on.
///
/// Recorded so leaving the cell reverts precisely what was applied; nothing
/// is ever recomputed from current stats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedBuff {
    pub stat: BuffedStat,
    pub delta: f64,
}
