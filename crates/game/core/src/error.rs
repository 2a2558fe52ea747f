//! Action errors and turn-consumption classification.
//!
//! No condition in the engine is fatal: the worst outcome of any request is a
//! typed, reported failure. All legality checks run before any mutation, so a
//! failed action never leaves partial state behind.

use crate::combat::GameEvent;

/// Errors that can occur while validating or executing a player action.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActionError {
    /// Destination lies outside the board.
    #[error("destination is out of bounds")]
    OutOfBounds,

    /// Destination is one of the impassable wall columns.
    #[error("destination is an impassable wall")]
    WallBlocked,

    /// Destination holds an obstacle.
    #[error("destination is blocked by an obstacle")]
    ObstacleBlocked,

    /// Destination already holds a unit of the same kind.
    #[error("destination is occupied")]
    Occupied,

    /// An opposing unit holds the lane ahead.
    #[error("an enemy holds the lane ahead")]
    FrontLineBlocked,

    /// Moves must cover exactly one cardinal step.
    #[error("move must be a single cardinal step")]
    NotAdjacent,

    /// The acting unit has no recorded board position.
    #[error("unit is not on the board")]
    NotOnBoard,

    /// Teleport target stands in the caller's own lane.
    #[error("teleport target is in the same lane")]
    SameLaneTeleport,

    /// Teleport destination lies ahead of the target ally.
    #[error("cannot land ahead of the ally")]
    AheadOfAlly,

    /// Recall requested before any spawn cell was recorded.
    #[error("no spawn recorded for recall")]
    NoSpawnRecorded,

    /// Obstacle removal aimed at a cell that is not an obstacle.
    #[error("target cell is not an obstacle")]
    NotAnObstacle,

    /// Referenced unit does not exist.
    #[error("no such target")]
    UnknownTarget,

    /// Target exists but is beyond attack range.
    #[error("target is out of range")]
    OutOfRange,

    /// Target has already fainted.
    #[error("target has already fainted")]
    TargetFainted,

    /// The acting hero has fainted.
    #[error("actor has fainted")]
    ActorFainted,

    /// Referenced inventory slot is empty or out of range.
    #[error("no item in that slot")]
    EmptySlot,

    /// Spell selected without enough mana to cast it.
    #[error("not enough mana ({needed:.0} needed, {available:.0} left)")]
    InsufficientMana { needed: f64, available: f64 },

    /// Equip attempt below the item's level requirement.
    #[error("hero level {level} is below the required {required}")]
    LevelTooLow { level: u32, required: u32 },

    /// Item has exhausted its durability.
    #[error("item has no durability left")]
    ItemBroken,

    /// Purchase attempt without enough gold.
    #[error("not enough gold ({price} needed, {gold} held)")]
    InsufficientGold { price: u32, gold: u32 },

    /// The match has already been decided.
    #[error("the match is already over")]
    MatchOver,
}

/// Coarse error taxonomy used by callers for retry/report decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Illegal move/teleport/target: reported, retryable.
    InvalidAction,
    /// Not enough mana/gold/level for the request.
    InsufficientResource,
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        use ActionError::*;
        match self {
            InsufficientMana { .. } | LevelTooLow { .. } | ItemBroken
            | InsufficientGold { .. } => ErrorKind::InsufficientResource,
            _ => ErrorKind::InvalidAction,
        }
    }

    /// Whether this failure still spends the acting unit's turn.
    ///
    /// Only a mana shortfall does: the caster committed to the spell before
    /// the cost check, so the turn is wasted even though nothing was consumed.
    pub fn consumes_turn(&self) -> bool {
        matches!(self, ActionError::InsufficientMana { .. })
    }
}

/// Successful action outcome: narration events plus turn bookkeeping.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ActionReport {
    /// Narration-worthy records produced by the action, in order.
    pub events: Vec<GameEvent>,
    /// Whether the action spent the acting hero's turn.
    pub turn_consumed: bool,
}

impl ActionReport {
    pub fn consumed(events: Vec<GameEvent>) -> Self {
        Self {
            events,
            turn_consumed: true,
        }
    }

    pub fn free(events: Vec<GameEvent>) -> Self {
        Self {
            events,
            turn_consumed: false,
        }
    }
}
