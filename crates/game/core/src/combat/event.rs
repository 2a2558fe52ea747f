//! Narration-grade result records.
//!
//! Events carry display names and plain numbers only: they are the data a
//! presentation layer narrates from, never references into engine state.

use crate::board::Side;
use crate::items::{Element, PotionAttribute};

/// Outcome of a single attack attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackResult {
    pub damage: f64,
    pub critical: bool,
    pub dodged: bool,
}

impl AttackResult {
    pub fn dodged() -> Self {
        Self {
            damage: 0.0,
            critical: false,
            dodged: true,
        }
    }

    pub fn hit(damage: f64, critical: bool) -> Self {
        Self {
            damage,
            critical,
            dodged: false,
        }
    }
}

/// Everything narration-worthy the engine can report.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Attacked {
        attacker: String,
        target: String,
        damage: f64,
        critical: bool,
    },
    Dodged {
        attacker: String,
        target: String,
    },
    SpellCast {
        caster: String,
        spell: String,
        target: String,
        damage: f64,
        element: Element,
    },
    SpellResisted {
        caster: String,
        spell: String,
        target: String,
    },
    PotionUsed {
        hero: String,
        potion: String,
        attribute: PotionAttribute,
        applied: f64,
    },
    Equipped {
        hero: String,
        item: String,
    },
    ItemBroke {
        owner: String,
        item: String,
    },
    Fainted {
        name: String,
    },
    LeveledUp {
        hero: String,
        level: u32,
    },
    Revived {
        hero: String,
    },
    RewardsGranted {
        hero: String,
        experience: u32,
        gold: u32,
    },
    Moved {
        name: String,
        row: usize,
        col: usize,
    },
    Teleported {
        hero: String,
        row: usize,
        col: usize,
    },
    Recalled {
        hero: String,
        row: usize,
        col: usize,
    },
    ObstacleRemoved {
        row: usize,
        col: usize,
    },
    MonsterSpawned {
        monster: String,
        row: usize,
        col: usize,
    },
    NexusReached {
        side: Side,
    },
}
