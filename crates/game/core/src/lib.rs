//! Deterministic combat and lane-board rules shared across front ends.
//!
//! `valor-core` defines the canonical rules (creatures, items, combat
//! resolution, the Valor lane board) and exposes pure APIs that can be reused
//! by any presentation layer. The engine never prints, never reads files, and
//! draws every random number from an injected [`rng::RngSource`], so whole
//! sessions replay exactly from a seed.
pub mod board;
pub mod catalog;
pub mod combat;
pub mod config;
pub mod creature;
pub mod error;
pub mod items;
pub mod rng;
pub mod valor;

pub use board::{Direction, Position, Side, Terrain, ValorBoard};
pub use catalog::{
    ArmorTemplate, Catalog, HeroTemplate, MonsterTemplate, PotionTemplate, SpellTemplate,
    WeaponTemplate,
};
pub use combat::{
    AttackResult, BattleAction, Encounter, EncounterOutcome, EncounterPhase, GameEvent,
};
pub use config::{Difficulty, GameConfig};
pub use creature::{Hero, HeroClass, HeroId, Monster, MonsterId, MonsterKind, Stats};
pub use error::{ActionError, ActionReport, ErrorKind};
pub use items::{Armor, Element, Item, ItemSlot, Potion, PotionAttribute, Spell, Weapon};
pub use rng::{GameRng, RngSource};
pub use valor::{ValorCommand, ValorSession};
