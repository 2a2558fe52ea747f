//! Static game content and loaders.
//!
//! This crate houses the built-in template catalog (heroes, monsters, gear,
//! potions, spells) and, behind the `loaders` feature, a RON loader for
//! shipping the same tables as data files. Content is consumed by the engine
//! through `valor-core`'s catalog types and never appears in game state.

pub mod defaults;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use defaults::default_catalog;

#[cfg(feature = "loaders")]
pub use loaders::CatalogLoader;
