//! Data-driven content for the roguelike core.
//!
//! Loaders turn data files into core types:
//! - Game configuration (TOML, see [`ConfigLoader`])
//! - Arena layouts with their actors and items (RON, see [`ArenaLoader`])
//!
//! Content is consumed by drivers when a session starts and never appears in
//! game state by reference.

pub mod loaders;

pub use loaders::{Arena, ArenaLoader, ArenaDef, ConfigLoader, LoadResult, PlayerDef, SpawnDef};
