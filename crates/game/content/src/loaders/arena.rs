//! Arena loader.
//!
//! An arena bundles an ASCII layout (see [`GridWorld`] for the glyph table)
//! with the player, a catalog of actor templates, the monsters spawned from
//! them and items lying on the floor.

use std::collections::BTreeMap;
use std::path::Path;

use rogue_core::{
    ActorState, ActorStats, ActorTemplate, GameState, GridWorld, Item, Position, WorldOracle,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Where the player starts and what they carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDef {
    pub at: Position,
    pub max_hp: i32,
    #[serde(default)]
    pub stats: Option<ActorStats>,
    #[serde(default)]
    pub inventory: Vec<Item>,
}

/// One actor created from a named template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnDef {
    pub template: String,
    pub at: Position,
}

/// Arena description as written in RON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaDef {
    pub name: String,
    pub rows: Vec<String>,
    pub player: PlayerDef,
    #[serde(default)]
    pub templates: BTreeMap<String, ActorTemplate>,
    #[serde(default)]
    pub spawns: Vec<SpawnDef>,
    #[serde(default)]
    pub items: Vec<(Position, Item)>,
}

/// A built arena, ready to be driven.
#[derive(Debug)]
pub struct Arena {
    pub name: String,
    pub world: GridWorld,
    pub state: GameState,
}

impl ArenaDef {
    /// Builds the world and the initial state: the player first in the turn
    /// queue, then every spawn in file order.
    pub fn build(&self) -> LoadResult<Arena> {
        let mut world = GridWorld::from_rows(self.rows.as_slice())
            .map_err(|e| anyhow::anyhow!("Invalid layout for arena '{}': {}", self.name, e))?;
        let mut state = GameState::new();

        if self.player.max_hp <= 0 {
            anyhow::bail!("Player max_hp must be positive, got {}", self.player.max_hp);
        }
        check_cell(&world, &state, self.player.at, "player")?;
        let mut player = ActorState::player(self.player.at, self.player.max_hp);
        if let Some(stats) = self.player.stats {
            player.stats = stats;
        }
        player.inventory = self.player.inventory.clone();
        state.add_actor(player);

        for spawn in &self.spawns {
            let template = self.templates.get(&spawn.template).ok_or_else(|| {
                anyhow::anyhow!(
                    "Spawn at {} names unknown template '{}'",
                    spawn.at,
                    spawn.template
                )
            })?;
            if template.max_hp <= 0 {
                anyhow::bail!("Template '{}' has non-positive max_hp", spawn.template);
            }
            check_cell(&world, &state, spawn.at, &spawn.template)?;
            let id = state.entities.spawn(template.instantiate(spawn.at));
            state.turn.push_actor(id);
        }

        for &(at, item) in &self.items {
            if !world.place_item(at, item) {
                anyhow::bail!("Cell {} cannot hold the {}", at, item.name());
            }
        }

        tracing::debug!(
            arena = %self.name,
            actors = state.entities.len(),
            items = self.items.len(),
            "arena built"
        );
        Ok(Arena {
            name: self.name.clone(),
            world,
            state,
        })
    }
}

fn check_cell(world: &GridWorld, state: &GameState, at: Position, who: &str) -> LoadResult<()> {
    if world.is_blocked(at) {
        anyhow::bail!("The {} is placed on blocked cell {}", who, at);
    }
    if state.entities.is_occupied(at) {
        anyhow::bail!("The {} is placed on occupied cell {}", who, at);
    }
    Ok(())
}

/// Loader for arenas from RON files.
pub struct ArenaLoader;

impl ArenaLoader {
    /// Load an arena description from a RON file.
    pub fn load(path: &Path) -> LoadResult<ArenaDef> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse an arena description from RON text.
    pub fn parse(content: &str) -> LoadResult<ArenaDef> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse arena RON: {}", e))
    }
}
