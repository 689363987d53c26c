//! Authoritative simulation state.
//!
//! This module owns the data structures that describe actors, turn order,
//! in-flight projectile chains and per-turn damage bookkeeping. Drivers query
//! this state freely but mutate it through commands, the status engine and the
//! health ledger so that side effects (messages, corpses, queue removal) stay
//! consistent.
pub mod turn;
pub mod types;

pub use turn::{TurnError, TurnQueue};
pub use types::{
    ActorState, ActorStats, CardinalDirection, DirectionError, EntitiesState, EntityId, Faction,
    Item, Position,
};

use crate::health::DamageLedger;
use crate::step::StepRunner;

/// Notable state transitions, queued for the driver to drain.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    Died {
        actor: EntityId,
        killer: Option<EntityId>,
    },
    Spawned {
        actor: EntityId,
        parent: Option<EntityId>,
    },
    Teleported {
        actor: EntityId,
        from: Position,
        to: Position,
    },
}

/// Terminal result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    PlayerDied { killer: Option<EntityId> },
}

/// Canonical snapshot of the simulation state.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// All actors, living ones positioned on the map.
    pub entities: EntitiesState,
    /// Turn order of living, turn-taking actors.
    pub turn: TurnQueue,
    /// Projectile and delayed-payload chains awaiting their next scheduler pass.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub projectiles: StepRunner,
    /// Per-turn damage aggregates, flushed into one message per turn.
    pub ledger: DamageLedger,
    /// Kills credited to the player.
    pub kills: u32,
    /// Events not yet drained by the driver.
    pub events: Vec<GameEvent>,
    pub outcome: Option<GameOutcome>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an actor to the entity table and, if it is alive, to the tail of the turn queue.
    pub fn add_actor(&mut self, actor: ActorState) -> EntityId {
        let id = actor.id;
        let alive = actor.is_alive();
        self.entities.insert(actor);
        if alive {
            self.turn.push_actor(id);
        }
        id
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
