use std::collections::BTreeMap;

use super::{ActorState, EntityId, Position};

/// Aggregate state for every actor on the map.
///
/// Actors are keyed by id in a `BTreeMap` so iteration order (and therefore every
/// random draw that depends on it) is deterministic. Cell occupancy is derived
/// from actor positions; at most one living actor occupies a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    actors: BTreeMap<EntityId, ActorState>,

    /// Sequential entity ID allocator (monotonically increasing).
    ///
    /// Never reused. ID 0 (PLAYER) is reserved.
    next_entity_id: u32,
}

impl Default for EntitiesState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntitiesState {
    pub fn new() -> Self {
        Self {
            actors: BTreeMap::new(),
            next_entity_id: 1,
        }
    }

    /// Allocates a fresh, never-used entity id.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    /// Inserts an actor, replacing any previous actor with the same id.
    ///
    /// Ids handed in from outside bump the allocator so later allocations stay unique.
    pub fn insert(&mut self, actor: ActorState) -> Option<ActorState> {
        if actor.id.0 >= self.next_entity_id {
            self.next_entity_id = actor.id.0 + 1;
        }
        self.actors.insert(actor.id, actor)
    }

    /// Allocates an id for `actor` and inserts it.
    pub fn spawn(&mut self, mut actor: ActorState) -> EntityId {
        let id = self.allocate_id();
        actor.id = id;
        self.actors.insert(id, actor);
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<ActorState> {
        self.actors.remove(&id)
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.get_mut(&id)
    }

    pub fn player(&self) -> Option<&ActorState> {
        self.actors.get(&EntityId::PLAYER)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.actor(id).is_some_and(ActorState::is_alive)
    }

    pub fn position_of(&self, id: EntityId) -> Option<Position> {
        self.actor(id).and_then(|actor| actor.position)
    }

    /// Returns the living actor standing on `position`, if any.
    pub fn actor_at(&self, position: Position) -> Option<EntityId> {
        self.actors
            .values()
            .find(|actor| actor.is_alive() && actor.position == Some(position))
            .map(|actor| actor.id)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.actor_at(position).is_some()
    }

    /// Moves an actor to `position`. Returns false if the actor does not exist.
    pub fn relocate(&mut self, id: EntityId, position: Position) -> bool {
        match self.actors.get_mut(&id) {
            Some(actor) => {
                actor.position = Some(position);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ActorState> {
        self.actors.values_mut()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
