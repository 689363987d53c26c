//! Explicit simulation context and per-turn upkeep.
//!
//! [`GameContext`] is the single handle every command, tick effect and step
//! receives. It pairs the mutable [`GameState`] with the injected
//! capabilities in [`GameEnv`]; there is no ambient or global game state.
//! Behaviour is layered onto it by `impl GameContext` blocks that live next
//! to the subsystem they belong to (status engine, health ledger, steps).

mod upkeep;

pub use upkeep::UpkeepPhase;

use crate::env::{GameEnv, MessageCategory};
use crate::state::{ActorState, EntityId, GameState, Position};

/// Mutable state plus injected capabilities for one scheduler tick.
pub struct GameContext<'a> {
    pub state: &'a mut GameState,
    pub env: GameEnv<'a>,
}

impl<'a> GameContext<'a> {
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>) -> Self {
        Self { state, env }
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.state.entities.actor(id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.state.entities.actor_mut(id)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.state.entities.is_alive(id)
    }

    pub fn position_of(&self, id: EntityId) -> Option<Position> {
        self.state.entities.position_of(id)
    }

    pub fn is_player(&self, id: EntityId) -> bool {
        self.actor(id).is_some_and(ActorState::is_player)
    }

    /// A free cell is inside the map, passable and unoccupied.
    pub fn is_free(&self, position: Position) -> bool {
        !self.env.world.is_blocked(position) && !self.state.entities.is_occupied(position)
    }

    /// Whether the player can observe `position`: within the visibility radius
    /// and in line of sight of a living player.
    pub fn player_can_see(&self, position: Position) -> bool {
        let Some(eye) = self
            .state
            .entities
            .player()
            .filter(|player| player.is_alive())
            .and_then(|player| player.position)
        else {
            return false;
        };

        self.env.vision.distance(eye, position) <= self.env.config.visibility_radius
            && self
                .env
                .vision
                .has_line_of_sight(&*self.env.world, eye, position)
    }

    /// Message visibility rule shared by status and death messages: the player
    /// always sees their own changes; other actors only within radius and sight.
    pub fn is_visible_to_player(&self, id: EntityId) -> bool {
        match self.actor(id) {
            Some(actor) if actor.is_player() => true,
            Some(actor) => actor
                .position
                .is_some_and(|position| self.player_can_see(position)),
            None => false,
        }
    }

    /// Posts `text` only if `id` is the player.
    pub fn tell_player(&mut self, id: EntityId, category: MessageCategory, text: impl Into<String>) {
        if self.is_player(id) {
            self.env.messages.post(category, text.into());
        }
    }

    /// Flashes `text` only if `id` is the player.
    pub fn flash_player(&mut self, id: EntityId, category: MessageCategory, text: impl Into<String>) {
        if self.is_player(id) {
            self.env.messages.flash(category, text.into());
        }
    }

    /// Posts `text` if the player can observe `id`.
    pub fn tell_if_visible(
        &mut self,
        id: EntityId,
        category: MessageCategory,
        text: impl Into<String>,
    ) {
        if self.is_visible_to_player(id) {
            self.env.messages.post(category, text.into());
        }
    }

    /// Finds a free cell next to `origin` within the configured number of random attempts.
    pub fn find_free_adjacent(&mut self, origin: Position) -> Option<Position> {
        let directions = crate::state::CardinalDirection::all();
        for _ in 0..self.env.config.spawn_attempts {
            let index = self.env.rng.range_exclusive(0, directions.len() as i32) as usize;
            let candidate = origin.step(directions[index]);
            if self.is_free(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}
