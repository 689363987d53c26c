use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::{EntityId, GameEvent, GameOutcome, Item, Position};

impl GameContext<'_> {
    /// Removes a slain actor from the world and the turn queue and leaves its
    /// remains behind.
    ///
    /// The actor record stays in the entity table with no position so kill
    /// credit and messages can still name it.
    pub(crate) fn resolve_death(&mut self, victim: EntityId, killer: Option<EntityId>) {
        let visible = self.is_visible_to_player(victim);
        let killer_name = killer
            .filter(|&id| id != victim)
            .and_then(|id| self.actor(id))
            .map(|actor| (actor.is_player(), actor.subject(), actor.verb("kill")));

        let Some(actor) = self.state.entities.actor_mut(victim) else {
            return;
        };
        let position = actor.position.take();
        let is_player = actor.is_player();
        let drops_loot = actor.drops_loot;
        let inventory = std::mem::take(&mut actor.inventory);
        let object = actor.object();
        let subject = actor.subject();
        let dies = actor.verb("die");

        self.state.turn.remove_actor(victim);
        self.state.events.push(GameEvent::Died {
            actor: victim,
            killer,
        });

        if let Some(id) = killer.filter(|&id| id != victim) {
            if let Some(credited) = self.state.entities.actor_mut(id) {
                credited.kills += 1;
            }
            if id.is_player() {
                self.state.kills += 1;
            }
        }

        if is_player {
            tracing::info!(?killer, "player died");
            self.env
                .messages
                .post(MessageCategory::Death, "You die...".to_string());
            self.state.outcome = Some(GameOutcome::PlayerDied { killer });
            return;
        }

        tracing::debug!(%victim, ?killer, ?position, "actor died");

        if visible {
            let text = match killer_name {
                Some((true, _, _)) => format!("You kill {object}!"),
                Some((false, killer_subject, kills)) => format!("{killer_subject} {kills} {object}."),
                None => format!("{subject} {dies}."),
            };
            self.env.messages.post(MessageCategory::Death, text);
        }

        let Some(origin) = position else {
            return;
        };

        let resting_place = self.place_corpse_near(origin, victim).unwrap_or(origin);

        for item in inventory {
            self.drop_item(resting_place, item);
        }

        if drops_loot && self.env.rng.chance(self.env.config.loot_drop_percent) {
            let table = Item::loot_table();
            let weights: ArrayVec<u32, 4> = table.iter().map(|&(_, weight)| weight).collect();
            if let Some(index) = self.env.rng.weighted_pick(&weights) {
                self.drop_item(resting_place, table[index].0);
            }
        }
    }

    /// Places a corpse on `origin`, or on the nearest ring of cells around it
    /// that can hold one. Returns where it landed.
    fn place_corpse_near(&mut self, origin: Position, of: EntityId) -> Option<Position> {
        if self.env.world.place_corpse(origin, of) {
            return Some(origin);
        }

        let radius = self
            .env
            .config
            .corpse_search_radius
            .min(GameConfig::MAX_CORPSE_SEARCH_RADIUS) as i32;

        for ring in 1..=radius {
            let mut candidates: ArrayVec<Position, { GameConfig::MAX_RING_CELLS }> =
                ArrayVec::new();
            for dy in -ring..=ring {
                for dx in -ring..=ring {
                    if dx.abs() == ring || dy.abs() == ring {
                        candidates.push(origin.offset(dx, dy));
                    }
                }
            }
            for cell in candidates {
                if self.env.world.place_corpse(cell, of) {
                    return Some(cell);
                }
            }
        }

        tracing::warn!(%of, %origin, radius, "no cell could hold the corpse");
        None
    }

    fn drop_item(&mut self, position: Position, item: Item) {
        if !self.env.world.place_item(position, item) {
            tracing::warn!(%position, item = %item.name(), "dropped item lost");
        }
    }
}
