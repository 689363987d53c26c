//! Status operations on the game context.
//!
//! The table on each actor is plain data; these methods layer on the side
//! effects: stat deltas, visibility-gated messages and per-upkeep ticking.

use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::EntityId;

use super::effect::StatusEffect;
use super::kind::{StatusKind, TickGroup};

/// Why an effect leaves an actor's table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    /// Counted down by upkeep (or shortened below zero by the gate).
    Expired,
    /// Removed early by an item, terrain or another effect.
    Cleansed,
}

impl GameContext<'_> {
    /// Stores `effect` on `actor`, replacing any instance of the same kind.
    ///
    /// Returns `true` if the kind was not active before. Only a new
    /// application produces a "becomes <adjective>" message, and only if the
    /// player can see the actor.
    pub fn add_status(&mut self, actor: EntityId, effect: StatusEffect) -> bool {
        let Some(target) = self.state.entities.actor_mut(actor) else {
            tracing::debug!(%actor, kind = %effect.kind, "status target missing");
            return false;
        };

        if let Some(previous) = target.statuses.insert(effect) {
            // Stat changes refresh: the replaced delta is undone before the new one lands.
            if let Some(tick) = previous.tick {
                tick.revert(target);
            }
            if let Some(tick) = effect.tick {
                tick.on_apply(target);
            }
            tracing::trace!(%actor, kind = %effect.kind, time_left = effect.time_left, "status refreshed");
            return false;
        }

        if let Some(tick) = effect.tick {
            tick.on_apply(target);
        }
        let text = format!(
            "{} {} {}.",
            target.subject(),
            target.verb("become"),
            effect.kind.adjective()
        );
        tracing::debug!(%actor, kind = %effect.kind, duration = effect.duration, "status added");
        self.tell_if_visible(actor, MessageCategory::Status, text);
        true
    }

    /// Removes `kind` from `actor`, reverting any outstanding stat delta.
    ///
    /// The player is told "You are no longer <adjective>."; removals on other
    /// actors are silent.
    pub fn remove_status(
        &mut self,
        actor: EntityId,
        kind: StatusKind,
        reason: Removal,
    ) -> Option<StatusEffect> {
        let target = self.state.entities.actor_mut(actor)?;
        let effect = target.statuses.remove(kind)?;

        // The final tick at exactly zero already reverted the delta.
        let reverted_by_tick = reason == Removal::Expired && effect.time_left == 0;
        if let Some(tick) = effect.tick
            && !reverted_by_tick
        {
            tick.revert(target);
        }

        tracing::debug!(%actor, %kind, ?reason, "status removed");
        self.tell_player(
            actor,
            MessageCategory::Status,
            format!("You are no longer {}.", kind.adjective()),
        );
        Some(effect)
    }

    /// Removes `kind` early. Returns `true` if it was active.
    pub fn cleanse(&mut self, actor: EntityId, kind: StatusKind) -> bool {
        self.remove_status(actor, kind, Removal::Cleansed).is_some()
    }

    pub fn has_status(&self, actor: EntityId, kind: StatusKind) -> bool {
        self.actor(actor).is_some_and(|state| state.statuses.is(kind))
    }

    pub fn status(&self, actor: EntityId, kind: StatusKind) -> Option<&StatusEffect> {
        self.actor(actor).and_then(|state| state.statuses.get(kind))
    }

    /// One upkeep pass over `actor`'s statuses in `group` (all groups if `None`).
    ///
    /// Each effect is decremented, its tick runs with the original duration
    /// and the new remaining time, and it is removed once `time_left <= 0`.
    /// Stops as soon as a tick kills the actor.
    pub fn tick_statuses(&mut self, actor: EntityId, group: Option<TickGroup>) {
        let Some(kinds) = self.actor(actor).map(|state| state.statuses.kinds(group)) else {
            return;
        };

        for kind in kinds {
            if !self.is_alive(actor) {
                return;
            }

            let Some(effect) = self
                .actor_mut(actor)
                .and_then(|state| state.statuses.get_mut(kind))
            else {
                // An earlier tick this pass removed it.
                continue;
            };
            effect.time_left -= 1;
            let (duration, time_left, tick) = (effect.duration, effect.time_left, effect.tick);

            if let Some(tick) = tick {
                tick.tick(self, actor, duration, time_left);
            }

            if time_left <= 0 && self.is_alive(actor) {
                self.remove_status(actor, kind, Removal::Expired);
            }
        }
    }
}
