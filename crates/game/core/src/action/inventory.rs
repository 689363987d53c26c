//! Picking things up and consuming them.

use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::{EntityId, Item};
use crate::status::{StatusEffect, StatusKind};

use super::{Command, CommandError};

/// Take the topmost item on the actor's cell into its pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupCommand {
    pub actor: EntityId,
}

impl PickupCommand {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl Command for PickupCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "pickup"
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let position = ctx
            .position_of(self.actor)
            .ok_or(CommandError::ActorNotFound(self.actor))?;
        let capacity = ctx.env.config.inventory_capacity;
        if ctx
            .actor(self.actor)
            .is_some_and(|state| state.inventory.len() >= capacity)
        {
            ctx.flash_player(self.actor, MessageCategory::Failure, "Your pack is full.");
            return Ok(false);
        }

        let Some(item) = ctx.env.world.take_item(position) else {
            ctx.flash_player(self.actor, MessageCategory::Failure, "There is nothing here.");
            return Ok(false);
        };
        if let Some(state) = ctx.actor_mut(self.actor) {
            state.inventory.push(item);
        }
        ctx.tell_player(
            self.actor,
            MessageCategory::Info,
            format!("You pick up the {}.", item.name()),
        );
        Ok(true)
    }
}

/// What a [`ConsumeCommand`] eats or drinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumeSource {
    /// Pack slot index.
    Slot(usize),
    /// The corpse lying on the actor's cell.
    Corpse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumeCommand {
    pub actor: EntityId,
    pub source: ConsumeSource,
}

impl ConsumeCommand {
    pub fn new(actor: EntityId, source: ConsumeSource) -> Self {
        Self { actor, source }
    }

    fn consume_item(
        &self,
        ctx: &mut GameContext<'_>,
        slot: usize,
    ) -> Result<bool, CommandError> {
        let item = ctx
            .actor_mut(self.actor)
            .ok_or(CommandError::ActorNotFound(self.actor))?
            .inventory
            .get(slot)
            .copied();
        let Some(item) = item else {
            ctx.flash_player(self.actor, MessageCategory::Failure, "You have nothing like that.");
            return Ok(false);
        };
        if let Some(state) = ctx.actor_mut(self.actor) {
            state.inventory.remove(slot);
        }

        match item {
            Item::Ration { nutrition } => {
                if let Some(state) = ctx.actor_mut(self.actor) {
                    state.hunger = state.hunger.saturating_sub(nutrition);
                }
                ctx.tell_player(self.actor, MessageCategory::Info, "You eat the ration.");
            }
            Item::Waterskin { hydration } => {
                if let Some(state) = ctx.actor_mut(self.actor) {
                    state.thirst = state.thirst.saturating_sub(hydration);
                }
                ctx.tell_player(self.actor, MessageCategory::Info, "You drink from the waterskin.");
                ctx.cleanse(self.actor, StatusKind::Burn);
            }
            Item::Potion { status, duration } => {
                ctx.tell_player(
                    self.actor,
                    MessageCategory::Info,
                    format!("You drink the {}.", item.name()),
                );
                ctx.add_status(self.actor, StatusEffect::new(status, duration));
            }
        }
        Ok(true)
    }

    fn consume_corpse(&self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let position = ctx
            .position_of(self.actor)
            .ok_or(CommandError::ActorNotFound(self.actor))?;
        if !ctx.env.world.has_corpse(position) {
            ctx.flash_player(self.actor, MessageCategory::Failure, "There is no corpse here.");
            return Ok(false);
        }
        if !ctx.env.world.remove_corpse(position) {
            // The world reported a corpse it could not hand over.
            tracing::warn!(actor = %self.actor, %position, "corpse vanished before it could be eaten");
            return Ok(false);
        }

        let nutrition = ctx.env.config.corpse_nutrition;
        if let Some(state) = ctx.actor_mut(self.actor) {
            state.hunger = state.hunger.saturating_sub(nutrition);
        }
        if let Some(state) = ctx.actor(self.actor) {
            let text = format!("{} {} the corpse.", state.subject(), state.verb("devour"));
            ctx.tell_if_visible(self.actor, MessageCategory::Info, text);
        }
        Ok(true)
    }
}

impl Command for ConsumeCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "consume"
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        match self.source {
            ConsumeSource::Slot(slot) => self.consume_item(ctx, slot),
            ConsumeSource::Corpse => self.consume_corpse(ctx),
        }
    }
}
