//! Commands that reshape the map.

use crate::engine::GameContext;
use crate::env::{CellKind, MessageCategory};
use crate::state::{CardinalDirection, EntityId, Position};

use super::{Command, CommandError, Target};

/// Tunnel into diggable rock next to the actor.
///
/// Success chance is `dig_base_percent + strength * dig_strength_percent`,
/// capped at 100. A failed attempt still spends the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigCommand {
    pub actor: EntityId,
    pub direction: Option<CardinalDirection>,
}

impl DigCommand {
    pub fn new(actor: EntityId, direction: CardinalDirection) -> Self {
        Self {
            actor,
            direction: Some(direction),
        }
    }
}

impl Command for DigCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "dig"
    }

    fn set_direction(&mut self, direction: CardinalDirection) {
        self.direction = Some(direction);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let direction = self
            .direction
            .ok_or(CommandError::MissingDirection { command: "dig" })?;
        let origin = ctx
            .position_of(self.actor)
            .ok_or(CommandError::ActorNotFound(self.actor))?;
        let cell = origin.step(direction);

        if !ctx.env.world.cell(cell).is_some_and(CellKind::is_diggable) {
            ctx.flash_player(self.actor, MessageCategory::Failure, "That cannot be dug.");
            return Ok(false);
        }

        let strength = ctx
            .actor(self.actor)
            .map_or(0, |state| state.stats.strength.max(0) as u32);
        let percent = ctx
            .env
            .config
            .dig_base_percent
            .saturating_add(strength.saturating_mul(ctx.env.config.dig_strength_percent))
            .min(100);

        if ctx.env.rng.chance(percent) {
            ctx.env.world.set_cell(cell, CellKind::Floor);
            ctx.tell_player(self.actor, MessageCategory::Info, "You dig through the rock.");
        } else {
            ctx.tell_player(self.actor, MessageCategory::Info, "You chip at the rock.");
        }
        Ok(true)
    }
}

/// Open a closed door or close an open one, aimed by direction or cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoorCommand {
    pub actor: EntityId,
    pub direction: Option<CardinalDirection>,
    pub cell: Option<Position>,
}

impl DoorCommand {
    pub fn new(actor: EntityId, direction: CardinalDirection) -> Self {
        Self {
            actor,
            direction: Some(direction),
            cell: None,
        }
    }
}

impl Command for DoorCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "door"
    }

    fn set_direction(&mut self, direction: CardinalDirection) {
        self.direction = Some(direction);
        self.cell = None;
    }

    fn set_target(&mut self, target: Target) {
        if let Target::Cell(cell) = target {
            self.cell = Some(cell);
        }
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let cell = match (self.cell, self.direction) {
            (Some(cell), _) => cell,
            (None, Some(direction)) => ctx
                .position_of(self.actor)
                .ok_or(CommandError::ActorNotFound(self.actor))?
                .step(direction),
            (None, None) => return Err(CommandError::MissingDirection { command: "door" }),
        };

        let toggled = match ctx.env.world.cell(cell) {
            Some(CellKind::DoorClosed) => CellKind::DoorOpen,
            Some(CellKind::DoorOpen) => {
                if ctx.state.entities.is_occupied(cell) || ctx.env.world.has_corpse(cell) {
                    ctx.flash_player(self.actor, MessageCategory::Failure, "Something blocks the door.");
                    return Ok(false);
                }
                CellKind::DoorClosed
            }
            _ => {
                ctx.flash_player(self.actor, MessageCategory::Failure, "There is no door there.");
                return Ok(false);
            }
        };

        ctx.env.world.set_cell(cell, toggled);
        tracing::trace!(actor = %self.actor, %cell, ?toggled, "door toggled");
        Ok(true)
    }
}
