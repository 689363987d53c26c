//! Movement commands.

use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::{CardinalDirection, EntityId, GameEvent, Position};

use super::{ActionCategory, Command, CommandError, Target, gate};

/// Step one cell in a direction.
///
/// Under confusion the direction may be replaced by a random one; a confused
/// stumble into something solid still costs the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCommand {
    pub actor: EntityId,
    pub direction: Option<CardinalDirection>,
}

impl MoveCommand {
    pub fn new(actor: EntityId, direction: CardinalDirection) -> Self {
        Self {
            actor,
            direction: Some(direction),
        }
    }

    pub fn unaimed(actor: EntityId) -> Self {
        Self {
            actor,
            direction: None,
        }
    }
}

impl Command for MoveCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "move"
    }

    fn category(&self) -> ActionCategory {
        ActionCategory::Move
    }

    fn set_direction(&mut self, direction: CardinalDirection) {
        self.direction = Some(direction);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let intended = self
            .direction
            .ok_or(CommandError::MissingDirection { command: "move" })?;
        let from = ctx
            .position_of(self.actor)
            .ok_or(CommandError::ActorNotFound(self.actor))?;

        let direction = gate::confuse_direction(ctx, self.actor, intended);
        let stumbled = direction != intended;
        let to = from.step(direction);

        if ctx.env.world.is_blocked(to) {
            ctx.flash_player(self.actor, MessageCategory::Failure, "Something solid is in the way.");
            return Ok(stumbled);
        }
        if ctx.state.entities.is_occupied(to) {
            ctx.flash_player(self.actor, MessageCategory::Failure, "Someone is in the way.");
            return Ok(stumbled);
        }

        ctx.state.entities.relocate(self.actor, to);
        if let Some(state) = ctx.actor_mut(self.actor) {
            state.ticks_since_move = 0;
        }
        tracing::trace!(actor = %self.actor, %from, %to, "moved");
        Ok(true)
    }
}

/// Spend the turn doing nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestCommand {
    pub actor: EntityId,
}

impl RestCommand {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl Command for RestCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "rest"
    }

    fn execute(&mut self, _ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        Ok(true)
    }
}

/// Move the subject (the caster by default) to a random free cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeleportCommand {
    pub actor: EntityId,
    pub subject: Option<Target>,
}

impl TeleportCommand {
    pub fn new(actor: EntityId) -> Self {
        Self {
            actor,
            subject: None,
        }
    }

    fn random_free_cell(ctx: &mut GameContext<'_>) -> Option<Position> {
        let dimensions = ctx.env.world.dimensions();
        for _ in 0..ctx.env.config.teleport_attempts {
            let x = ctx.env.rng.range_exclusive(0, dimensions.width as i32);
            let y = ctx.env.rng.range_exclusive(0, dimensions.height as i32);
            let candidate = Position::new(x, y);
            if ctx.is_free(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

impl Command for TeleportCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "teleport"
    }

    fn set_target(&mut self, target: Target) {
        self.subject = Some(target);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let Some(subject) = Target::recipient(self.subject, self.actor) else {
            return Ok(false);
        };
        let Some(from) = ctx.position_of(subject).filter(|_| ctx.is_alive(subject)) else {
            return Ok(false);
        };

        let Some(to) = Self::random_free_cell(ctx) else {
            tracing::debug!(%subject, "no free teleport destination");
            if let Some(state) = ctx.actor(subject) {
                let text = format!("{} {} briefly.", state.subject(), state.verb("flicker"));
                ctx.tell_if_visible(subject, MessageCategory::Info, text);
            }
            return Ok(true);
        };

        if let Some(state) = ctx.actor(subject) {
            let text = format!("{} {}!", state.subject(), state.verb("vanish"));
            ctx.tell_if_visible(subject, MessageCategory::Info, text);
        }
        ctx.state.entities.relocate(subject, to);
        ctx.state.events.push(GameEvent::Teleported {
            actor: subject,
            from,
            to,
        });
        Ok(true)
    }
}
