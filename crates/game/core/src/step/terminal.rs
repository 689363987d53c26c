//! Terminal steps: what happens where a chain lands.

use crate::action::{self, Command, Target, WeaponKind};
use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::error::GameError;
use crate::state::{EntityId, Position};

use super::{Step, StepError};

/// Damages whoever stands on `pos` when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageStep {
    pub pos: Position,
    pub amount: i32,
    pub weapon: WeaponKind,
    pub attacker: EntityId,
}

impl DamageStep {
    pub fn new(pos: Position, amount: i32, weapon: WeaponKind, attacker: EntityId) -> Self {
        Self {
            pos,
            amount,
            weapon,
            attacker,
        }
    }

    pub fn execute(self, ctx: &mut GameContext<'_>) -> Result<Option<Step>, StepError> {
        let Some(victim) = ctx.state.entities.actor_at(self.pos) else {
            tracing::trace!(pos = %self.pos, weapon = %self.weapon, "projectile hit nothing");
            return Ok(None);
        };

        if let Some(state) = ctx.actor(victim) {
            let text = format!("The {} hits {}.", self.weapon, state.object());
            ctx.tell_if_visible(victim, MessageCategory::Combat, text);
        }
        ctx.damage(victim, self.amount, Some(self.attacker));
        Ok(None)
    }
}

/// Runs a wrapped command aimed at whatever is on `pos` when it fires.
#[derive(Debug)]
pub struct PayloadStep {
    pub pos: Position,
    pub command: Box<dyn Command>,
}

impl PayloadStep {
    pub fn new(pos: Position, command: Box<dyn Command>) -> Self {
        Self { pos, command }
    }

    pub fn execute(mut self, ctx: &mut GameContext<'_>) -> Result<Option<Step>, StepError> {
        let target = ctx
            .state
            .entities
            .actor_at(self.pos)
            .map_or(Target::Cell(self.pos), Target::Actor);
        self.command.set_target(target);

        match action::raw(&mut self.command, ctx) {
            Ok(_) => Ok(None),
            Err(error) if error.severity().is_recoverable() => {
                tracing::debug!(pos = %self.pos, %error, "payload fizzled");
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }
}
