//! Commands: one unit of intent executed by an actor on its turn.
//!
//! A command is built by the driver (player input or AI), optionally aimed
//! with a direction or target, and run through [`turn`]. [`turn`] applies the
//! ability gate and any cost before executing, then runs the actor's upkeep
//! if the turn was consumed. [`raw`] executes without gating, cost or upkeep;
//! projectile payloads use it when they land.
//!
//! `execute` returns `Ok(true)` when the actor's turn was consumed and
//! `Ok(false)` when nothing happened and the actor may choose again.

mod buff;
mod combat;
mod error;
pub mod gate;
mod inventory;
mod movement;
mod projectile;
mod spawn;
mod terrain;

use std::fmt;

pub use buff::{BuffCommand, StatChangeBuffCommand};
pub use combat::HitCommand;
pub use error::CommandError;
pub use gate::{Ability, evaluate_ability};
pub use inventory::{ConsumeCommand, ConsumeSource, PickupCommand};
pub use movement::{MoveCommand, RestCommand, TeleportCommand};
pub use projectile::{FireCommand, Projectile, WeaponKind};
pub use spawn::{ActorTemplate, MultiplyCommand, SummonCommand};
pub use terrain::{DigCommand, DoorCommand};

use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::{CardinalDirection, EntityId, Position};
use crate::status::ActionMask;

/// Broad category the ability gate reasons about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ActionCategory {
    Move,
    Hit,
    Act,
}

impl ActionCategory {
    pub const fn mask(self) -> ActionMask {
        match self {
            ActionCategory::Move => ActionMask::MOVE,
            ActionCategory::Hit => ActionMask::HIT,
            ActionCategory::Act => ActionMask::ACT,
        }
    }
}

/// What a command is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Actor(EntityId),
    Cell(Position),
}

impl Target {
    /// Receiver of a self-or-other command: the aimed actor, nobody when
    /// aimed at a bare cell, or `actor` itself when never aimed.
    pub fn recipient(target: Option<Self>, actor: EntityId) -> Option<EntityId> {
        match target {
            Some(Self::Actor(id)) => Some(id),
            Some(Self::Cell(_)) => None,
            None => Some(actor),
        }
    }
}

/// Resource an actor pays before a costed command executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cost {
    /// Hit points; the actor must keep at least one.
    Health(i32),
    /// Adds to hunger; refused if it would reach the starvation threshold.
    Hunger(u32),
    /// Adds to thirst; refused if it would reach the dehydration threshold.
    Thirst(u32),
}

pub trait Command: fmt::Debug {
    fn actor(&self) -> EntityId;

    fn name(&self) -> &'static str;

    fn category(&self) -> ActionCategory {
        ActionCategory::Act
    }

    fn cost(&self) -> Option<Cost> {
        None
    }

    /// Aims the command. Commands without a direction ignore it.
    fn set_direction(&mut self, _direction: CardinalDirection) {}

    /// Aims the command. Commands without a target ignore it.
    fn set_target(&mut self, _target: Target) {}

    /// Performs the command. Returns whether the actor's turn was consumed.
    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError>;
}

impl<C: Command + ?Sized> Command for Box<C> {
    fn actor(&self) -> EntityId {
        (**self).actor()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn category(&self) -> ActionCategory {
        (**self).category()
    }

    fn cost(&self) -> Option<Cost> {
        (**self).cost()
    }

    fn set_direction(&mut self, direction: CardinalDirection) {
        (**self).set_direction(direction);
    }

    fn set_target(&mut self, target: Target) {
        (**self).set_target(target);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        (**self).execute(ctx)
    }
}

/// A command with a resource cost attached.
#[derive(Debug)]
pub struct Costed<C> {
    inner: C,
    cost: Cost,
}

impl<C> Costed<C> {
    pub fn set_cost(&mut self, cost: Cost) {
        self.cost = cost;
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Command> Command for Costed<C> {
    fn actor(&self) -> EntityId {
        self.inner.actor()
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn category(&self) -> ActionCategory {
        self.inner.category()
    }

    fn cost(&self) -> Option<Cost> {
        Some(self.cost)
    }

    fn set_direction(&mut self, direction: CardinalDirection) {
        self.inner.set_direction(direction);
    }

    fn set_target(&mut self, target: Target) {
        self.inner.set_target(target);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        self.inner.execute(ctx)
    }
}

pub trait CommandExt: Command + Sized {
    fn with_cost(self, cost: Cost) -> Costed<Self> {
        Costed { inner: self, cost }
    }

    fn boxed(self) -> Box<dyn Command>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<C: Command + Sized> CommandExt for C {}

/// Runs `command` as its actor's turn: gate, cost, execute, upkeep.
///
/// Returns whether the turn was consumed. A gated-off command either
/// consumes the turn (soft negation) or leaves it open (hard block).
pub fn turn<C: Command + ?Sized>(
    command: &mut C,
    ctx: &mut GameContext<'_>,
) -> Result<bool, CommandError> {
    let actor = command.actor();
    if !ctx.is_alive(actor) {
        return Err(CommandError::ActorNotFound(actor));
    }

    let ability = evaluate_ability(ctx, actor, command.category());
    if !ability.can_act {
        tracing::debug!(%actor, command = command.name(), consumed = ability.consumes_turn, "command gated");
        if ability.consumes_turn {
            ctx.run_upkeep(actor);
        }
        return Ok(ability.consumes_turn);
    }

    if let Some(cost) = command.cost()
        && !pay_cost(ctx, actor, cost)
    {
        ctx.tell_player(actor, MessageCategory::Failure, "You lack the strength to do that.");
        ctx.run_upkeep(actor);
        return Ok(true);
    }

    let consumed = command.execute(ctx)?;
    tracing::trace!(%actor, command = command.name(), consumed, "command executed");
    if consumed {
        ctx.run_upkeep(actor);
    }
    Ok(consumed)
}

/// Executes `command` with no gating, cost or upkeep.
pub fn raw<C: Command + ?Sized>(
    command: &mut C,
    ctx: &mut GameContext<'_>,
) -> Result<bool, CommandError> {
    command.execute(ctx)
}

fn pay_cost(ctx: &mut GameContext<'_>, actor: EntityId, cost: Cost) -> bool {
    let hunger_threshold = ctx.env.config.hunger_threshold;
    let thirst_threshold = ctx.env.config.thirst_threshold;
    let Some(state) = ctx.actor_mut(actor) else {
        return false;
    };

    match cost {
        Cost::Health(amount) => {
            if state.hp <= amount {
                return false;
            }
            state.hp -= amount;
        }
        Cost::Hunger(amount) => {
            let next = state.hunger.saturating_add(amount);
            if next >= hunger_threshold {
                return false;
            }
            state.hunger = next;
        }
        Cost::Thirst(amount) => {
            let next = state.thirst.saturating_add(amount);
            if next >= thirst_threshold {
                return false;
            }
            state.thirst = next;
        }
    }
    true
}
