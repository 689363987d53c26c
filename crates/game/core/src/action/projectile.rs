//! Firing projectiles and delayed payloads.

use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::{CardinalDirection, EntityId};
use crate::step::{DamageStep, DirectionStep, Magnetism, PayloadStep, Step, TimedStep};

use super::{ActionCategory, Command, CommandError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponKind {
    Arrow,
    Bolt,
    Dart,
    Rock,
    Spell,
}

/// What lands at the end of the flight.
#[derive(Debug)]
pub enum Projectile {
    Damage { amount: i32, weapon: WeaponKind },
    /// Any command, executed raw and aimed at the landing cell.
    Payload(Box<dyn Command>),
}

/// Launch a projectile chain from the actor's cell.
///
/// The command only builds and schedules the chain; the projectile moves on
/// subsequent scheduler passes. With a `delay`, the chain first waits that
/// many passes.
#[derive(Debug)]
pub struct FireCommand {
    pub actor: EntityId,
    pub direction: Option<CardinalDirection>,
    pub delay: u32,
    projectile: Option<Projectile>,
}

impl FireCommand {
    pub fn new(actor: EntityId, direction: CardinalDirection, projectile: Projectile) -> Self {
        Self {
            actor,
            direction: Some(direction),
            delay: 0,
            projectile: Some(projectile),
        }
    }

    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }
}

impl Command for FireCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "fire"
    }

    fn category(&self) -> ActionCategory {
        match self.projectile {
            Some(Projectile::Damage { .. }) => ActionCategory::Hit,
            _ => ActionCategory::Act,
        }
    }

    fn set_direction(&mut self, direction: CardinalDirection) {
        self.direction = Some(direction);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let direction = self
            .direction
            .ok_or(CommandError::MissingDirection { command: "fire" })?;
        let origin = ctx
            .position_of(self.actor)
            .ok_or(CommandError::ActorNotFound(self.actor))?;
        let projectile = self
            .projectile
            .take()
            .ok_or(CommandError::Spent { command: "fire" })?;

        let (terminal, noun) = match projectile {
            Projectile::Damage { amount, weapon } => (
                Step::Damage(DamageStep::new(origin, amount, weapon, self.actor)),
                weapon.to_string(),
            ),
            Projectile::Payload(command) => {
                let noun = command.name().to_string();
                (Step::Payload(PayloadStep::new(origin, command)), noun)
            }
        };

        let flight = DirectionStep::new(origin, direction, terminal)
            .with_magnetism(Magnetism::from_config(ctx.env.config))
            .with_max_travel(ctx.env.config.projectile_max_travel);
        let chain = match self.delay {
            0 => Step::Direction(flight),
            delay => Step::Timed(TimedStep::new(delay, Step::Direction(flight))),
        };

        if let Some(state) = ctx.actor(self.actor) {
            let text = format!("{} {} the {noun}.", state.subject(), state.verb("launch"));
            ctx.tell_if_visible(self.actor, MessageCategory::Combat, text);
        }
        tracing::debug!(actor = %self.actor, %origin, %direction, delay = self.delay, "chain launched");
        ctx.state.projectiles.launch(chain);
        Ok(true)
    }
}
