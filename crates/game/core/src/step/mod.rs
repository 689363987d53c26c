//! Steppers: deferred, multi-tick work such as projectiles and delayed spells.
//!
//! A stepper chain is a linked list of [`Step`]s. Executing a step consumes
//! it and yields either the step to run on the next scheduler pass or `None`
//! when the chain is finished. Non-terminal steps own their successor, so a
//! projectile is `Timed -> Direction -> Damage` or `Direction -> Payload`.
//! Terminal steps resolve their target from the cell they land on at the
//! moment they fire, never from a cached reference.

mod direction;
mod magnetism;
mod runner;
mod terminal;
mod timed;

pub use direction::DirectionStep;
pub use magnetism::Magnetism;
pub use runner::StepRunner;
pub use terminal::{DamageStep, PayloadStep};
pub use timed::TimedStep;

use crate::action::{CommandError, Target};
use crate::engine::GameContext;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CardinalDirection, DirectionError, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("payload command failed: {0}")]
    Payload(#[from] CommandError),

    #[error(transparent)]
    Direction(#[from] DirectionError),
}

impl GameError for StepError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StepError::Payload(error) => error.severity(),
            StepError::Direction(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StepError::Payload(error) => error.error_code(),
            StepError::Direction(error) => error.error_code(),
        }
    }
}

/// One link of a stepper chain.
#[derive(Debug)]
pub enum Step {
    Timed(TimedStep),
    Direction(DirectionStep),
    Damage(DamageStep),
    Payload(PayloadStep),
}

impl Step {
    /// Runs this step, returning the step to schedule next.
    pub fn execute(self, ctx: &mut GameContext<'_>) -> Result<Option<Step>, StepError> {
        match self {
            Step::Timed(step) => step.execute(ctx),
            Step::Direction(step) => step.execute(ctx),
            Step::Damage(step) => step.execute(ctx),
            Step::Payload(step) => step.execute(ctx),
        }
    }

    /// Cell the chain currently occupies (the landing cell for terminals).
    pub fn position(&self) -> Position {
        match self {
            Step::Timed(step) => step.next.position(),
            Step::Direction(step) => step.pos,
            Step::Damage(step) => step.pos,
            Step::Payload(step) => step.pos,
        }
    }

    pub fn set_pos(&mut self, pos: Position) {
        match self {
            Step::Timed(step) => step.next.set_pos(pos),
            Step::Direction(step) => step.pos = pos,
            Step::Damage(step) => step.pos = pos,
            Step::Payload(step) => step.pos = pos,
        }
    }

    /// Re-aims the first directional step of the chain.
    pub fn set_direction(&mut self, direction: CardinalDirection) {
        match self {
            Step::Timed(step) => step.next.set_direction(direction),
            Step::Direction(step) => step.direction = direction,
            Step::Damage(_) | Step::Payload(_) => {}
        }
    }

    /// Aims the chain at `target`.
    ///
    /// A directional step turns toward the target; a terminal step moves onto
    /// it; a payload also forwards the target to its command.
    pub fn set_target(&mut self, target: Position) -> Result<(), DirectionError> {
        match self {
            Step::Timed(step) => step.next.set_target(target),
            Step::Direction(step) => {
                step.direction =
                    CardinalDirection::toward(target.x - step.pos.x, target.y - step.pos.y)?;
                Ok(())
            }
            Step::Damage(step) => {
                step.pos = target;
                Ok(())
            }
            Step::Payload(step) => {
                step.pos = target;
                step.command.set_target(Target::Cell(target));
                Ok(())
            }
        }
    }

    /// Sets the remaining delay of a timed step; other steps have no clock.
    pub fn set_time(&mut self, time: u32) {
        if let Step::Timed(step) = self {
            step.time = time;
        }
    }

    /// True for steps that finish the chain when executed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Damage(_) | Step::Payload(_))
    }
}
