use crate::engine::GameContext;
use crate::state::{CardinalDirection, Position};

use super::{Magnetism, Step, StepError};

/// Moves one cell per pass until something stops it, then fires `next`
/// on the cell where it stopped.
///
/// It stops on leaving the map, on a blocking cell, on an occupied cell, or
/// after `max_travel` cells. An occupied cell is struck directly. Against
/// terrain or the map edge a payload fires on the last cell it crossed, while
/// damage still lands on the obstacle and so hits nobody. While in flight it marks its cell so front ends
/// can draw it.
#[derive(Debug)]
pub struct DirectionStep {
    pub pos: Position,
    pub direction: CardinalDirection,
    pub next: Box<Step>,
    pub magnetism: Magnetism,
    pub travelled: u32,
    pub max_travel: u32,
}

impl DirectionStep {
    pub fn new(pos: Position, direction: CardinalDirection, next: Step) -> Self {
        Self {
            pos,
            direction,
            next: Box::new(next),
            magnetism: Magnetism::DISABLED,
            travelled: 0,
            max_travel: u32::MAX,
        }
    }

    pub fn with_magnetism(mut self, magnetism: Magnetism) -> Self {
        self.magnetism = magnetism;
        self
    }

    pub fn with_max_travel(mut self, max_travel: u32) -> Self {
        self.max_travel = max_travel;
        self
    }

    pub fn execute(mut self, ctx: &mut GameContext<'_>) -> Result<Option<Step>, StepError> {
        ctx.env.world.set_projectile_marker(self.pos, false);

        if self.travelled >= self.max_travel {
            let here = self.pos;
            return self.land(ctx, here);
        }

        let mut next = self.pos.step(self.direction);
        if let Some(pulled) = self.magnetism.deflect(ctx, self.pos, next) {
            self.direction =
                CardinalDirection::toward(pulled.x - self.pos.x, pulled.y - self.pos.y)?;
            next = pulled;
        }

        let walled = !ctx.env.world.contains(next) || ctx.env.world.is_blocked(next);
        if walled {
            // Payloads settle in front of the obstacle; the launch cell is the shooter's own.
            let cell = if self.travelled > 0 && matches!(*self.next, Step::Payload(_)) {
                self.pos
            } else {
                next
            };
            return self.land(ctx, cell);
        }
        if ctx.state.entities.is_occupied(next) {
            return self.land(ctx, next);
        }

        self.pos = next;
        self.travelled += 1;
        ctx.env.world.set_projectile_marker(next, true);
        Ok(Some(Step::Direction(self)))
    }

    /// Runs the successor immediately on `cell` and returns what it yields.
    fn land(self, ctx: &mut GameContext<'_>, cell: Position) -> Result<Option<Step>, StepError> {
        tracing::trace!(%cell, travelled = self.travelled, "projectile stopped");
        let mut next = *self.next;
        next.set_pos(cell);
        next.execute(ctx)
    }
}
