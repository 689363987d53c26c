use crate::engine::GameContext;

use super::{Step, StepError};

/// Waits `time` passes, then runs `next` on the following pass.
#[derive(Debug)]
pub struct TimedStep {
    pub time: u32,
    pub next: Box<Step>,
}

impl TimedStep {
    pub fn new(time: u32, next: Step) -> Self {
        Self {
            time,
            next: Box::new(next),
        }
    }

    pub fn execute(mut self, ctx: &mut GameContext<'_>) -> Result<Option<Step>, StepError> {
        if self.time > 0 {
            self.time -= 1;
            return Ok(Some(Step::Timed(self)));
        }
        self.next.execute(ctx)
    }
}
