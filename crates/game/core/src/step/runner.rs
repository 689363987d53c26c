use crate::engine::GameContext;

use super::{Step, StepError};

/// Chains in flight, advanced once per scheduler pass.
#[derive(Debug, Default)]
pub struct StepRunner {
    chains: Vec<Step>,
}

impl StepRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn launch(&mut self, chain: Step) {
        self.chains.push(chain);
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.chains.iter()
    }

    /// Drops every pending chain.
    pub fn clear(&mut self) {
        self.chains.clear();
    }
}

impl GameContext<'_> {
    /// Executes each pending chain once, in launch order.
    ///
    /// Chains launched while the pass runs wait for the next pass. A chain
    /// that errors is discarded and the first error is returned after every
    /// other chain has had its turn.
    pub fn run_step_pass(&mut self) -> Result<usize, StepError> {
        let pending = std::mem::take(&mut self.state.projectiles.chains);
        let mut first_error = None;
        let mut finished = 0;

        for chain in pending {
            match chain.execute(self) {
                Ok(Some(next)) => self.state.projectiles.chains.push(next),
                Ok(None) => finished += 1,
                Err(error) => {
                    tracing::warn!(%error, "stepper chain aborted");
                    first_error.get_or_insert(error);
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(finished),
        }
    }
}
