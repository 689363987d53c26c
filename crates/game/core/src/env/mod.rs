//! Capabilities the core consumes from the outside world.
//!
//! The map, the random source, the message log and the line-of-sight oracle
//! are injected as narrow traits. [`GameEnv`] bundles them together with the
//! [`GameConfig`] so commands, tick effects and steps receive everything they
//! need through one explicit handle instead of global state.
mod grid;
mod map;
mod messages;
mod rng;
mod vision;

pub use grid::{GridParseError, GridWorld};
pub use map::{CellKind, Hazard, MapDimensions, WorldOracle};
pub use messages::{MessageCategory, MessageEntry, MessageLog, MessageSink};
pub use rng::{PcgRng, RngOracle};
pub use vision::{LineOfSight, VisibilityOracle};

use crate::config::GameConfig;

/// Aggregates the external capabilities required by the simulation core.
pub struct GameEnv<'a> {
    pub world: &'a mut dyn WorldOracle,
    pub rng: &'a mut dyn RngOracle,
    pub messages: &'a mut dyn MessageSink,
    pub vision: &'a dyn VisibilityOracle,
    pub config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        world: &'a mut dyn WorldOracle,
        rng: &'a mut dyn RngOracle,
        messages: &'a mut dyn MessageSink,
        vision: &'a dyn VisibilityOracle,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            world,
            rng,
            messages,
            vision,
            config,
        }
    }
}
