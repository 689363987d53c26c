//! Command execution errors.
//!
//! Ordinary refusals (a wall in the way, nothing to pick up) are not errors:
//! commands report them as "turn not consumed". These variants cover misuse
//! by the caller and stale references.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{DirectionError, EntityId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Acting actor is missing or already dead.
    #[error("actor {0} not found or dead")]
    ActorNotFound(EntityId),

    #[error("{command} requires a direction")]
    MissingDirection { command: &'static str },

    #[error("{command} requires a target")]
    MissingTarget { command: &'static str },

    /// A one-shot command (projectile launch) was executed twice.
    #[error("{command} was already executed")]
    Spent { command: &'static str },

    #[error(transparent)]
    Direction(#[from] DirectionError),
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CommandError::ActorNotFound(_) => ErrorSeverity::Recoverable,
            CommandError::MissingDirection { .. }
            | CommandError::MissingTarget { .. }
            | CommandError::Spent { .. }
            | CommandError::Direction(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CommandError::ActorNotFound(_) => "COMMAND_ACTOR_NOT_FOUND",
            CommandError::MissingDirection { .. } => "COMMAND_MISSING_DIRECTION",
            CommandError::MissingTarget { .. } => "COMMAND_MISSING_TARGET",
            CommandError::Spent { .. } => "COMMAND_SPENT",
            CommandError::Direction(_) => "COMMAND_DIRECTION",
        }
    }
}
