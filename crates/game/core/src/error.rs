//! Common error infrastructure for rogue-core.
//!
//! Domain-specific errors (`CommandError`, `StepError`, `TurnError`,
//! `DirectionError`) are defined next to the code that raises them. They all
//! implement [`GameError`] so drivers can decide uniformly whether to retry,
//! log, or abort.
//!
//! Expected negative outcomes (an action blocked by a status effect, a dig
//! that fails its roll, no free teleport cell) are *not* errors; they are
//! ordinary `bool`/`Option` results.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the driver may pick another command.
    ///
    /// Examples: acting actor died between scheduling and execution
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: loaded content naming an unknown status kind
    Validation,

    /// Internal error - a missing concrete implementation or a broken precondition.
    ///
    /// Examples: empty turn queue, command built without a direction
    /// These indicate bugs and must not be swallowed.
    Internal,

    /// Fatal error - simulation state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a programmer error.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all rogue-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
