//! Grid directions shared by movement commands and projectile steps.

use crate::error::{ErrorSeverity, GameError};

/// One of the eight unit offsets on the grid.
///
/// Coordinate system: Y-axis increases downward (south), X-axis increases rightward (east),
/// matching the row-major layout of [`crate::env::GridWorld`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Raised when a raw vector cannot be interpreted as a grid direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionError {
    #[error("malformed direction vector ({dx}, {dy})")]
    Malformed { dx: i32, dy: i32 },
}

impl GameError for DirectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "DIRECTION_MALFORMED"
    }
}

impl CardinalDirection {
    /// Returns the offset (dx, dy) for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
            CardinalDirection::NorthEast => (1, -1),
            CardinalDirection::NorthWest => (-1, -1),
            CardinalDirection::SouthEast => (1, 1),
            CardinalDirection::SouthWest => (-1, 1),
        }
    }

    /// Returns all 8 directions, orthogonals first.
    pub const fn all() -> [CardinalDirection; 8] {
        [
            CardinalDirection::North,
            CardinalDirection::South,
            CardinalDirection::East,
            CardinalDirection::West,
            CardinalDirection::NorthEast,
            CardinalDirection::NorthWest,
            CardinalDirection::SouthEast,
            CardinalDirection::SouthWest,
        ]
    }

    /// Interprets a unit vector. Anything other than the eight unit offsets is rejected.
    pub fn from_offset(dx: i32, dy: i32) -> Result<Self, DirectionError> {
        let direction = match (dx, dy) {
            (0, -1) => CardinalDirection::North,
            (0, 1) => CardinalDirection::South,
            (1, 0) => CardinalDirection::East,
            (-1, 0) => CardinalDirection::West,
            (1, -1) => CardinalDirection::NorthEast,
            (-1, -1) => CardinalDirection::NorthWest,
            (1, 1) => CardinalDirection::SouthEast,
            (-1, 1) => CardinalDirection::SouthWest,
            _ => return Err(DirectionError::Malformed { dx, dy }),
        };
        Ok(direction)
    }

    /// Direction of the first step on a straight-ish path from `dx, dy` (any magnitude).
    pub fn toward(dx: i32, dy: i32) -> Result<Self, DirectionError> {
        Self::from_offset(dx.signum(), dy.signum())
    }

    pub const fn opposite(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::South,
            CardinalDirection::South => CardinalDirection::North,
            CardinalDirection::East => CardinalDirection::West,
            CardinalDirection::West => CardinalDirection::East,
            CardinalDirection::NorthEast => CardinalDirection::SouthWest,
            CardinalDirection::NorthWest => CardinalDirection::SouthEast,
            CardinalDirection::SouthEast => CardinalDirection::NorthWest,
            CardinalDirection::SouthWest => CardinalDirection::NorthEast,
        }
    }
}
