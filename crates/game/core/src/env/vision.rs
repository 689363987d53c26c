//! Visibility and line-of-sight capability.

use super::map::WorldOracle;
use crate::state::Position;

/// Distance and line-of-sight checks between two cells.
///
/// Used to decide whether third-party status and death messages reach the player.
pub trait VisibilityOracle {
    fn distance(&self, from: Position, to: Position) -> u32 {
        from.chebyshev_distance(to)
    }

    /// True if nothing that blocks sight lies strictly between `from` and `to`.
    fn has_line_of_sight(&self, world: &dyn WorldOracle, from: Position, to: Position) -> bool;
}

/// Bresenham line tracer.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineOfSight;

impl LineOfSight {
    /// Cells visited walking from `from` to `to`, both endpoints included.
    pub fn trace(from: Position, to: Position) -> Vec<Position> {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut current = from;
        let mut cells = vec![current];

        while current != to {
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                current.x += sx;
            }
            if doubled <= dx {
                err += dx;
                current.y += sy;
            }
            cells.push(current);
        }
        cells
    }
}

impl VisibilityOracle for LineOfSight {
    fn has_line_of_sight(&self, world: &dyn WorldOracle, from: Position, to: Position) -> bool {
        let cells = Self::trace(from, to);
        let interior = cells.len().saturating_sub(1);
        cells
            .iter()
            .take(interior)
            .skip(1)
            .all(|&cell| !world.blocks_sight(cell))
    }
}
