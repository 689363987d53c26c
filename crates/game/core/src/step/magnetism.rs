//! Deflection of projectiles toward magnetic cells.

use crate::config::GameConfig;
use crate::engine::GameContext;
use crate::env::WorldOracle;
use crate::state::Position;

/// Pull applied by magnetic cells to a projectile in flight.
///
/// Before every step the projectile looks for the nearest magnetic cell
/// within `radius` of the cell it is about to enter. With `pull_percent`
/// chance it is bent one cell toward that magnet instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Magnetism {
    pub pull_percent: u32,
    pub radius: u32,
    /// Whether a pull may steer the projectile into a blocking cell (where it lands).
    pub allow_blocked: bool,
}

impl Magnetism {
    pub const DISABLED: Self = Self {
        pull_percent: 0,
        radius: 0,
        allow_blocked: false,
    };

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            pull_percent: config.magnetism_pull_percent.min(100),
            radius: config.magnetism_radius,
            allow_blocked: config.magnetism_allow_blocked,
        }
    }

    pub fn is_active(&self) -> bool {
        self.pull_percent > 0 && self.radius > 0
    }

    /// Cell the projectile is pulled into instead of `heading`, if any.
    pub fn deflect(
        &self,
        ctx: &mut GameContext<'_>,
        from: Position,
        heading: Position,
    ) -> Option<Position> {
        if !self.is_active() {
            return None;
        }

        let magnet = Self::nearest_magnet(&*ctx.env.world, heading, from, self.radius)?;
        let pulled = from.offset((magnet.x - from.x).signum(), (magnet.y - from.y).signum());
        if pulled == from || pulled == heading {
            return None;
        }
        if !self.allow_blocked && ctx.env.world.is_blocked(pulled) {
            return None;
        }
        if !ctx.env.rng.chance(self.pull_percent) {
            return None;
        }

        tracing::trace!(%from, %heading, %pulled, %magnet, "projectile deflected");
        Some(pulled)
    }

    /// Closest magnetic cell to `around`, ties broken by row then column.
    fn nearest_magnet(
        world: &dyn WorldOracle,
        around: Position,
        exclude: Position,
        radius: u32,
    ) -> Option<Position> {
        let reach = radius as i32;
        let mut best: Option<(u32, Position)> = None;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let cell = around.offset(dx, dy);
                if cell == exclude || !world.contains(cell) || !world.is_magnetic(cell) {
                    continue;
                }
                let distance = around.chebyshev_distance(cell);
                let closer = best.is_none_or(|(best_distance, best_cell)| {
                    (distance, cell.y, cell.x) < (best_distance, best_cell.y, best_cell.x)
                });
                if closer {
                    best = Some((distance, cell));
                }
            }
        }
        best.map(|(_, cell)| cell)
    }
}

impl Default for Magnetism {
    fn default() -> Self {
        Self::DISABLED
    }
}
