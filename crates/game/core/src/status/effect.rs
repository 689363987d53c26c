use super::kind::StatusKind;
use super::tick::{Stat, TickEffect};

/// One active status on an actor.
///
/// `duration` is the length the effect was applied with and never changes;
/// `time_left` counts down once per upkeep. The effect is removed once
/// `time_left` reaches zero or below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub duration: u32,
    pub time_left: i32,
    pub tick: Option<TickEffect>,
}

impl StatusEffect {
    /// Builds an effect with the kind's default magnitude.
    pub fn new(kind: StatusKind, duration: u32) -> Self {
        Self::with_magnitude(kind, duration, kind.default_magnitude())
    }

    /// Builds an effect; `magnitude` is only meaningful for stat changes.
    pub fn with_magnitude(kind: StatusKind, duration: u32, magnitude: i32) -> Self {
        Self {
            kind,
            duration,
            time_left: duration.min(i32::MAX as u32) as i32,
            tick: TickEffect::for_kind(kind, magnitude),
        }
    }

    /// Rebuilds an effect from persisted fields, tick behaviour included.
    pub fn restore(kind: StatusKind, duration: u32, time_left: i32, magnitude: i32) -> Self {
        Self {
            time_left,
            ..Self::with_magnitude(kind, duration, magnitude)
        }
    }

    /// Ticks elapsed since application: `duration - time_left`.
    #[inline]
    pub fn turn_number(&self) -> i64 {
        i64::from(self.duration) - i64::from(self.time_left)
    }

    /// Signed stat delta carried by stat-change effects, zero otherwise.
    pub fn magnitude(&self) -> i32 {
        match self.tick {
            Some(TickEffect::StatChange { delta, .. }) => delta.abs(),
            _ => 0,
        }
    }

    pub fn stat_delta(&self) -> Option<(Stat, i32)> {
        match self.tick {
            Some(TickEffect::StatChange { stat, delta }) => Some((stat, delta)),
            _ => None,
        }
    }
}
