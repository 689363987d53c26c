//! Commands that apply a status effect.

use crate::engine::GameContext;
use crate::state::EntityId;
use crate::status::{Stat, StatusEffect, StatusKind};

use super::{Command, CommandError, Target};

/// Apply `kind` for `duration` turns to the target, or to the actor itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuffCommand {
    pub actor: EntityId,
    pub target: Option<Target>,
    pub kind: StatusKind,
    pub duration: u32,
}

impl BuffCommand {
    pub fn new(actor: EntityId, kind: StatusKind, duration: u32) -> Self {
        Self {
            actor,
            target: None,
            kind,
            duration,
        }
    }
}

impl Command for BuffCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "buff"
    }

    fn set_target(&mut self, target: Target) {
        self.target = Some(target);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let Some(recipient) = Target::recipient(self.target, self.actor) else {
            return Ok(false);
        };
        if !ctx.is_alive(recipient) {
            return Ok(false);
        }
        ctx.add_status(recipient, StatusEffect::new(self.kind, self.duration));
        Ok(true)
    }
}

/// Raise or lower a stat modifier by `amount` for `duration` turns.
///
/// The status kind follows from the stat and the sign of `amount`, so an
/// attack bonus is always an `AttackUp` effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatChangeBuffCommand {
    pub actor: EntityId,
    pub target: Option<Target>,
    pub stat: Stat,
    pub amount: i32,
    pub duration: u32,
}

impl StatChangeBuffCommand {
    pub fn new(actor: EntityId, stat: Stat, amount: i32, duration: u32) -> Self {
        Self {
            actor,
            target: None,
            stat,
            amount,
            duration,
        }
    }

    pub fn kind(&self) -> StatusKind {
        match (self.stat, self.amount >= 0) {
            (Stat::DamageDeal, true) => StatusKind::AttackUp,
            (Stat::DamageDeal, false) => StatusKind::AttackDown,
            (Stat::Defense, true) => StatusKind::DefenseUp,
            (Stat::Defense, false) => StatusKind::DefenseDown,
        }
    }
}

impl Command for StatChangeBuffCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "stat_change"
    }

    fn set_target(&mut self, target: Target) {
        self.target = Some(target);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let Some(recipient) = Target::recipient(self.target, self.actor) else {
            return Ok(false);
        };
        if !ctx.is_alive(recipient) {
            return Ok(false);
        }
        let effect = StatusEffect::with_magnitude(self.kind(), self.duration, self.amount);
        ctx.add_status(recipient, effect);
        Ok(true)
    }
}
