//! Periodic tick behaviour attached to status effects.
//!
//! A tick receives the effect's original `duration` and its remaining
//! `time_left` (already decremented for this upkeep) and decides on its own
//! whether to act. Periodic effects act on odd turn numbers, where
//! `turn_number = duration - time_left`, which skips the application turn
//! and then alternates. Stat changes act only on the final tick
//! (`time_left == 0`) where they revert their delta exactly once.

use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::{ActorState, EntityId};

use super::kind::StatusKind;

/// Actor modifier touched by a stat-change effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stat {
    DamageDeal,
    Defense,
}

impl Stat {
    fn modifier_mut(self, actor: &mut ActorState) -> &mut i32 {
        match self {
            Stat::DamageDeal => &mut actor.damage_deal_modifier,
            Stat::Defense => &mut actor.defense_modifier,
        }
    }
}

/// Stationary turns required before petrification starts to hurt.
pub const PETRIFY_STATIONARY_TURNS: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickEffect {
    /// 1-3 damage.
    Bleed,
    /// 2-4 damage.
    Burn,
    /// 1-2 damage.
    Poison,
    /// Damage equal to the number of turns spent without moving.
    Petrify,
    /// Heals 1-2.
    Regeneration,
    StatChange { stat: Stat, delta: i32 },
}

/// Shared odd/even rule for periodic effects.
#[inline]
pub fn is_periodic_turn(duration: u32, time_left: i32) -> bool {
    (i64::from(duration) - i64::from(time_left)).rem_euclid(2) == 1
}

impl TickEffect {
    /// Tick behaviour for `kind`, or `None` for statuses that only gate actions.
    pub fn for_kind(kind: StatusKind, magnitude: i32) -> Option<Self> {
        let magnitude = magnitude.abs();
        let effect = match kind {
            StatusKind::Bleed => TickEffect::Bleed,
            StatusKind::Burn => TickEffect::Burn,
            StatusKind::Poison => TickEffect::Poison,
            StatusKind::Petrify => TickEffect::Petrify,
            StatusKind::Regeneration => TickEffect::Regeneration,
            StatusKind::AttackUp => TickEffect::StatChange {
                stat: Stat::DamageDeal,
                delta: magnitude,
            },
            StatusKind::AttackDown => TickEffect::StatChange {
                stat: Stat::DamageDeal,
                delta: -magnitude,
            },
            StatusKind::DefenseUp => TickEffect::StatChange {
                stat: Stat::Defense,
                delta: magnitude,
            },
            StatusKind::DefenseDown => TickEffect::StatChange {
                stat: Stat::Defense,
                delta: -magnitude,
            },
            StatusKind::Fear
            | StatusKind::Charm
            | StatusKind::Root
            | StatusKind::Levitation
            | StatusKind::Paralysis
            | StatusKind::Sleep
            | StatusKind::Slow
            | StatusKind::Freeze
            | StatusKind::Confusion => return None,
        };
        Some(effect)
    }

    /// Applies the stat delta when the effect is stored.
    pub fn on_apply(&self, actor: &mut ActorState) {
        if let TickEffect::StatChange { stat, delta } = *self {
            *stat.modifier_mut(actor) += delta;
        }
    }

    /// Undoes [`TickEffect::on_apply`].
    pub fn revert(&self, actor: &mut ActorState) {
        if let TickEffect::StatChange { stat, delta } = *self {
            *stat.modifier_mut(actor) -= delta;
        }
    }

    /// Runs one tick for `actor`.
    pub fn tick(&self, ctx: &mut GameContext<'_>, actor: EntityId, duration: u32, time_left: i32) {
        match *self {
            TickEffect::StatChange { .. } => {
                if time_left == 0
                    && let Some(state) = ctx.actor_mut(actor)
                {
                    self.revert(state);
                }
            }
            TickEffect::Regeneration => {
                if is_periodic_turn(duration, time_left) {
                    let amount = ctx.env.rng.range_inclusive(1, 2);
                    ctx.heal(actor, amount);
                }
            }
            TickEffect::Petrify => {
                let stationary = ctx.actor(actor).map_or(0, |state| state.ticks_since_move);
                if is_periodic_turn(duration, time_left) && stationary >= PETRIFY_STATIONARY_TURNS {
                    self.hurt(ctx, actor, stationary.min(i32::MAX as u32) as i32, "stiffen");
                }
            }
            TickEffect::Bleed | TickEffect::Burn | TickEffect::Poison => {
                if is_periodic_turn(duration, time_left) {
                    let (amount, verb) = match self {
                        TickEffect::Bleed => (ctx.env.rng.range_inclusive(1, 3), "bleed"),
                        TickEffect::Burn => (ctx.env.rng.range_inclusive(2, 4), "burn"),
                        _ => (ctx.env.rng.range_inclusive(1, 2), "choke"),
                    };
                    self.hurt(ctx, actor, amount, verb);
                }
            }
        }
    }

    fn hurt(&self, ctx: &mut GameContext<'_>, actor: EntityId, amount: i32, verb: &str) {
        if let Some(state) = ctx.actor(actor) {
            let text = format!("{} {}.", state.subject(), state.verb(verb));
            ctx.tell_if_visible(actor, MessageCategory::Combat, text);
        }
        tracing::trace!(%actor, amount, effect = ?self, "tick damage");
        ctx.damage(actor, amount, None);
    }
}
