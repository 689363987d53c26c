//! End-of-turn upkeep for one actor.
//!
//! Runs after the actor's turn is consumed, in a fixed phase order. A phase
//! that kills the actor ends upkeep; later phases never see a dead actor.

use crate::env::{CellKind, Hazard, MessageCategory};
use crate::state::EntityId;
use crate::status::{StatusEffect, StatusKind, TickGroup};

use super::GameContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum UpkeepPhase {
    /// Hazards and terrain under the actor.
    Environment,
    /// Standard status ticks.
    Statuses,
    /// Stat-change status ticks.
    StatChanges,
    /// Hunger, thirst, stillness and natural recovery.
    Survival,
    /// Falling into a chasm.
    Transition,
}

impl UpkeepPhase {
    pub const ORDER: [UpkeepPhase; 5] = [
        UpkeepPhase::Environment,
        UpkeepPhase::Statuses,
        UpkeepPhase::StatChanges,
        UpkeepPhase::Survival,
        UpkeepPhase::Transition,
    ];
}

impl GameContext<'_> {
    /// Runs every upkeep phase for `actor`, stopping early if it dies.
    pub fn run_upkeep(&mut self, actor: EntityId) {
        for phase in UpkeepPhase::ORDER {
            if !self.is_alive(actor) {
                tracing::trace!(%actor, %phase, "upkeep stopped on death");
                return;
            }
            self.run_upkeep_phase(actor, phase);
        }
    }

    pub fn run_upkeep_phase(&mut self, actor: EntityId, phase: UpkeepPhase) {
        match phase {
            UpkeepPhase::Environment => self.environment_phase(actor),
            UpkeepPhase::Statuses => self.tick_statuses(actor, Some(TickGroup::Standard)),
            UpkeepPhase::StatChanges => self.tick_statuses(actor, Some(TickGroup::StatChange)),
            UpkeepPhase::Survival => self.survival_phase(actor),
            UpkeepPhase::Transition => self.transition_phase(actor),
        }
    }

    fn environment_phase(&mut self, actor: EntityId) {
        let Some(position) = self.position_of(actor) else {
            return;
        };
        let levitating = self.has_status(actor, StatusKind::Levitation);

        match self.env.world.hazard(position) {
            Some(Hazard::Fire) if !self.has_status(actor, StatusKind::Burn) => {
                let duration = self.env.config.hazard_burn_duration;
                self.add_status(actor, StatusEffect::new(StatusKind::Burn, duration));
            }
            Some(Hazard::Gas) if !self.has_status(actor, StatusKind::Poison) => {
                let duration = self.env.config.hazard_poison_duration;
                self.add_status(actor, StatusEffect::new(StatusKind::Poison, duration));
            }
            _ => {}
        }

        if !levitating
            && self.env.world.cell(position) == Some(CellKind::Water)
            && self.has_status(actor, StatusKind::Burn)
        {
            self.tell_player(actor, MessageCategory::Status, "The water douses the flames.");
            self.cleanse(actor, StatusKind::Burn);
        }
    }

    fn survival_phase(&mut self, actor: EntityId) {
        let interval = self.env.config.recovery_interval;
        let Some(state) = self.actor_mut(actor) else {
            return;
        };

        if state.is_player() {
            state.hunger = state.hunger.saturating_add(1);
            state.thirst = state.thirst.saturating_add(1);
        }
        state.ticks_since_move = state.ticks_since_move.saturating_add(1);
        state.recovery_timer = state.recovery_timer.saturating_add(1);

        let recovers = interval > 0 && state.recovery_timer >= interval && state.hp < state.max_hp;
        if recovers {
            state.recovery_timer = 0;
            self.heal(actor, 1);
        }
    }

    fn transition_phase(&mut self, actor: EntityId) {
        let Some(position) = self.position_of(actor) else {
            return;
        };
        if self.env.world.cell(position) != Some(CellKind::Chasm)
            || self.has_status(actor, StatusKind::Levitation)
        {
            return;
        }

        let (min, max) = (
            self.env.config.fall_damage_min,
            self.env.config.fall_damage_max,
        );
        let amount = self.env.rng.range_inclusive(min, max);
        if let Some(state) = self.actor(actor) {
            let text = format!("{} {} into the chasm!", state.subject(), state.verb("fall"));
            self.tell_if_visible(actor, MessageCategory::Info, text);
        }
        tracing::debug!(%actor, %position, amount, "fell into chasm");
        self.damage(actor, amount, None);
    }
}
