use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::EntityId;

use super::report::DamageSeverity;

/// Outcome of a single [`GameContext::damage`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    pub amount: i32,
    pub hp_before: i32,
    pub hp_after: i32,
    pub killed: bool,
}

impl DamageReport {
    pub fn severity(&self) -> DamageSeverity {
        DamageSeverity::classify(self.amount, self.hp_before)
    }
}

impl GameContext<'_> {
    /// Restores up to `amount` hit points, never exceeding `max_hp`.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, target: EntityId, amount: i32) -> i32 {
        let Some(actor) = self.state.entities.actor_mut(target) else {
            return 0;
        };
        if !actor.is_alive() || amount <= 0 {
            return 0;
        }
        let before = actor.hp;
        actor.hp = actor.hp.saturating_add(amount).min(actor.max_hp).max(before);
        actor.hp - before
    }

    /// Applies `amount` damage to `target`.
    ///
    /// Resets the recovery timer of both parties, feeds the player's damage
    /// report and resolves death when hit points drop to zero or below.
    /// Returns `None` if the target is missing or already dead.
    pub fn damage(
        &mut self,
        target: EntityId,
        amount: i32,
        attacker: Option<EntityId>,
    ) -> Option<DamageReport> {
        let amount = amount.max(0);
        let victim = self.state.entities.actor_mut(target)?;
        if !victim.is_alive() {
            return None;
        }

        let hp_before = victim.hp;
        victim.hp = victim.hp.saturating_sub(amount);
        victim.recovery_timer = 0;
        let hp_after = victim.hp;
        let victim_is_player = victim.is_player();

        let attacker_is_player = match attacker.and_then(|id| self.state.entities.actor_mut(id)) {
            Some(source) => {
                source.recovery_timer = 0;
                source.is_player()
            }
            None => false,
        };

        if victim_is_player {
            self.state.ledger.record_taken(amount, hp_before);
        } else if attacker_is_player {
            self.state.ledger.record_dealt(target, amount, hp_before);
        }

        tracing::trace!(%target, ?attacker, amount, hp_after, "damage applied");

        let killed = hp_after <= 0;
        if killed {
            self.resolve_death(target, attacker);
        }

        Some(DamageReport {
            amount,
            hp_before,
            hp_after,
            killed,
        })
    }

    /// Turns the damage accumulated this turn into at most one message per
    /// direction (taken, and dealt per victim).
    pub fn flush_damage_report(&mut self) {
        let (taken, dealt) = self.state.ledger.take();

        if let Some(tally) = taken
            && tally.amount > 0
        {
            let severity = DamageSeverity::classify(tally.amount, tally.hp_before);
            self.env.messages.post(
                MessageCategory::Combat,
                format!("You take {} damage, {}.", tally.amount, severity.phrase()),
            );
        }

        for (victim, tally) in dealt {
            if tally.amount <= 0 {
                continue;
            }
            let name = self
                .actor(victim)
                .map_or_else(|| "something".to_string(), |actor| actor.object());
            let severity = DamageSeverity::classify(tally.amount, tally.hp_before);
            self.env.messages.post(
                MessageCategory::Combat,
                format!(
                    "You deal {} damage to {name}, {}.",
                    tally.amount,
                    severity.phrase()
                ),
            );
        }
    }
}
