//! Melee attack.

use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::{CardinalDirection, EntityId};

use super::{ActionCategory, Command, CommandError, Target};

/// Strike an adjacent actor, chosen by direction or by explicit target.
///
/// A target further away than one cell is missed like an empty cell.
/// Damage rolls `1..=strength`, adds the attacker's damage modifier and
/// subtracts the defender's defense modifier, with a floor of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitCommand {
    pub actor: EntityId,
    pub direction: Option<CardinalDirection>,
    pub target: Option<Target>,
}

impl HitCommand {
    pub fn new(actor: EntityId, direction: CardinalDirection) -> Self {
        Self {
            actor,
            direction: Some(direction),
            target: None,
        }
    }

    pub fn at(actor: EntityId, target: EntityId) -> Self {
        Self {
            actor,
            direction: None,
            target: Some(Target::Actor(target)),
        }
    }

    /// Living actor next to the attacker that this swing connects with.
    fn defender(&self, ctx: &GameContext<'_>) -> Result<Option<EntityId>, CommandError> {
        let origin = ctx
            .position_of(self.actor)
            .ok_or(CommandError::ActorNotFound(self.actor))?;
        let cell = match self.target {
            Some(Target::Actor(id)) if ctx.is_alive(id) => ctx.position_of(id),
            Some(Target::Actor(_)) => None,
            Some(Target::Cell(cell)) => Some(cell),
            None => {
                let direction = self
                    .direction
                    .ok_or(CommandError::MissingTarget { command: "hit" })?;
                Some(origin.step(direction))
            }
        };
        Ok(cell
            .filter(|&cell| origin.is_adjacent(cell))
            .and_then(|cell| ctx.state.entities.actor_at(cell)))
    }
}

impl Command for HitCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "hit"
    }

    fn category(&self) -> ActionCategory {
        ActionCategory::Hit
    }

    fn set_direction(&mut self, direction: CardinalDirection) {
        self.direction = Some(direction);
        self.target = None;
    }

    fn set_target(&mut self, target: Target) {
        self.target = Some(target);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let Some(defender) = self.defender(ctx)?.filter(|&id| id != self.actor) else {
            ctx.flash_player(self.actor, MessageCategory::Failure, "You swing at empty air.");
            return Ok(false);
        };
        let (Some(attacker_state), Some(defender_state)) = (ctx.actor(self.actor), ctx.actor(defender))
        else {
            return Err(CommandError::ActorNotFound(self.actor));
        };

        let strength = attacker_state.stats.strength.max(1);
        let bonus = attacker_state.damage_deal_modifier - defender_state.defense_modifier;
        let text = format!(
            "{} {} {}.",
            attacker_state.subject(),
            attacker_state.verb("hit"),
            defender_state.object()
        );
        let involves_player = attacker_state.is_player() || defender_state.is_player();

        let amount = (ctx.env.rng.range_inclusive(1, strength) + bonus).max(1);
        if involves_player {
            ctx.env.messages.post(MessageCategory::Combat, text);
        } else {
            ctx.tell_if_visible(defender, MessageCategory::Combat, text);
        }
        ctx.damage(defender, amount, Some(self.actor));
        Ok(true)
    }
}
