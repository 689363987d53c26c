//! Ability gate: decides whether an actor's statuses let a command run.
//!
//! The checks form an ordered decision list. Each rule either settles the
//! outcome or passes to the next one; the first rule that settles wins.
//! Overcoming paralysis settles nothing: the roll shortens the paralysis and
//! evaluation carries on with the rules after it.
//! Hard blocks refuse without consuming the turn, every later rule that
//! negates the command also burns the turn.

use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::{CardinalDirection, EntityId};
use crate::status::{Removal, StatusKind};

use super::ActionCategory;

/// Gate outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ability {
    pub can_act: bool,
    pub consumes_turn: bool,
}

impl Ability {
    pub const ALLOWED: Self = Self {
        can_act: true,
        consumes_turn: true,
    };
    /// Refused outright, the actor may choose another command.
    pub const BLOCKED: Self = Self {
        can_act: false,
        consumes_turn: false,
    };
    /// The turn is lost.
    pub const NEGATED: Self = Self {
        can_act: false,
        consumes_turn: true,
    };
}

/// Percent chance to act through paralysis.
pub const fn paralysis_overcome_percent(category: ActionCategory) -> u32 {
    match category {
        ActionCategory::Move => 33,
        ActionCategory::Hit => 25,
        ActionCategory::Act => 20,
    }
}

pub const SLOW_NEGATE_PERCENT: u32 = 50;
pub const FREEZE_BREAK_PERCENT: u32 = 50;
pub const SURVIVAL_NEGATE_PERCENT: u32 = 20;
pub const CONFUSION_STUMBLE_PERCENT: u32 = 50;

type Rule = fn(&mut GameContext<'_>, EntityId, ActionCategory) -> Option<Ability>;

const RULES: [Rule; 7] = [
    hard_block,
    paralysis,
    sleep,
    slow,
    freeze,
    dehydration,
    starvation,
];

/// Runs the decision list for `actor` attempting a `category` action.
pub fn evaluate_ability(
    ctx: &mut GameContext<'_>,
    actor: EntityId,
    category: ActionCategory,
) -> Ability {
    for rule in RULES {
        if let Some(ability) = rule(ctx, actor, category) {
            return ability;
        }
    }
    Ability::ALLOWED
}

/// With confusion, half of all intended directions are replaced by a random one.
pub fn confuse_direction(
    ctx: &mut GameContext<'_>,
    actor: EntityId,
    intended: CardinalDirection,
) -> CardinalDirection {
    if !ctx.has_status(actor, StatusKind::Confusion)
        || !ctx.env.rng.chance(CONFUSION_STUMBLE_PERCENT)
    {
        return intended;
    }
    let directions = CardinalDirection::all();
    let index = ctx.env.rng.range_exclusive(0, directions.len() as i32) as usize;
    ctx.tell_player(actor, MessageCategory::Status, "You stumble around in confusion.");
    directions[index]
}

static HARD_BLOCKERS: [(StatusKind, &str); 4] = [
    (StatusKind::Fear, "You are too afraid to attack."),
    (StatusKind::Charm, "You can't bring yourself to attack."),
    (StatusKind::Root, "You are rooted to the ground."),
    (StatusKind::Levitation, "You float helplessly."),
];

fn hard_block(ctx: &mut GameContext<'_>, actor: EntityId, category: ActionCategory) -> Option<Ability> {
    let (_, text) = HARD_BLOCKERS.iter().find(|(kind, _)| {
        kind.hard_blocks().intersects(category.mask()) && ctx.has_status(actor, *kind)
    })?;
    ctx.flash_player(actor, MessageCategory::Failure, *text);
    Some(Ability::BLOCKED)
}

/// Overcoming paralysis wears it down by one or two turns; the rest of the
/// list still applies.
fn paralysis(ctx: &mut GameContext<'_>, actor: EntityId, category: ActionCategory) -> Option<Ability> {
    if !ctx.has_status(actor, StatusKind::Paralysis) {
        return None;
    }
    if !ctx.env.rng.chance(paralysis_overcome_percent(category)) {
        ctx.tell_player(actor, MessageCategory::Status, "You are paralyzed!");
        return Some(Ability::NEGATED);
    }

    let shortened = ctx.env.rng.range_inclusive(1, 2);
    let expired = ctx
        .actor_mut(actor)
        .and_then(|state| state.statuses.get_mut(StatusKind::Paralysis))
        .map(|effect| {
            effect.time_left -= shortened;
            effect.time_left <= 0
        })
        .unwrap_or(false);
    ctx.tell_player(actor, MessageCategory::Status, "You fight through the paralysis.");
    if expired {
        ctx.remove_status(actor, StatusKind::Paralysis, Removal::Expired);
    }
    None
}

fn sleep(ctx: &mut GameContext<'_>, actor: EntityId, _category: ActionCategory) -> Option<Ability> {
    if !ctx.has_status(actor, StatusKind::Sleep) {
        return None;
    }
    ctx.tell_player(actor, MessageCategory::Status, "You are fast asleep.");
    Some(Ability::NEGATED)
}

fn slow(ctx: &mut GameContext<'_>, actor: EntityId, _category: ActionCategory) -> Option<Ability> {
    if !ctx.has_status(actor, StatusKind::Slow) || !ctx.env.rng.chance(SLOW_NEGATE_PERCENT) {
        return None;
    }
    ctx.tell_player(actor, MessageCategory::Status, "You move too sluggishly.");
    Some(Ability::NEGATED)
}

fn freeze(ctx: &mut GameContext<'_>, actor: EntityId, category: ActionCategory) -> Option<Ability> {
    if !ctx.has_status(actor, StatusKind::Freeze) {
        return None;
    }
    if category == ActionCategory::Move && ctx.env.rng.chance(FREEZE_BREAK_PERCENT) {
        ctx.tell_player(actor, MessageCategory::Status, "You break free of the ice.");
        ctx.cleanse(actor, StatusKind::Freeze);
        return None;
    }
    ctx.tell_player(actor, MessageCategory::Status, "You are frozen solid.");
    Some(Ability::NEGATED)
}

fn dehydration(ctx: &mut GameContext<'_>, actor: EntityId, _category: ActionCategory) -> Option<Ability> {
    let threshold = ctx.env.config.thirst_threshold;
    let parched = ctx
        .actor(actor)
        .is_some_and(|state| state.is_player() && state.thirst >= threshold);
    if !parched || !ctx.env.rng.chance(SURVIVAL_NEGATE_PERCENT) {
        return None;
    }
    ctx.tell_player(actor, MessageCategory::Status, "You are too thirsty to act.");
    Some(Ability::NEGATED)
}

fn starvation(ctx: &mut GameContext<'_>, actor: EntityId, _category: ActionCategory) -> Option<Ability> {
    let threshold = ctx.env.config.hunger_threshold;
    let starving = ctx
        .actor(actor)
        .is_some_and(|state| state.is_player() && state.hunger >= threshold);
    if !starving || !ctx.env.rng.chance(SURVIVAL_NEGATE_PERCENT) {
        return None;
    }
    ctx.tell_player(actor, MessageCategory::Status, "You are too weak from hunger.");
    Some(Ability::NEGATED)
}
