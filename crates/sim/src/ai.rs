//! Turn policies for the reference driver.
//!
//! Policies only *choose* a command; gating, costs and upkeep are applied by
//! [`rogue_core::turn`]. A policy may pick something that turns out to be
//! refused, in which case the driver falls back to resting.

use rogue_core::{
    ActorState, ActorTemplate, BuffCommand, CardinalDirection, CellKind, Command, CommandExt,
    ConsumeCommand, ConsumeSource, Cost, DigCommand, DoorCommand, EntityId, Faction, FireCommand,
    GameContext, HitCommand, Item, MoveCommand, MultiplyCommand, PickupCommand, Position,
    Projectile, RestCommand, StatusKind, SummonCommand, WeaponKind,
};

/// Furthest distance at which ranged options are considered.
const SHOT_RANGE: u32 = 6;
const ARROW_DAMAGE: i32 = 3;

/// How an actor decides what to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Eats, drinks, loots, shoots and fights.
    Player,
    /// Closes in and hits.
    Melee,
    /// Melee, occasionally splitting in two.
    Splitter,
    /// Puts targets to sleep from afar and calls for help.
    Caster,
}

impl Behavior {
    pub fn of(actor: &ActorState) -> Self {
        if actor.is_player() {
            return Self::Player;
        }
        match actor.name.as_str() {
            "slime" => Self::Splitter,
            "shaman" => Self::Caster,
            _ => Self::Melee,
        }
    }
}

/// Picks the next command for `actor`.
pub fn choose(ctx: &mut GameContext<'_>, actor: EntityId) -> Box<dyn Command> {
    let Some(state) = ctx.actor(actor) else {
        return RestCommand::new(actor).boxed();
    };
    let behavior = Behavior::of(state);
    let Some(origin) = state.position else {
        return RestCommand::new(actor).boxed();
    };

    if behavior == Behavior::Player
        && let Some(command) = tend_to_needs(ctx, actor, origin)
    {
        return command;
    }

    let Some((target, goal)) = nearest_hostile(ctx, actor, origin) else {
        return RestCommand::new(actor).boxed();
    };
    let distance = origin.chebyshev_distance(goal);

    if distance == 1 {
        if behavior == Behavior::Splitter && ctx.env.rng.one_in(6) {
            return MultiplyCommand::new(actor).boxed();
        }
        return HitCommand::at(actor, target).boxed();
    }

    let shot = (distance <= SHOT_RANGE)
        .then(|| clear_shot(ctx, origin, goal))
        .flatten();
    match behavior {
        Behavior::Player => {
            if let Some(direction) = shot
                && ctx.env.rng.one_in(2)
            {
                let arrow = Projectile::Damage {
                    amount: ARROW_DAMAGE,
                    weapon: WeaponKind::Arrow,
                };
                return FireCommand::new(actor, direction, arrow).boxed();
            }
        }
        Behavior::Caster => {
            if let Some(direction) = shot
                && ctx.env.rng.one_in(3)
            {
                let sleep = BuffCommand::new(actor, StatusKind::Sleep, 3).boxed();
                return FireCommand::new(actor, direction, Projectile::Payload(sleep)).boxed();
            }
            if ctx.env.rng.one_in(8) {
                let rats = SummonCommand::new(actor, ActorTemplate::new("rat", 4), 1);
                return rats.with_cost(Cost::Health(2)).boxed();
            }
        }
        Behavior::Melee | Behavior::Splitter => {}
    }

    if distance > ctx.env.config.visibility_radius && behavior != Behavior::Player {
        return RestCommand::new(actor).boxed();
    }
    approach(ctx, actor, origin, goal)
}

/// Survival chores the player handles before fighting.
fn tend_to_needs(
    ctx: &mut GameContext<'_>,
    actor: EntityId,
    origin: Position,
) -> Option<Box<dyn Command>> {
    let state = ctx.actor(actor)?;
    let config = ctx.env.config;
    let find = |wanted: fn(&Item) -> bool| state.inventory.iter().position(wanted);

    if state.hp * 3 < state.max_hp
        && !state.has_status(StatusKind::Regeneration)
        && let Some(slot) = find(|item| {
            matches!(
                item,
                Item::Potion {
                    status: StatusKind::Regeneration,
                    ..
                }
            )
        })
    {
        return Some(ConsumeCommand::new(actor, ConsumeSource::Slot(slot)).boxed());
    }

    if state.hunger * 2 >= config.hunger_threshold {
        if let Some(slot) = find(|item| matches!(item, Item::Ration { .. })) {
            return Some(ConsumeCommand::new(actor, ConsumeSource::Slot(slot)).boxed());
        }
        if ctx.env.world.has_corpse(origin) {
            return Some(ConsumeCommand::new(actor, ConsumeSource::Corpse).boxed());
        }
    }

    if (state.thirst * 2 >= config.thirst_threshold || state.has_status(StatusKind::Burn))
        && let Some(slot) = find(|item| matches!(item, Item::Waterskin { .. }))
    {
        return Some(ConsumeCommand::new(actor, ConsumeSource::Slot(slot)).boxed());
    }

    if state.inventory.len() < config.inventory_capacity && ctx.env.world.has_items(origin) {
        return Some(PickupCommand::new(actor).boxed());
    }
    None
}

/// Closest living actor hostile to `actor`, ties broken by id.
fn nearest_hostile(
    ctx: &GameContext<'_>,
    actor: EntityId,
    origin: Position,
) -> Option<(EntityId, Position)> {
    let faction = ctx.actor(actor).map_or(Faction::Monster, |state| state.faction);
    ctx.state
        .entities
        .iter()
        .filter(|other| other.id != actor && other.is_alive())
        .filter(|other| faction.is_hostile_to(&other.faction))
        .filter_map(|other| other.position.map(|position| (other.id, position)))
        .min_by_key(|&(id, position)| (origin.chebyshev_distance(position), id))
}

/// Direction of an unobstructed straight or diagonal line from `from` to `to`.
fn clear_shot(ctx: &GameContext<'_>, from: Position, to: Position) -> Option<CardinalDirection> {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
        return None;
    }
    let direction = CardinalDirection::toward(dx, dy).ok()?;

    let mut cell = from.step(direction);
    while cell != to {
        if ctx.env.world.is_blocked(cell) || ctx.state.entities.is_occupied(cell) {
            return None;
        }
        cell = cell.step(direction);
    }
    Some(direction)
}

/// Steps toward `goal`, opening doors and digging through rock on the way.
fn approach(
    ctx: &GameContext<'_>,
    actor: EntityId,
    origin: Position,
    goal: Position,
) -> Box<dyn Command> {
    let Ok(direct) = CardinalDirection::toward(goal.x - origin.x, goal.y - origin.y) else {
        return RestCommand::new(actor).boxed();
    };
    match ctx.env.world.cell(origin.step(direct)) {
        Some(CellKind::DoorClosed) => return DoorCommand::new(actor, direct).boxed(),
        Some(CellKind::Rock) if ctx.is_player(actor) => {
            return DigCommand::new(actor, direct).boxed();
        }
        _ => {}
    }

    let current = origin.chebyshev_distance(goal);
    CardinalDirection::all()
        .into_iter()
        .map(|direction| (direction, origin.step(direction)))
        .filter(|&(_, cell)| ctx.is_free(cell) && !is_perilous(ctx, cell))
        .map(|(direction, cell)| (cell.chebyshev_distance(goal), direction))
        .filter(|&(distance, _)| distance < current)
        .min_by_key(|&(distance, direction)| (distance, direction != direct))
        .map_or_else(
            || RestCommand::new(actor).boxed(),
            |(_, direction)| MoveCommand::new(actor, direction).boxed(),
        )
}

fn is_perilous(ctx: &GameContext<'_>, cell: Position) -> bool {
    ctx.env.world.cell(cell) == Some(CellKind::Chasm) || ctx.env.world.hazard(cell).is_some()
}
