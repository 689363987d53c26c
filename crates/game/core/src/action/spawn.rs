//! Commands that bring new actors into play.

use crate::engine::GameContext;
use crate::env::MessageCategory;
use crate::state::{ActorState, ActorStats, EntityId, Faction, GameEvent, Position};
use crate::status::StatusEffectTable;

use super::{Command, CommandError, Target};

/// Blueprint for a summoned or loaded actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub max_hp: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: ActorStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub faction: Faction,
    #[cfg_attr(feature = "serde", serde(default = "default_drops_loot"))]
    pub drops_loot: bool,
}

#[cfg(feature = "serde")]
fn default_drops_loot() -> bool {
    true
}

impl ActorTemplate {
    pub fn new(name: impl Into<String>, max_hp: i32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            stats: ActorStats::default(),
            faction: Faction::default(),
            drops_loot: true,
        }
    }

    pub fn with_faction(mut self, faction: Faction) -> Self {
        self.faction = faction;
        self
    }

    pub fn with_stats(mut self, stats: ActorStats) -> Self {
        self.stats = stats;
        self
    }

    /// Builds an actor at `position`. The id is reassigned when spawned.
    pub fn instantiate(&self, position: Position) -> ActorState {
        let mut actor = ActorState::new(EntityId(0), self.name.clone(), position, self.max_hp)
            .with_faction(self.faction)
            .with_stats(self.stats);
        actor.drops_loot = self.drops_loot;
        actor
    }
}

impl GameContext<'_> {
    /// Adds `actor` to the world at the tail of the turn queue.
    pub fn spawn_actor(&mut self, actor: ActorState, parent: Option<EntityId>) -> EntityId {
        let id = self.state.entities.spawn(actor);
        self.state.turn.push_actor(id);
        self.state.events.push(GameEvent::Spawned { actor: id, parent });
        tracing::debug!(%id, ?parent, "actor spawned");
        id
    }
}

/// Split the target (the actor itself by default) into two.
///
/// The copy shares the original's hit points and stats but starts with no
/// statuses, kills or inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultiplyCommand {
    pub actor: EntityId,
    pub target: Option<Target>,
}

impl MultiplyCommand {
    pub fn new(actor: EntityId) -> Self {
        Self {
            actor,
            target: None,
        }
    }
}

impl Command for MultiplyCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "multiply"
    }

    fn set_target(&mut self, target: Target) {
        self.target = Some(target);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let Some(parent) = Target::recipient(self.target, self.actor) else {
            return Ok(false);
        };
        let Some(origin) = ctx.position_of(parent).filter(|_| ctx.is_alive(parent)) else {
            return Ok(false);
        };
        if ctx.is_player(parent) {
            return Ok(false);
        }

        let Some(cell) = ctx.find_free_adjacent(origin) else {
            return Ok(true);
        };
        let Some(template) = ctx.actor(parent) else {
            return Ok(false);
        };

        let mut child = template.clone();
        child.position = Some(cell);
        child.statuses = StatusEffectTable::new();
        // Modifiers only ever carry status deltas, which the copy does not inherit.
        child.damage_deal_modifier = 0;
        child.defense_modifier = 0;
        child.kills = 0;
        child.inventory.clear();
        child.ticks_since_move = 0;

        let text = format!("{} {}!", template.subject(), template.verb("split"));
        ctx.tell_if_visible(parent, MessageCategory::Info, text);
        ctx.spawn_actor(child, Some(parent));
        Ok(true)
    }
}

/// Call `count` new actors from a template around the caster or a target cell.
///
/// A target cell inside walls or off the map summons nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummonCommand {
    pub actor: EntityId,
    pub template: ActorTemplate,
    pub count: u32,
    pub target: Option<Target>,
}

impl SummonCommand {
    pub fn new(actor: EntityId, template: ActorTemplate, count: u32) -> Self {
        Self {
            actor,
            template,
            count,
            target: None,
        }
    }
}

impl Command for SummonCommand {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn name(&self) -> &'static str {
        "summon"
    }

    fn set_target(&mut self, target: Target) {
        self.target = Some(target);
    }

    fn execute(&mut self, ctx: &mut GameContext<'_>) -> Result<bool, CommandError> {
        let aimed = match self.target {
            Some(Target::Cell(cell)) => Some(cell),
            Some(Target::Actor(id)) => ctx.position_of(id),
            None => None,
        };
        if let Some(cell) = aimed
            && ctx.env.world.is_blocked(cell)
        {
            tracing::debug!(%cell, "summon aimed into solid terrain");
            return Ok(false);
        }
        let origin = match aimed {
            Some(cell) => cell,
            None => ctx
                .position_of(self.actor)
                .ok_or(CommandError::ActorNotFound(self.actor))?,
        };

        let mut summoned = 0;
        for _ in 0..self.count {
            let cell = if aimed.is_some() && summoned == 0 && ctx.is_free(origin) {
                Some(origin)
            } else {
                ctx.find_free_adjacent(origin)
            };
            let Some(cell) = cell else {
                break;
            };
            ctx.spawn_actor(self.template.instantiate(cell), Some(self.actor));
            summoned += 1;
        }

        if summoned > 0 && ctx.player_can_see(origin) {
            let text = if summoned == 1 {
                format!("A {} appears out of thin air!", self.template.name)
            } else {
                format!("{summoned} {}s appear out of thin air!", self.template.name)
            };
            ctx.env.messages.post(MessageCategory::Info, text);
        }
        Ok(true)
    }
}
