//! Actor-related state types.
//!
//! An actor is anything that occupies a grid cell, holds status effects and
//! takes turns: the player, monsters and summoned allies.

use super::{EntityId, Item, Position};
use crate::status::{StatusEffectTable, StatusKind};

/// Actor allegiance.
///
/// Only the player/non-player split drives message visibility and the
/// hunger/thirst gates; the remaining variants feed AI targeting.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    /// The player character.
    Player,
    /// Fights on the player's side (summons, charmed monsters).
    Ally,
    /// Hostile to the player and allies.
    #[default]
    Monster,
}

impl Faction {
    /// Check if this faction is hostile to another faction.
    pub fn is_hostile_to(&self, other: &Faction) -> bool {
        matches!(
            (self, other),
            (Faction::Monster, Faction::Player | Faction::Ally)
                | (Faction::Player | Faction::Ally, Faction::Monster)
        )
    }
}

/// Base combat and movement stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorStats {
    /// Upper bound of the melee damage roll; also improves digging.
    pub strength: i32,
    /// Cells per move. Only 1 is honoured by the core; drivers may grant extra turns.
    pub mobility: i32,
}

impl Default for ActorStats {
    fn default() -> Self {
        Self {
            strength: 3,
            mobility: 1,
        }
    }
}

/// Complete actor state.
///
/// # Invariants
///
/// - `statuses` holds at most one instance per [`StatusKind`].
/// - `damage_deal_modifier` / `defense_modifier` only change through stat-change
///   status effects, which apply their delta on storage and revert it exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    /// Position on the map. None means the actor is not on the map (dead).
    pub position: Option<Position>,
    pub faction: Faction,

    pub hp: i32,
    pub max_hp: i32,
    pub stats: ActorStats,

    /// Flat bonus added to outgoing melee damage.
    pub damage_deal_modifier: i32,
    /// Flat reduction applied to incoming melee damage.
    pub defense_modifier: i32,

    // === Survival counters (player only) ===
    pub hunger: u32,
    pub thirst: u32,

    /// Own turns since the last voluntary move. Petrify scales with it.
    pub ticks_since_move: u32,
    /// Own turns since this actor last dealt or received damage.
    pub recovery_timer: u32,

    pub kills: u32,
    pub drops_loot: bool,

    pub statuses: StatusEffectTable,
    pub inventory: Vec<Item>,
}

impl ActorState {
    pub fn new(id: EntityId, name: impl Into<String>, position: Position, max_hp: i32) -> Self {
        Self {
            id,
            name: name.into(),
            position: Some(position),
            faction: Faction::default(),
            hp: max_hp,
            max_hp,
            stats: ActorStats::default(),
            damage_deal_modifier: 0,
            defense_modifier: 0,
            hunger: 0,
            thirst: 0,
            ticks_since_move: 0,
            recovery_timer: 0,
            kills: 0,
            drops_loot: true,
            statuses: StatusEffectTable::new(),
            inventory: Vec::new(),
        }
    }

    /// Creates the player character.
    pub fn player(position: Position, max_hp: i32) -> Self {
        Self {
            faction: Faction::Player,
            drops_loot: false,
            ..Self::new(EntityId::PLAYER, "you", position, max_hp)
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

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0 && self.position.is_some()
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.faction == Faction::Player
    }

    #[inline]
    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.is(kind)
    }

    /// Sentence subject for messages: "You" for the player, "The rat" otherwise.
    pub fn subject(&self) -> String {
        if self.is_player() {
            "You".to_string()
        } else {
            format!("The {}", self.name)
        }
    }

    /// Sentence object for messages: "you" / "the rat".
    pub fn object(&self) -> String {
        if self.is_player() {
            "you".to_string()
        } else {
            format!("the {}", self.name)
        }
    }

    /// Conjugates a regular verb for the subject ("You burn" / "The rat burns").
    pub fn verb(&self, verb: &str) -> String {
        if self.is_player() {
            verb.to_string()
        } else if verb.ends_with('s') || verb.ends_with("sh") || verb.ends_with("ch") {
            format!("{verb}es")
        } else {
            format!("{verb}s")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_grammar_depends_on_faction() {
        let player = ActorState::player(Position::new(1, 1), 10);
        let rat = ActorState::new(EntityId(3), "rat", Position::new(2, 1), 4);

        assert_eq!(player.subject(), "You");
        assert_eq!(player.verb("burn"), "burn");
        assert_eq!(rat.subject(), "The rat");
        assert_eq!(rat.verb("burn"), "burns");
        assert_eq!(rat.verb("hiss"), "hisses");
        assert!(Faction::Monster.is_hostile_to(&Faction::Ally));
        assert!(!Faction::Player.is_hostile_to(&Faction::Ally));
    }
}
