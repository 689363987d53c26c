//! Status effect kinds and the action categories they restrict.

use bitflags::bitflags;

bitflags! {
    /// Action categories a status can refuse outright.
    ///
    /// A hard block never consumes the actor's turn; see the ability gate.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActionMask: u8 {
        const MOVE = 1 << 0;
        const HIT  = 1 << 1;
        const ACT  = 1 << 2;
    }
}

/// Which upkeep phase ticks a status.
///
/// Standard effects tick before stat-change effects within one upkeep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TickGroup {
    Standard,
    StatChange,
}

/// Every status effect the simulation knows about.
///
/// At most one instance of each kind is active on an actor at a time.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusKind {
    // ========================================================================
    // Restraints (hard-block categories of action)
    // ========================================================================
    /// Cannot attack.
    Fear,
    /// Cannot attack.
    Charm,
    /// Cannot move.
    Root,
    /// Cannot move or attack.
    Levitation,

    // ========================================================================
    // Incapacitation (probabilistic turn loss)
    // ========================================================================
    Paralysis,
    Sleep,
    Slow,
    Freeze,
    /// Moves may go in a random direction.
    Confusion,

    // ========================================================================
    // Periodic effects
    // ========================================================================
    Bleed,
    Burn,
    Poison,
    /// Damages actors that stand still.
    Petrify,
    Regeneration,

    // ========================================================================
    // Stat changes (modifier applied on add, reverted on expiry)
    // ========================================================================
    AttackUp,
    AttackDown,
    DefenseUp,
    DefenseDown,
}

impl StatusKind {
    /// Word used in "becomes <adjective>" and "no longer <adjective>" messages.
    pub const fn adjective(self) -> &'static str {
        match self {
            StatusKind::Fear => "afraid",
            StatusKind::Charm => "charmed",
            StatusKind::Root => "rooted",
            StatusKind::Levitation => "levitating",
            StatusKind::Paralysis => "paralyzed",
            StatusKind::Sleep => "asleep",
            StatusKind::Slow => "slowed",
            StatusKind::Freeze => "frozen",
            StatusKind::Confusion => "confused",
            StatusKind::Bleed => "bleeding",
            StatusKind::Burn => "burning",
            StatusKind::Poison => "poisoned",
            StatusKind::Petrify => "petrified",
            StatusKind::Regeneration => "regenerating",
            StatusKind::AttackUp => "stronger",
            StatusKind::AttackDown => "weaker",
            StatusKind::DefenseUp => "tougher",
            StatusKind::DefenseDown => "vulnerable",
        }
    }

    /// Categories this status refuses without consuming a turn.
    pub const fn hard_blocks(self) -> ActionMask {
        match self {
            StatusKind::Fear | StatusKind::Charm => ActionMask::HIT,
            StatusKind::Root => ActionMask::MOVE,
            StatusKind::Levitation => ActionMask::MOVE.union(ActionMask::HIT),
            _ => ActionMask::empty(),
        }
    }

    pub const fn tick_group(self) -> TickGroup {
        match self {
            StatusKind::AttackUp
            | StatusKind::AttackDown
            | StatusKind::DefenseUp
            | StatusKind::DefenseDown => TickGroup::StatChange,
            _ => TickGroup::Standard,
        }
    }

    #[inline]
    pub const fn is_stat_change(self) -> bool {
        matches!(self.tick_group(), TickGroup::StatChange)
    }

    /// Magnitude used when a stat change is applied without an explicit amount.
    pub const fn default_magnitude(self) -> i32 {
        if self.is_stat_change() { 3 } else { 0 }
    }
}
