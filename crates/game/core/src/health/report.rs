use std::collections::BTreeMap;

use crate::state::EntityId;

/// Qualitative band for damage relative to the victim's hit points before the hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DamageSeverity {
    Scratch,
    Light,
    Solid,
    Grievous,
    Devastating,
    Mortal,
}

impl DamageSeverity {
    /// Bands by `damage * 100 / current_hp`: 100+, 75+, 50+, 25+, 10+, below.
    pub fn classify(damage: i32, current_hp: i32) -> Self {
        if current_hp <= 0 {
            return DamageSeverity::Mortal;
        }
        let percent = i64::from(damage.max(0)) * 100 / i64::from(current_hp);
        match percent {
            100.. => DamageSeverity::Mortal,
            75..=99 => DamageSeverity::Devastating,
            50..=74 => DamageSeverity::Grievous,
            25..=49 => DamageSeverity::Solid,
            10..=24 => DamageSeverity::Light,
            _ => DamageSeverity::Scratch,
        }
    }

    pub const fn phrase(self) -> &'static str {
        match self {
            DamageSeverity::Mortal => "a mortal blow",
            DamageSeverity::Devastating => "a devastating blow",
            DamageSeverity::Grievous => "a grievous wound",
            DamageSeverity::Solid => "a solid hit",
            DamageSeverity::Light => "a light wound",
            DamageSeverity::Scratch => "barely a scratch",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageTally {
    pub amount: i32,
    /// Victim hit points before the first hit of the turn.
    pub hp_before: i32,
}

/// Player damage aggregated over one turn, flushed as a single summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageLedger {
    taken: Option<DamageTally>,
    dealt: BTreeMap<EntityId, DamageTally>,
}

impl DamageLedger {
    pub fn record_taken(&mut self, amount: i32, hp_before: i32) {
        self.taken
            .get_or_insert(DamageTally {
                amount: 0,
                hp_before,
            })
            .amount += amount;
    }

    pub fn record_dealt(&mut self, target: EntityId, amount: i32, hp_before: i32) {
        self.dealt
            .entry(target)
            .or_insert(DamageTally {
                amount: 0,
                hp_before,
            })
            .amount += amount;
    }

    pub fn taken(&self) -> Option<DamageTally> {
        self.taken
    }

    pub fn dealt(&self, target: EntityId) -> Option<DamageTally> {
        self.dealt.get(&target).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_none() && self.dealt.is_empty()
    }

    /// Empties the ledger, returning what was taken and dealt this turn.
    pub fn take(&mut self) -> (Option<DamageTally>, BTreeMap<EntityId, DamageTally>) {
        (self.taken.take(), std::mem::take(&mut self.dealt))
    }
}
