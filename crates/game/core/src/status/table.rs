use std::collections::BTreeMap;

use super::effect::StatusEffect;
use super::kind::{StatusKind, TickGroup};

/// Active statuses of one actor, keyed by kind.
///
/// Storing a kind that is already present replaces the old instance; the
/// replaced effect is handed back so the caller can revert its side effects.
/// Iteration follows [`StatusKind`] declaration order, which keeps ticking
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<StatusRecord>", from = "Vec<StatusRecord>")
)]
pub struct StatusEffectTable {
    effects: BTreeMap<StatusKind, StatusEffect>,
}

impl StatusEffectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `effect`, returning the instance it replaced.
    pub fn insert(&mut self, effect: StatusEffect) -> Option<StatusEffect> {
        self.effects.insert(effect.kind, effect)
    }

    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        self.effects.remove(&kind)
    }

    #[inline]
    pub fn is(&self, kind: StatusKind) -> bool {
        self.effects.contains_key(&kind)
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.get(&kind)
    }

    pub fn get_mut(&mut self, kind: StatusKind) -> Option<&mut StatusEffect> {
        self.effects.get_mut(&kind)
    }

    /// Kinds currently active, optionally restricted to one tick group.
    pub fn kinds(&self, group: Option<TickGroup>) -> Vec<StatusKind> {
        self.effects
            .keys()
            .copied()
            .filter(|kind| group.is_none_or(|group| kind.tick_group() == group))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.values()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Persisted form of a status effect.
///
/// Tick behaviour is not serialized; it is rebuilt from the kind and magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusRecord {
    pub kind: StatusKind,
    pub duration: u32,
    pub time_left: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magnitude: i32,
}

impl From<&StatusEffect> for StatusRecord {
    fn from(effect: &StatusEffect) -> Self {
        Self {
            kind: effect.kind,
            duration: effect.duration,
            time_left: effect.time_left,
            magnitude: effect.magnitude(),
        }
    }
}

impl From<StatusRecord> for StatusEffect {
    fn from(record: StatusRecord) -> Self {
        StatusEffect::restore(record.kind, record.duration, record.time_left, record.magnitude)
    }
}

impl From<StatusEffectTable> for Vec<StatusRecord> {
    fn from(table: StatusEffectTable) -> Self {
        table.iter().map(StatusRecord::from).collect()
    }
}

impl From<Vec<StatusRecord>> for StatusEffectTable {
    fn from(records: Vec<StatusRecord>) -> Self {
        let mut table = StatusEffectTable::new();
        for record in records {
            table.insert(record.into());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_instance_per_kind() {
        let mut table = StatusEffectTable::new();
        assert!(table.insert(StatusEffect::new(StatusKind::Burn, 8)).is_none());
        let replaced = table.insert(StatusEffect::new(StatusKind::Burn, 3));
        assert_eq!(replaced.map(|effect| effect.duration), Some(8));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(StatusKind::Burn).map(|effect| effect.time_left), Some(3));
    }

    #[test]
    fn kinds_filter_by_group() {
        let mut table = StatusEffectTable::new();
        table.insert(StatusEffect::new(StatusKind::DefenseUp, 4));
        table.insert(StatusEffect::new(StatusKind::Bleed, 4));
        table.insert(StatusEffect::new(StatusKind::Sleep, 4));

        assert_eq!(
            table.kinds(Some(TickGroup::Standard)),
            vec![StatusKind::Sleep, StatusKind::Bleed]
        );
        assert_eq!(table.kinds(Some(TickGroup::StatChange)), vec![StatusKind::DefenseUp]);
        assert_eq!(table.kinds(None).len(), 3);
    }
}
