use crate::status::StatusKind;

/// Carryable item. Items live either in an actor's pack or on a map cell
/// owned by the [`crate::env::WorldOracle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    /// Food; eating lowers hunger by `nutrition`.
    Ration { nutrition: u32 },
    /// Drink; lowers thirst by `hydration` and douses flames.
    Waterskin { hydration: u32 },
    /// Drinking applies `status` to the drinker for `duration` turns.
    Potion { status: StatusKind, duration: u32 },
}

impl Item {
    pub fn name(&self) -> String {
        match self {
            Item::Ration { .. } => "ration".to_string(),
            Item::Waterskin { .. } => "waterskin".to_string(),
            Item::Potion { status, .. } => format!("potion of {}", status.as_ref()),
        }
    }

    /// Loot table used when a slain actor drops something: (item, weight).
    pub fn loot_table() -> [(Item, u32); 4] {
        [
            (Item::Ration { nutrition: 200 }, 50),
            (Item::Waterskin { hydration: 150 }, 30),
            (
                Item::Potion {
                    status: StatusKind::Regeneration,
                    duration: 10,
                },
                15,
            ),
            (
                Item::Potion {
                    status: StatusKind::AttackUp,
                    duration: 20,
                },
                5,
            ),
        ]
    }
}
