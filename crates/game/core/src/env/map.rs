use crate::state::{EntityId, Item, Position};

/// World-query capability: map geometry plus the mutable cell contents the core
/// touches (doors, dug rock, corpses, dropped items, projectile markers).
///
/// Actor occupancy is not part of this trait; it is derived from
/// [`crate::state::EntitiesState`].
pub trait WorldOracle {
    fn dimensions(&self) -> MapDimensions;

    /// Returns the cell at `position`, or `None` outside the map.
    fn cell(&self, position: Position) -> Option<CellKind>;

    /// Replaces a cell. Returns false outside the map.
    fn set_cell(&mut self, position: Position, kind: CellKind) -> bool;

    /// Ongoing hazard (fire, gas) on a cell.
    fn hazard(&self, _position: Position) -> Option<Hazard> {
        None
    }

    /// Whether a cell attracts passing projectiles.
    fn is_magnetic(&self, _position: Position) -> bool {
        false
    }

    fn has_corpse(&self, position: Position) -> bool;

    /// Places a corpse. Returns false if the cell cannot hold one.
    fn place_corpse(&mut self, position: Position, of: EntityId) -> bool;

    /// Removes a corpse. Returns false if there was none to remove.
    fn remove_corpse(&mut self, position: Position) -> bool;

    /// Drops an item on a cell. Returns false if the cell cannot hold items.
    fn place_item(&mut self, position: Position, item: Item) -> bool;

    /// Takes the topmost item from a cell.
    fn take_item(&mut self, position: Position) -> Option<Item>;

    fn has_items(&self, position: Position) -> bool;

    /// Shows or clears the transient "projectile in flight" marker.
    fn set_projectile_marker(&mut self, _position: Position, _visible: bool) {}

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// True for walls, rock, closed doors and anything outside the map.
    fn is_blocked(&self, position: Position) -> bool {
        self.cell(position).is_none_or(CellKind::blocks_movement)
    }

    fn blocks_sight(&self, position: Position) -> bool {
        self.cell(position).is_none_or(CellKind::blocks_sight)
    }

    /// Whether a corpse or item may rest on the cell.
    fn can_hold_objects(&self, position: Position) -> bool {
        self.cell(position).is_some_and(CellKind::holds_objects)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Converts a position into a row-major index.
    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

/// Canonical terrain classes for map cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Floor,
    /// Permanent wall.
    Wall,
    /// Diggable rock.
    Rock,
    DoorOpen,
    DoorClosed,
    /// Shallow water; extinguishes burning actors.
    Water,
    /// Non-levitating actors standing here fall.
    Chasm,
}

impl CellKind {
    pub fn blocks_movement(self) -> bool {
        matches!(self, CellKind::Wall | CellKind::Rock | CellKind::DoorClosed)
    }

    pub fn blocks_sight(self) -> bool {
        self.blocks_movement()
    }

    pub fn holds_objects(self) -> bool {
        matches!(self, CellKind::Floor | CellKind::DoorOpen)
    }

    pub fn is_diggable(self) -> bool {
        matches!(self, CellKind::Rock)
    }

    pub fn is_door(self) -> bool {
        matches!(self, CellKind::DoorOpen | CellKind::DoorClosed)
    }
}

/// Cell hazards applied to whoever ends a turn on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hazard {
    /// Sets the occupant burning.
    Fire,
    /// Poisons the occupant.
    Gas,
}
