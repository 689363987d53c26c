//! In-memory world oracle backed by a dense cell grid.
//!
//! Used by tests, content loaders and headless drivers. Rendering front ends
//! are free to provide their own [`WorldOracle`] instead.

use std::collections::{BTreeMap, BTreeSet};

use super::map::{CellKind, Hazard, MapDimensions, WorldOracle};
use crate::state::{EntityId, Item, Position};

/// Errors raised while parsing an ASCII layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("layout has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
}

/// Dense grid world.
///
/// # Glyphs
///
/// | glyph | cell |
/// |---|---|
/// | `.` | floor |
/// | `#` | wall |
/// | `%` | rock (diggable) |
/// | `+` / `'` | closed / open door |
/// | `~` | water |
/// | `:` | chasm |
/// | `^` | floor on fire |
/// | `"` | floor filled with gas |
/// | `*` | magnetic floor |
/// | `M` | magnetic wall |
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWorld {
    dimensions: MapDimensions,
    cells: Vec<CellKind>,
    hazards: BTreeMap<Position, Hazard>,
    magnets: BTreeSet<Position>,
    corpses: BTreeMap<Position, EntityId>,
    items: BTreeMap<Position, Vec<Item>>,
    markers: BTreeSet<Position>,
}

impl GridWorld {
    /// Creates an open floor of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            cells: vec![CellKind::Floor; width as usize * height as usize],
            hazards: BTreeMap::new(),
            magnets: BTreeSet::new(),
            corpses: BTreeMap::new(),
            items: BTreeMap::new(),
            markers: BTreeSet::new(),
        }
    }

    /// Parses an ASCII layout, one string per row (see the glyph table above).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridParseError> {
        let first = rows.first().ok_or(GridParseError::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(GridParseError::Empty);
        }

        let mut world = Self::new(width as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(GridParseError::RaggedRow {
                    row: y,
                    found,
                    expected: width,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let cell = match glyph {
                    '.' => CellKind::Floor,
                    '#' => CellKind::Wall,
                    '%' => CellKind::Rock,
                    '+' => CellKind::DoorClosed,
                    '\'' => CellKind::DoorOpen,
                    '~' => CellKind::Water,
                    ':' => CellKind::Chasm,
                    '^' => {
                        world.hazards.insert(position, Hazard::Fire);
                        CellKind::Floor
                    }
                    '"' => {
                        world.hazards.insert(position, Hazard::Gas);
                        CellKind::Floor
                    }
                    '*' => {
                        world.magnets.insert(position);
                        CellKind::Floor
                    }
                    'M' => {
                        world.magnets.insert(position);
                        CellKind::Wall
                    }
                    glyph => return Err(GridParseError::UnknownGlyph { glyph, x, y }),
                };
                world.set_cell(position, cell);
            }
        }
        Ok(world)
    }

    /// Open floor enclosed by a one-cell wall border.
    pub fn walled(width: u32, height: u32) -> Self {
        let mut world = Self::new(width, height);
        for x in 0..width as i32 {
            world.set_cell(Position::new(x, 0), CellKind::Wall);
            world.set_cell(Position::new(x, height as i32 - 1), CellKind::Wall);
        }
        for y in 0..height as i32 {
            world.set_cell(Position::new(0, y), CellKind::Wall);
            world.set_cell(Position::new(width as i32 - 1, y), CellKind::Wall);
        }
        world
    }

    pub fn set_hazard(&mut self, position: Position, hazard: Option<Hazard>) {
        match hazard {
            Some(hazard) => {
                self.hazards.insert(position, hazard);
            }
            None => {
                self.hazards.remove(&position);
            }
        }
    }

    pub fn set_magnetic(&mut self, position: Position, magnetic: bool) {
        if magnetic {
            self.magnets.insert(position);
        } else {
            self.magnets.remove(&position);
        }
    }

    pub fn items_at(&self, position: Position) -> &[Item] {
        self.items.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn corpse_at(&self, position: Position) -> Option<EntityId> {
        self.corpses.get(&position).copied()
    }

    pub fn has_marker(&self, position: Position) -> bool {
        self.markers.contains(&position)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Renders the static layout back to glyphs (hazards and magnets included).
    pub fn render_rows(&self) -> Vec<String> {
        (0..self.dimensions.height as i32)
            .map(|y| {
                (0..self.dimensions.width as i32)
                    .map(|x| self.glyph(Position::new(x, y)))
                    .collect()
            })
            .collect()
    }

    fn glyph(&self, position: Position) -> char {
        if self.markers.contains(&position) {
            return '-';
        }
        if self.corpses.contains_key(&position) {
            return '&';
        }
        if self.items.get(&position).is_some_and(|items| !items.is_empty()) {
            return '!';
        }
        match (self.cell(position), self.hazards.get(&position)) {
            (_, Some(Hazard::Fire)) => '^',
            (_, Some(Hazard::Gas)) => '"',
            (Some(CellKind::Wall), _) if self.magnets.contains(&position) => 'M',
            (Some(CellKind::Floor), _) if self.magnets.contains(&position) => '*',
            (Some(CellKind::Floor), _) => '.',
            (Some(CellKind::Wall), _) => '#',
            (Some(CellKind::Rock), _) => '%',
            (Some(CellKind::DoorClosed), _) => '+',
            (Some(CellKind::DoorOpen), _) => '\'',
            (Some(CellKind::Water), _) => '~',
            (Some(CellKind::Chasm), _) => ':',
            (None, _) => ' ',
        }
    }
}

impl WorldOracle for GridWorld {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn cell(&self, position: Position) -> Option<CellKind> {
        self.dimensions
            .index(position)
            .and_then(|index| self.cells.get(index).copied())
    }

    fn set_cell(&mut self, position: Position, kind: CellKind) -> bool {
        match self.dimensions.index(position) {
            Some(index) => {
                self.cells[index] = kind;
                true
            }
            None => false,
        }
    }

    fn hazard(&self, position: Position) -> Option<Hazard> {
        self.hazards.get(&position).copied()
    }

    fn is_magnetic(&self, position: Position) -> bool {
        self.magnets.contains(&position)
    }

    fn has_corpse(&self, position: Position) -> bool {
        self.corpses.contains_key(&position)
    }

    fn place_corpse(&mut self, position: Position, of: EntityId) -> bool {
        if !self.can_hold_objects(position) || self.corpses.contains_key(&position) {
            return false;
        }
        self.corpses.insert(position, of);
        true
    }

    fn remove_corpse(&mut self, position: Position) -> bool {
        self.corpses.remove(&position).is_some()
    }

    fn place_item(&mut self, position: Position, item: Item) -> bool {
        if !self.can_hold_objects(position) {
            return false;
        }
        self.items.entry(position).or_default().push(item);
        true
    }

    fn take_item(&mut self, position: Position) -> Option<Item> {
        let stack = self.items.get_mut(&position)?;
        let item = stack.pop();
        if stack.is_empty() {
            self.items.remove(&position);
        }
        item
    }

    fn has_items(&self, position: Position) -> bool {
        self.items.contains_key(&position)
    }

    fn set_projectile_marker(&mut self, position: Position, visible: bool) {
        if visible {
            self.markers.insert(position);
        } else {
            self.markers.remove(&position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_glyph() {
        let world = GridWorld::from_rows(&["#%+'", "~:^\"", "*M.."]).unwrap();
        assert_eq!(world.dimensions(), MapDimensions::new(4, 3));
        assert_eq!(world.cell(Position::new(1, 0)), Some(CellKind::Rock));
        assert!(world.is_blocked(Position::new(2, 0)));
        assert!(!world.is_blocked(Position::new(3, 0)));
        assert_eq!(world.hazard(Position::new(2, 1)), Some(Hazard::Fire));
        assert_eq!(world.hazard(Position::new(3, 1)), Some(Hazard::Gas));
        assert!(world.is_magnetic(Position::new(1, 2)));
        assert!(world.is_blocked(Position::new(1, 2)));
        assert!(world.is_blocked(Position::new(-1, 0)));
        assert_eq!(
            world.render_rows(),
            vec!["#%+'".to_string(), "~:^\"".to_string(), "*M..".to_string()]
        );
    }

    #[test]
    fn rejects_ragged_layouts() {
        assert_eq!(
            GridWorld::from_rows(&["...", ".."]),
            Err(GridParseError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3
            })
        );
        assert!(matches!(
            GridWorld::from_rows(&["..x"]),
            Err(GridParseError::UnknownGlyph { glyph: 'x', .. })
        ));
    }

    #[test]
    fn corpses_only_on_object_cells() {
        let mut world = GridWorld::from_rows(&[".~#"]).unwrap();
        assert!(world.place_corpse(Position::new(0, 0), EntityId(1)));
        assert!(!world.place_corpse(Position::new(0, 0), EntityId(2)));
        assert!(!world.place_corpse(Position::new(1, 0), EntityId(2)));
        assert!(!world.place_corpse(Position::new(2, 0), EntityId(2)));
        assert!(world.remove_corpse(Position::new(0, 0)));
        assert!(!world.remove_corpse(Position::new(0, 0)));
    }

    #[test]
    fn items_stack_and_pop() {
        let mut world = GridWorld::new(2, 1);
        let cell = Position::new(1, 0);
        world.place_item(cell, Item::Ration { nutrition: 10 });
        world.place_item(cell, Item::Waterskin { hydration: 5 });
        assert_eq!(world.items_at(cell).len(), 2);
        assert_eq!(world.take_item(cell), Some(Item::Waterskin { hydration: 5 }));
        assert_eq!(world.take_item(cell), Some(Item::Ration { nutrition: 10 }));
        assert_eq!(world.take_item(cell), None);
    }
}
