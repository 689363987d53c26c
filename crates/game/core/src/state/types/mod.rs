pub mod actor;
pub mod common;
pub mod direction;
pub mod entities;
pub mod item;

pub use actor::{ActorState, ActorStats, Faction};
pub use common::{EntityId, Position};
pub use direction::{CardinalDirection, DirectionError};
pub use entities::EntitiesState;
pub use item::Item;
