//! Status effects: timed conditions attached to actors.
//!
//! Kinds and their action restrictions live in [`kind`]; periodic behaviour in
//! [`tick`]; the per-actor container in [`table`]. The context methods in
//! `engine` tie them to messaging and the health ledger.

mod effect;
mod engine;
pub mod kind;
mod table;
pub mod tick;

pub use effect::StatusEffect;
pub use engine::Removal;
pub use kind::{ActionMask, StatusKind, TickGroup};
pub use table::{StatusEffectTable, StatusRecord};
pub use tick::{Stat, TickEffect, is_periodic_turn};
