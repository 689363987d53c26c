//! Health resolution: healing, damage, death and the per-turn damage report.
//!
//! All hit point changes go through [`GameContext::damage`] and
//! [`GameContext::heal`] so that recovery timers, kill credit, corpses and
//! the turn queue stay consistent.
//!
//! [`GameContext::damage`]: crate::engine::GameContext::damage
//! [`GameContext::heal`]: crate::engine::GameContext::heal

mod death;
mod ledger;
mod report;

pub use ledger::DamageReport;
pub use report::{DamageLedger, DamageSeverity, DamageTally};
