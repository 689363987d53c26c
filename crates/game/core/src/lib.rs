//! Deterministic turn-based simulation core for a grid roguelike.
//!
//! `rogue-core` owns the rules: who acts next ([`TurnQueue`]), whether an
//! actor's statuses let it act ([`action::evaluate_ability`]), how statuses
//! tick ([`status`]), how damage and death resolve ([`health`]), and how
//! projectiles travel across scheduler passes ([`step`]). Everything the
//! core needs from the outside (map, randomness, messages, sight) arrives
//! through the capability traits in [`env`], bundled with the mutable
//! [`GameState`] into an explicit [`GameContext`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod health;
pub mod state;
pub mod status;
pub mod step;

pub use action::{
    Ability, ActionCategory, ActorTemplate, BuffCommand, Command, CommandError, CommandExt,
    ConsumeCommand, ConsumeSource, Cost, Costed, DigCommand, DoorCommand, FireCommand, HitCommand,
    MoveCommand, MultiplyCommand, PickupCommand, Projectile, RestCommand, StatChangeBuffCommand,
    SummonCommand, Target, TeleportCommand, WeaponKind, evaluate_ability, raw, turn,
};
pub use config::GameConfig;
pub use engine::{GameContext, UpkeepPhase};
pub use env::{
    CellKind, GameEnv, GridParseError, GridWorld, Hazard, LineOfSight, MapDimensions,
    MessageCategory, MessageEntry, MessageLog, MessageSink, PcgRng, RngOracle, VisibilityOracle,
    WorldOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use health::{DamageLedger, DamageReport, DamageSeverity};
pub use state::{
    ActorState, ActorStats, CardinalDirection, DirectionError, EntitiesState, EntityId, Faction,
    GameEvent, GameOutcome, GameState, Item, Position, TurnError, TurnQueue,
};
pub use status::{
    ActionMask, Removal, Stat, StatusEffect, StatusEffectTable, StatusKind, StatusRecord,
    TickEffect, TickGroup,
};
pub use step::{
    DamageStep, DirectionStep, Magnetism, PayloadStep, Step, StepError, StepRunner, TimedStep,
};
