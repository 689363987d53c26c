#![allow(dead_code)]

use rogue_core::{
    ActorState, EntityId, GameConfig, GameContext, GameEnv, GameState, GridWorld, LineOfSight,
    MessageLog, PcgRng, Position, RngOracle,
};

/// Replays a fixed script of raw values, cycling when exhausted.
///
/// `chance(p)` succeeds for values below `p`, so `0` always passes and `99`
/// always fails; `range_inclusive(lo, hi)` yields `lo + value % span`.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "script needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Every draw returns `value`.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Owns a state and every capability, lending them out as a [`GameContext`].
pub struct Fixture<R: RngOracle = PcgRng> {
    pub state: GameState,
    pub world: GridWorld,
    pub rng: R,
    pub log: MessageLog,
    pub vision: LineOfSight,
    pub config: GameConfig,
}

impl Fixture<PcgRng> {
    pub fn open(width: u32, height: u32) -> Self {
        Self::with_world(GridWorld::new(width, height), PcgRng::new(7))
    }

    pub fn rows(rows: &[&str]) -> Self {
        let world = GridWorld::from_rows(rows).expect("valid layout");
        Self::with_world(world, PcgRng::new(7))
    }
}

impl<R: RngOracle> Fixture<R> {
    pub fn with_world(world: GridWorld, rng: R) -> Self {
        Self {
            state: GameState::new(),
            world,
            rng,
            log: MessageLog::default(),
            vision: LineOfSight,
            config: GameConfig::default(),
        }
    }

    pub fn with_rng<S: RngOracle>(self, rng: S) -> Fixture<S> {
        Fixture {
            state: self.state,
            world: self.world,
            rng,
            log: self.log,
            vision: self.vision,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn ctx(&mut self) -> GameContext<'_> {
        GameContext::new(
            &mut self.state,
            GameEnv::new(
                &mut self.world,
                &mut self.rng,
                &mut self.log,
                &self.vision,
                &self.config,
            ),
        )
    }

    pub fn add_player(&mut self, position: Position, hp: i32) -> EntityId {
        self.state.add_actor(ActorState::player(position, hp))
    }

    pub fn add_monster(&mut self, name: &str, position: Position, hp: i32) -> EntityId {
        let id = self.state.entities.allocate_id();
        self.state.add_actor(ActorState::new(id, name, position, hp))
    }

    pub fn actor(&self, id: EntityId) -> &ActorState {
        self.state.entities.actor(id).expect("actor exists")
    }

    pub fn actor_mut(&mut self, id: EntityId) -> &mut ActorState {
        self.state.entities.actor_mut(id).expect("actor exists")
    }

    pub fn logged(&self, needle: &str) -> bool {
        self.log.contains(needle)
    }
}
