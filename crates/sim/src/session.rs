//! Round-based driver loop around [`rogue_core::turn`].

use std::collections::BTreeSet;

use anyhow::Result;
use rogue_core::{
    EntityId, Faction, GameConfig, GameContext, GameEnv, GameError, GameOutcome, GameState,
    GridWorld, LineOfSight, MessageEntry, MessageLog, PcgRng, RestCommand, turn,
};
use tracing::{debug, info, warn};

use crate::ai;

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    PlayerDied,
    Cleared,
    RoundLimit,
}

impl StopReason {
    pub fn describe(self) -> &'static str {
        match self {
            StopReason::PlayerDied => "the player died",
            StopReason::Cleared => "no hostiles remain",
            StopReason::RoundLimit => "round limit reached",
        }
    }
}

/// Owns a game state together with every capability the core needs.
pub struct Session {
    pub state: GameState,
    pub world: GridWorld,
    rng: PcgRng,
    log: MessageLog,
    vision: LineOfSight,
    config: GameConfig,
    pub rounds_played: u32,
}

impl Session {
    pub fn new(state: GameState, world: GridWorld, config: GameConfig, seed: u64) -> Self {
        Self {
            state,
            world,
            rng: PcgRng::new(seed),
            log: MessageLog::default(),
            vision: LineOfSight,
            config,
            rounds_played: 0,
        }
    }

    fn ctx(&mut self) -> GameContext<'_> {
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

    /// Plays rounds until the player dies, the arena is cleared or
    /// `max_rounds` have passed. Messages are handed to `on_message` as they
    /// are posted.
    pub fn run(
        &mut self,
        max_rounds: u32,
        mut on_message: impl FnMut(&MessageEntry),
    ) -> Result<StopReason> {
        loop {
            let stop = self
                .stop_reason()
                .or((self.rounds_played >= max_rounds).then_some(StopReason::RoundLimit));
            if let Some(reason) = stop {
                self.ctx().flush_damage_report();
                self.log.drain().iter().for_each(&mut on_message);
                return Ok(reason);
            }
            self.play_round()?;
            self.log.drain().iter().for_each(&mut on_message);
        }
    }

    /// One round: every actor queued at the start of the round gets at most
    /// one turn, then in-flight projectiles move once.
    ///
    /// The round ends when the rotation reaches an actor that already acted
    /// or one that joined the queue during the round.
    pub fn play_round(&mut self) -> Result<()> {
        let roster: BTreeSet<EntityId> = self.state.turn.iter().collect();
        let mut acted = BTreeSet::new();
        while !self.state.is_over() {
            let Ok(actor) = self.state.turn.current_actor() else {
                break;
            };
            if !roster.contains(&actor) || !acted.insert(actor) {
                break;
            }
            self.take_turn(actor)?;
            if self.state.turn.current_actor().ok() == Some(actor) {
                self.state.turn.advance()?;
            }
            for event in self.state.drain_events() {
                info!(?event, "game event");
            }
        }

        match self.ctx().run_step_pass() {
            Ok(finished) if finished > 0 => debug!(finished, "stepper chains finished"),
            Ok(_) => {}
            Err(error) if error.severity().is_internal() => return Err(error.into()),
            Err(error) => warn!(%error, code = error.error_code(), "stepper pass error"),
        }

        self.rounds_played += 1;
        Ok(())
    }

    fn take_turn(&mut self, actor: EntityId) -> Result<()> {
        let mut ctx = self.ctx();
        if ctx.is_player(actor) {
            ctx.flush_damage_report();
        }

        let mut command = ai::choose(&mut ctx, actor);
        let consumed = match turn(&mut command, &mut ctx) {
            Ok(consumed) => consumed,
            Err(error) if error.severity().is_recoverable() => {
                warn!(%actor, %error, code = error.error_code(), "command failed");
                false
            }
            Err(error) => return Err(error.into()),
        };

        if !consumed && ctx.is_alive(actor) {
            debug!(%actor, command = command.name(), "turn not consumed, resting");
            turn(&mut RestCommand::new(actor), &mut ctx)?;
        }
        Ok(())
    }

    /// Living actors hostile to the player.
    pub fn hostiles_remaining(&self) -> usize {
        self.state
            .entities
            .iter()
            .filter(|actor| actor.is_alive() && actor.faction.is_hostile_to(&Faction::Player))
            .count()
    }

    fn stop_reason(&self) -> Option<StopReason> {
        let player_dead = matches!(self.state.outcome, Some(GameOutcome::PlayerDied { .. }))
            || !self
                .state
                .entities
                .player()
                .is_some_and(|player| player.is_alive());
        if player_dead {
            Some(StopReason::PlayerDied)
        } else if self.hostiles_remaining() == 0 {
            Some(StopReason::Cleared)
        } else {
            None
        }
    }
}
