use std::fmt;

use crate::core::{GameSnapshot, GameState, Outcome, Transition};
use crate::sink::{NullSave, NullSound, SaveSink, SoundSink};
use crate::types::GameEvent;

/// Construction-time settings. Board size, spawn window and initial gravity are
/// fixed constants; only the piece sequence seed varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub seed: u32,
}

impl EngineConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }
}

/// Owns the canonical [`GameState`] and carries out the side effects each
/// transition asks for.
pub struct GameEngine {
    state: GameState,
    last: Outcome,
    sound: Box<dyn SoundSink>,
    save: Box<dyn SaveSink>,
}

impl GameEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_sinks(config, NullSound, NullSave)
    }

    pub fn with_sinks<S, P>(config: EngineConfig, sound: S, save: P) -> Self
    where
        S: SoundSink + 'static,
        P: SaveSink + 'static,
    {
        Self {
            state: GameState::new(config.seed),
            last: Outcome::default(),
            sound: Box::new(sound),
            save: Box::new(save),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Interval the host's gravity timer should run at
    pub fn gravity_interval_ms(&self) -> u32 {
        self.state.gravity_interval_ms()
    }

    /// Outcome of the most recent event
    pub fn last_outcome(&self) -> &Outcome {
        &self.last
    }

    /// Apply one event, notify the sinks, and keep the new state.
    pub fn handle(&mut self, event: GameEvent) -> &Outcome {
        let Transition { state, outcome } = self.state.step(event);
        self.state = state;

        for &cue in &outcome.cues {
            self.sound.play(cue);
        }
        if outcome.save_requested {
            // Save failures belong to the collaborator; the transition stands.
            let _ = self.save.save(&self.state);
        }

        self.last = outcome;
        &self.last
    }

    /// Apply events in order, stopping early if the game ends
    pub fn run<I>(&mut self, events: I) -> &GameState
    where
        I: IntoIterator<Item = GameEvent>,
    {
        for event in events {
            self.handle(event);
            if self.state.game_over() {
                break;
            }
        }
        &self.state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

/// Replay `events` from a fresh game with `seed`, without side effects
pub fn replay<I>(seed: u32, events: I) -> GameState
where
    I: IntoIterator<Item = GameEvent>,
{
    events
        .into_iter()
        .fold(GameState::new(seed), |state, event| state.step(event).state)
}
