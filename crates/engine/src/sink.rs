//! External collaborators the engine notifies.
//!
//! Both sinks are fire-and-forget: the engine calls them synchronously during a
//! transition and never looks at what they did.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use crate::core::GameState;
use crate::types::SoundCue;

/// Receives one tag per meaningful transition
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Receives the full state after every lock
pub trait SaveSink {
    fn save(&mut self, state: &GameState) -> Result<()>;
}

impl<F> SoundSink for F
where
    F: FnMut(SoundCue),
{
    fn play(&mut self, cue: SoundCue) {
        self(cue)
    }
}

/// A shared save sink stays inspectable after the engine takes ownership
impl<T: SaveSink> SaveSink for Rc<RefCell<T>> {
    fn save(&mut self, state: &GameState) -> Result<()> {
        self.borrow_mut().save(state)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullSound;

impl SoundSink for NullSound {
    fn play(&mut self, _cue: SoundCue) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullSave;

impl SaveSink for NullSave {
    fn save(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }
}

/// Keeps every cue, for tests and replays
#[derive(Debug, Default, Clone)]
pub struct RecordingSound {
    pub cues: Vec<SoundCue>,
}

impl SoundSink for RecordingSound {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}

/// Keeps every saved state
#[derive(Debug, Default, Clone)]
pub struct RecordingSave {
    pub saves: Vec<GameState>,
}

impl SaveSink for RecordingSave {
    fn save(&mut self, state: &GameState) -> Result<()> {
        self.saves.push(state.clone());
        Ok(())
    }
}
