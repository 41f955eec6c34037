//! Engine module - hosts a game and routes its side effects
//!
//! The core crate only describes side effects; this crate carries them out.
//! [`GameEngine`] keeps the current [`GameState`](crate::core::GameState),
//! applies events in delivery order, forwards sound cues to a [`SoundSink`] and
//! hands every post-lock state to a [`SaveSink`].
//!
//! The engine never schedules itself. After each event the host checks
//! [`Outcome::gravity_changed`](crate::core::Outcome) (or
//! [`GameEngine::gravity_interval_ms`]) and retimes its own gravity timer.
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{EngineConfig, GameEngine, RecordingSound, NullSave};
//! use blockfall_types::{GameEvent, SoundCue};
//!
//! let mut engine = GameEngine::with_sinks(
//!     EngineConfig::with_seed(7),
//!     RecordingSound::default(),
//!     NullSave,
//! );
//! engine.handle(GameEvent::Start);
//! let outcome = engine.handle(GameEvent::HardDrop);
//! assert_eq!(outcome.cues.first(), Some(&SoundCue::Land));
//! ```

pub mod engine;
pub mod sink;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use engine::{replay, EngineConfig, GameEngine};
pub use sink::{NullSave, NullSound, RecordingSave, RecordingSound, SaveSink, SoundSink};
