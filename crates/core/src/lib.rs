//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules and the game state machine. It
//! performs no I/O: every transition is a function from one [`GameState`] to a
//! new one, plus an [`Outcome`] describing the side effects a host should carry
//! out (sound cues, save requests, gravity retiming).
//!
//! - **Deterministic**: the same seed and event stream always produce the same game
//! - **Persistent**: states and random-sequence nodes are values; old ones stay valid
//! - **Headless**: rendering, audio and persistence live outside this crate
//!
//! # Module Structure
//!
//! - [`catalog`]: piece shapes, colours, rotation states and preview cells
//! - [`rng`]: persistent random index sequence
//! - [`board`]: 22x10 grid with copy-on-write updates
//! - [`collision`]: leading-edge probes and wall/floor/stack tests
//! - [`line_clear`]: full-row removal and stack compaction
//! - [`scoring`]: line bonuses, soft drop points, levels and gravity intervals
//! - [`game_state`]: the state machine
//! - [`snapshot`]: read-only views for renderers and save functions
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameEvent, SoundCue};
//!
//! let game = GameState::new(12345).step(GameEvent::Start).state;
//! assert!(game.is_playing());
//!
//! let moved = game.step(GameEvent::MoveRight);
//! assert_eq!(moved.outcome.cues.as_slice(), &[SoundCue::Move]);
//!
//! let dropped = moved.state.step(GameEvent::HardDrop);
//! assert!(dropped.outcome.locked);
//! assert!(dropped.outcome.save_requested);
//! ```

pub mod board;
pub mod catalog;
pub mod collision;
pub mod game_state;
pub mod line_clear;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, Row, EMPTY_ROW};
pub use catalog::{PieceDefinition, CATALOG};
pub use collision::{drop_preview, extremal_coordinates, would_collide};
pub use game_state::{Cues, GameState, Outcome, Phase, PlacedPiece, Transition};
pub use line_clear::{remove_cleared_lines, LineClear};
pub use rng::{random_numbers, RandomSequence};
pub use scoring::{line_bonus, next_gravity_interval, score, soft_drop_bonus};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
