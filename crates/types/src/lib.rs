//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no behaviour beyond parsing and naming, so they
//! can be shared by the core state machine, the engine wrapper and any renderer.
//!
//! # Board Dimensions
//!
//! - **Rows**: 22 (indexed 0-21, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn window**: rows 0-2; a piece that cannot leave this window is game over
//!
//! Coordinates are always `(row, col)`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_GRAVITY_MS` | 1000 | Gravity interval at level 0 |
//! | `MIN_GRAVITY_MS` | 25 | Floor for the gravity interval |
//! | `GRAVITY_COARSE_STEP_MS` | 100 | Decrement per level while above 100ms |
//! | `GRAVITY_FINE_STEP_MS` | 25 | Decrement per level at or below 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameEvent, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(Color::from_str("cyan"), Some(Color::Cyan));
//! assert_eq!(GameEvent::from_str("moveLeft"), Some(GameEvent::MoveLeft));
//! assert_eq!(BOARD_ROWS, 22);
//! assert_eq!(BOARD_COLS, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Number of rows on the board
pub const BOARD_ROWS: usize = 22;

/// Number of columns on the board
pub const BOARD_COLS: usize = 10;

/// Index of the bottom row
pub const LAST_ROW: i8 = BOARD_ROWS as i8 - 1;

/// Index of the rightmost column
pub const LAST_COL: i8 = BOARD_COLS as i8 - 1;

/// Rows (from the top) inspected for the spawn-collision game over check
pub const SPAWN_CHECK_ROWS: i8 = 3;

/// Board origin used for every freshly spawned piece
pub const SPAWN_ORIGIN: Coord = (0, 3);

/// Side-panel preview grid height
pub const PREVIEW_ROWS: usize = 4;

/// Side-panel preview grid width
pub const PREVIEW_COLS: usize = 6;

/// Gravity interval at level 0
pub const BASE_GRAVITY_MS: u32 = 1000;

/// Gravity never gets faster than this
pub const MIN_GRAVITY_MS: u32 = 25;

/// Per-level decrement while the interval is above `GRAVITY_COARSE_STEP_MS`
pub const GRAVITY_COARSE_STEP_MS: u32 = 100;

/// Per-level decrement once the interval reaches `GRAVITY_COARSE_STEP_MS`
pub const GRAVITY_FINE_STEP_MS: u32 = 25;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing N lines (index = N), before the level multiplier.
pub const LINE_BONUS: [u32; 5] = [0, 100, 400, 900, 2000];

/// Perfect clears multiply the whole post-clear score by this factor.
pub const PERFECT_CLEAR_MULTIPLIER: u32 = 10;

/// A board coordinate or offset, `(row, col)`.
pub type Coord = (i8, i8);

/// Block colours. Every piece shape has its own colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl Color {
    /// Parse colour from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Color;
    ///
    /// assert_eq!(Color::from_str("Orange"), Some(Color::Orange));
    /// assert_eq!(Color::from_str("black"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyan" => Some(Color::Cyan),
            "yellow" => Some(Color::Yellow),
            "purple" => Some(Color::Purple),
            "green" => Some(Color::Green),
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Orange => "orange",
        }
    }
}

/// A cell on the board
///
/// - `None`: empty ("no block")
/// - `Some(Color)`: filled with a block of that colour
pub type Cell = Option<Color>;

/// The seven piece shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::I => "i",
            ShapeId::O => "o",
            ShapeId::T => "t",
            ShapeId::S => "s",
            ShapeId::Z => "z",
            ShapeId::J => "j",
            ShapeId::L => "l",
        }
    }
}

/// Rotation states, clockwise order: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Position in the clockwise cycle (North = 0)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Axis along which collisions are probed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` step one cell in this direction
    pub fn delta(&self) -> Coord {
        match self {
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Events that drive the state machine
///
/// Human input and the external gravity timer both arrive as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameEvent {
    /// Begin a fresh game (also restarts after game over)
    Start,
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Player-initiated downward step (awards points)
    SoftDrop,
    /// Timer-driven downward step
    GravityTick,
    /// Rotate clockwise
    Rotate,
    /// Drop to the resting position and lock
    HardDrop,
}

impl GameEvent {
    /// Parse event from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameEvent;
    ///
    /// assert_eq!(GameEvent::from_str("softDrop"), Some(GameEvent::SoftDrop));
    /// assert_eq!(GameEvent::from_str("tick"), Some(GameEvent::GravityTick));
    /// assert_eq!(GameEvent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameEvent::Start),
            "moveleft" | "left" => Some(GameEvent::MoveLeft),
            "moveright" | "right" => Some(GameEvent::MoveRight),
            "softdrop" | "down" => Some(GameEvent::SoftDrop),
            "gravitytick" | "tick" => Some(GameEvent::GravityTick),
            "rotate" => Some(GameEvent::Rotate),
            "harddrop" | "drop" => Some(GameEvent::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Start => "start",
            GameEvent::MoveLeft => "moveLeft",
            GameEvent::MoveRight => "moveRight",
            GameEvent::SoftDrop => "softDrop",
            GameEvent::GravityTick => "gravityTick",
            GameEvent::Rotate => "rotate",
            GameEvent::HardDrop => "hardDrop",
        }
    }
}

/// Sound tags emitted by transitions
///
/// Within one transition cues are ordered by priority:
/// `GameOver` > `Land` > `LevelUp` > `FourLines` > `LineClear` > `Move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundCue {
    Move,
    Rotate,
    Land,
    LevelUp,
    LineClear,
    FourLines,
    GameOver,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Move => "move",
            SoundCue::Rotate => "rotate",
            SoundCue::Land => "land",
            SoundCue::LevelUp => "levelUp",
            SoundCue::LineClear => "lineClear",
            SoundCue::FourLines => "fourLines",
            SoundCue::GameOver => "gameOver",
        }
    }
}
