use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game_state::{GameState, PlacedPiece};
use crate::types::{Cell, Color, Coord, Rotation, ShapeId, PREVIEW_COLS, PREVIEW_ROWS};

/// Side-panel grid showing the next piece
pub type PreviewGrid = [[Cell; PREVIEW_COLS]; PREVIEW_ROWS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub shape: ShapeId,
    pub color: Color,
    pub rotation: Rotation,
    pub minos: [Coord; 4],
    pub ghost: [Coord; 4],
}

impl From<&PlacedPiece> for ActiveSnapshot {
    fn from(value: &PlacedPiece) -> Self {
        Self {
            shape: value.shape(),
            color: value.color(),
            rotation: value.rotation(),
            minos: *value.minos(),
            ghost: *value.ghost(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NextSnapshot {
    pub shape: ShapeId,
    pub color: Color,
    pub preview: [Coord; 4],
}

/// Read-only view of a [`GameState`] for renderers and save functions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Play field with the active piece drawn in
    pub board: Board,
    pub active: Option<ActiveSnapshot>,
    pub next: NextSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub gravity_ms: u32,
    pub started: bool,
    pub game_over: bool,
    pub seed: u32,
}

impl GameSnapshot {
    /// Next piece rendered into the preview grid; blank until the game starts.
    pub fn preview_grid(&self) -> PreviewGrid {
        let mut grid = [[None; PREVIEW_COLS]; PREVIEW_ROWS];
        if self.started {
            for &(row, col) in &self.next.preview {
                grid[row as usize][col as usize] = Some(self.next.color);
            }
        }
        grid
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let next = state.next_piece();
        Self {
            board: state.display_board(),
            active: state
                .started()
                .then(|| ActiveSnapshot::from(state.current())),
            next: NextSnapshot {
                shape: next.shape,
                color: next.color,
                preview: next.preview,
            },
            score: state.score(),
            level: state.level(),
            lines: state.lines(),
            gravity_ms: state.gravity_interval_ms(),
            started: state.started(),
            game_over: state.game_over(),
            seed: state.seed(),
        }
    }
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
