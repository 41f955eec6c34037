//! Piece catalog - static table of tetromino shapes, colours and rotations
//!
//! Shapes are data, not types: each [`PieceDefinition`] is a row in [`CATALOG`],
//! indexed by the value a [`RandomSequence`](crate::rng::RandomSequence) produces.
//! Offsets are `(row, col)` relative to the piece origin (top-left of its box).

use crate::types::{Color, Coord, Rotation, ShapeId, SPAWN_ORIGIN};

/// Offsets of the four minos for one rotation state
pub type PieceShape = [Coord; 4];

/// Kick offsets tried in order when a rotation is blocked in place
pub type KickList = [Coord; 5];

/// Immutable description of one piece shape
#[derive(Debug, PartialEq, Eq)]
pub struct PieceDefinition {
    pub shape: ShapeId,
    pub color: Color,
    /// Offsets per rotation state, indexed by [`Rotation::index`]
    pub rotations: [PieceShape; 4],
    /// Cells inside the `PREVIEW_ROWS x PREVIEW_COLS` side-panel grid
    pub preview: PieceShape,
}

impl PieceDefinition {
    pub fn shape_for(&self, rotation: Rotation) -> PieceShape {
        self.rotations[rotation.index()]
    }

    /// Absolute board cells occupied at spawn
    pub fn spawn_cells(&self) -> PieceShape {
        offset_cells(&self.shape_for(Rotation::North), SPAWN_ORIGIN)
    }

    pub fn rotates(&self) -> bool {
        self.shape != ShapeId::O
    }
}

/// Translate a shape by an origin
pub fn offset_cells(shape: &PieceShape, (row, col): Coord) -> PieceShape {
    shape.map(|(dr, dc)| (row + dr, col + dc))
}

/// All seven pieces. Index order is the order the random sequence draws from.
pub static CATALOG: [PieceDefinition; 7] = [
    PieceDefinition {
        shape: ShapeId::I,
        color: Color::Cyan,
        rotations: [
            [(1, 0), (1, 1), (1, 2), (1, 3)],
            [(0, 2), (1, 2), (2, 2), (3, 2)],
            [(2, 0), (2, 1), (2, 2), (2, 3)],
            [(0, 1), (1, 1), (2, 1), (3, 1)],
        ],
        preview: [(2, 1), (2, 2), (2, 3), (2, 4)],
    },
    PieceDefinition {
        shape: ShapeId::O,
        color: Color::Yellow,
        rotations: [[(0, 1), (0, 2), (1, 1), (1, 2)]; 4],
        preview: [(1, 2), (1, 3), (2, 2), (2, 3)],
    },
    PieceDefinition {
        shape: ShapeId::T,
        color: Color::Purple,
        rotations: [
            [(0, 1), (1, 0), (1, 1), (1, 2)],
            [(0, 1), (1, 1), (1, 2), (2, 1)],
            [(1, 0), (1, 1), (1, 2), (2, 1)],
            [(0, 1), (1, 0), (1, 1), (2, 1)],
        ],
        preview: [(1, 2), (2, 1), (2, 2), (2, 3)],
    },
    PieceDefinition {
        shape: ShapeId::S,
        color: Color::Green,
        rotations: [
            [(0, 1), (0, 2), (1, 0), (1, 1)],
            [(0, 1), (1, 1), (1, 2), (2, 2)],
            [(1, 1), (1, 2), (2, 0), (2, 1)],
            [(0, 0), (1, 0), (1, 1), (2, 1)],
        ],
        preview: [(1, 2), (1, 3), (2, 1), (2, 2)],
    },
    PieceDefinition {
        shape: ShapeId::Z,
        color: Color::Red,
        rotations: [
            [(0, 0), (0, 1), (1, 1), (1, 2)],
            [(0, 2), (1, 1), (1, 2), (2, 1)],
            [(1, 0), (1, 1), (2, 1), (2, 2)],
            [(0, 1), (1, 0), (1, 1), (2, 0)],
        ],
        preview: [(1, 1), (1, 2), (2, 2), (2, 3)],
    },
    PieceDefinition {
        shape: ShapeId::J,
        color: Color::Blue,
        rotations: [
            [(0, 0), (1, 0), (1, 1), (1, 2)],
            [(0, 1), (0, 2), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (1, 2), (2, 2)],
            [(0, 1), (1, 1), (2, 0), (2, 1)],
        ],
        preview: [(1, 1), (2, 1), (2, 2), (2, 3)],
    },
    PieceDefinition {
        shape: ShapeId::L,
        color: Color::Orange,
        rotations: [
            [(0, 2), (1, 0), (1, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (2, 2)],
            [(1, 0), (1, 1), (1, 2), (2, 0)],
            [(0, 0), (0, 1), (1, 1), (2, 1)],
        ],
        preview: [(1, 3), (2, 1), (2, 2), (2, 3)],
    },
];

/// Highest valid catalog index
pub const MAX_PIECE_INDEX: usize = CATALOG.len() - 1;

/// Look up a definition by sequence index
pub fn piece(index: usize) -> &'static PieceDefinition {
    &CATALOG[index]
}

/// Look up a definition by shape
pub fn by_shape(shape: ShapeId) -> &'static PieceDefinition {
    match shape {
        ShapeId::I => &CATALOG[0],
        ShapeId::O => &CATALOG[1],
        ShapeId::T => &CATALOG[2],
        ShapeId::S => &CATALOG[3],
        ShapeId::Z => &CATALOG[4],
        ShapeId::J => &CATALOG[5],
        ShapeId::L => &CATALOG[6],
    }
}

/// Clockwise kicks for J, L, S, T, Z, indexed by the rotation being left.
/// `(row, col)`, row grows downward.
const JLSTZ_KICKS: [KickList; 4] = [
    // N->E
    [(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)],
    // E->S
    [(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)],
    // S->W
    [(0, 0), (0, 1), (-1, 1), (2, 0), (2, 1)],
    // W->N
    [(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)],
];

/// Clockwise kicks for I
const I_KICKS: [KickList; 4] = [
    // N->E
    [(0, 0), (0, -2), (0, 1), (1, -2), (-2, 1)],
    // E->S
    [(0, 0), (0, -1), (0, 2), (-2, -1), (1, 2)],
    // S->W
    [(0, 0), (0, 2), (0, -1), (-1, 2), (2, -1)],
    // W->N
    [(0, 0), (0, 1), (0, -2), (2, 1), (-1, -2)],
];

const NO_KICKS: KickList = [(0, 0); 5];

/// Kicks to try when rotating clockwise out of `from`
pub fn clockwise_kicks(shape: ShapeId, from: Rotation) -> &'static KickList {
    match shape {
        ShapeId::O => &NO_KICKS,
        ShapeId::I => &I_KICKS[from.index()],
        _ => &JLSTZ_KICKS[from.index()],
    }
}
