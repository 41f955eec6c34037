//! Game state module - the canonical game snapshot and its transitions
//!
//! [`GameState`] is a value. Every transition borrows the current state and
//! returns a [`Transition`] holding a brand-new state plus an [`Outcome`]
//! describing what happened (sound cues, whether a save is due, gravity changes).
//! Nothing is mutated in place, so callers can keep old states for replay.
//!
//! Lifecycle: `NotStarted` → `Playing` → `GameOver`. `Start` is accepted in any
//! phase; every other event is ignored unless the game is playing.
//!
//! The board holds the settled stack plus the active piece once the piece has
//! taken its first step. Collision checks only probe the piece's leading edge,
//! so the painted piece never collides with itself.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::catalog::{
    clockwise_kicks, offset_cells, piece, PieceDefinition, PieceShape, MAX_PIECE_INDEX,
};
use crate::collision::{blocked, drop_preview, extremal_coordinates, shifted, would_collide};
use crate::line_clear::remove_cleared_lines;
use crate::rng::{random_numbers, RandomSequence};
use crate::scoring::{advance, hard_drop_bonus, soft_drop_bonus};
use crate::types::*;

/// Leading edge inside the spawn window with the stack directly beneath it
fn stuck_in_spawn(minos: &PieceShape, board: &Board) -> bool {
    extremal_coordinates(minos, Direction::Down)
        .iter()
        .filter(|&&(row, _)| row < SPAWN_CHECK_ROWS)
        .any(|&(row, col)| board.is_occupied((row + 1, col)))
}

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Playing,
    GameOver,
}

/// A piece definition positioned on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    def: &'static PieceDefinition,
    rotation: Rotation,
    origin: Coord,
    minos: PieceShape,
    ghost: PieceShape,
    /// Whether `minos` are currently painted on the board
    painted: bool,
}

impl PlacedPiece {
    /// Place `def` at the spawn origin, projecting its ghost onto `board`
    pub fn spawn(def: &'static PieceDefinition, board: &Board) -> Self {
        let minos = def.spawn_cells();
        Self {
            def,
            rotation: Rotation::North,
            origin: SPAWN_ORIGIN,
            minos,
            ghost: drop_preview(&minos, board),
            painted: false,
        }
    }

    pub fn definition(&self) -> &'static PieceDefinition {
        self.def
    }

    pub fn shape(&self) -> ShapeId {
        self.def.shape
    }

    pub fn color(&self) -> Color {
        self.def.color
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Absolute cells the piece occupies
    pub fn minos(&self) -> &PieceShape {
        &self.minos
    }

    /// Absolute cells the piece would occupy after an instant drop
    pub fn ghost(&self) -> &PieceShape {
        &self.ghost
    }

    pub fn is_painted(&self) -> bool {
        self.painted
    }

    fn moved_to(&self, origin: Coord, rotation: Rotation, minos: PieceShape, board: &Board) -> Self {
        Self {
            def: self.def,
            rotation,
            origin,
            minos,
            ghost: drop_preview(&minos, board),
            painted: true,
        }
    }
}

/// Sound cues emitted by one transition, in priority order
pub type Cues = ArrayVec<SoundCue, 4>;

/// What a transition did, besides producing the new state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub cues: Cues,
    /// The active piece locked into the stack
    pub locked: bool,
    pub lines_cleared: u32,
    pub level_up: bool,
    pub perfect_clear: bool,
    /// New gravity interval; the caller must retime its gravity timer
    pub gravity_changed: Option<u32>,
    /// The new state should be handed to the persistence collaborator
    pub save_requested: bool,
}

impl Outcome {
    fn cue(cue: SoundCue) -> Self {
        let mut outcome = Self::default();
        outcome.cues.push(cue);
        outcome
    }
}

/// A new state plus what happened on the way there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub outcome: Outcome,
}

impl Transition {
    fn unchanged(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            outcome: Outcome::default(),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    score: u32,
    level: u32,
    lines: u32,
    current: PlacedPiece,
    next: &'static PieceDefinition,
    /// Node that produced `next`
    sequence: RandomSequence,
    board: Board,
    gravity_ms: u32,
    started: bool,
    game_over: bool,
    seed: u32,
}

impl GameState {
    /// A not-yet-started game with its first two pieces drawn from `seed`
    pub fn new(seed: u32) -> Self {
        let first = random_numbers(MAX_PIECE_INDEX, seed);
        let second = first.next();
        let board = Board::new();

        Self {
            score: 0,
            level: 0,
            lines: 0,
            current: PlacedPiece::spawn(piece(first.value()), &board),
            next: piece(second.value()),
            sequence: second,
            board,
            gravity_ms: BASE_GRAVITY_MS,
            started: false,
            game_over: false,
            seed,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.started, self.game_over) {
            (_, true) => Phase::GameOver,
            (true, false) => Phase::Playing,
            (false, false) => Phase::NotStarted,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_playing(&self) -> bool {
        self.phase() == Phase::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity_ms
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn current(&self) -> &PlacedPiece {
        &self.current
    }

    pub fn next_piece(&self) -> &'static PieceDefinition {
        self.next
    }

    pub fn sequence(&self) -> &RandomSequence {
        &self.sequence
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board with the active piece drawn in, even before its first step
    pub fn display_board(&self) -> Board {
        if self.started && !self.current.painted {
            self.board
                .with_cells(&self.current.minos, Some(self.current.color()))
        } else {
            self.board.clone()
        }
    }

    /// Apply one event
    pub fn step(&self, event: GameEvent) -> Transition {
        match event {
            GameEvent::Start => self.start(),
            _ if !self.is_playing() => Transition::unchanged(self),
            GameEvent::MoveLeft => self.shift(Direction::Left),
            GameEvent::MoveRight => self.shift(Direction::Right),
            GameEvent::SoftDrop => self.descend(true),
            GameEvent::GravityTick => self.descend(false),
            GameEvent::Rotate => self.rotate(),
            GameEvent::HardDrop => self.hard_drop(),
        }
    }

    /// Fresh playing state, same seed
    pub fn start(&self) -> Transition {
        let mut state = Self::new(self.seed);
        state.started = true;
        Transition {
            state,
            outcome: Outcome::default(),
        }
    }

    pub fn move_left(&self) -> Transition {
        self.step(GameEvent::MoveLeft)
    }

    pub fn move_right(&self) -> Transition {
        self.step(GameEvent::MoveRight)
    }

    pub fn soft_drop(&self) -> Transition {
        self.step(GameEvent::SoftDrop)
    }

    pub fn gravity_tick(&self) -> Transition {
        self.step(GameEvent::GravityTick)
    }

    fn shift(&self, direction: Direction) -> Transition {
        if blocked(&self.current.minos, &self.board, direction) {
            return Transition::unchanged(self);
        }

        let (dr, dc) = direction.delta();
        let (row, col) = self.current.origin;
        let minos = shifted(&self.current.minos, direction);
        let board = self.repaint(&minos);
        let current = self
            .current
            .moved_to((row + dr, col + dc), self.current.rotation, minos, &board);

        Transition {
            state: self.with_active(board, current),
            outcome: Outcome::cue(SoundCue::Move),
        }
    }

    fn descend(&self, soft: bool) -> Transition {
        if stuck_in_spawn(&self.current.minos, &self.board) {
            return self.topped_out();
        }

        let probes = extremal_coordinates(&self.current.minos, Direction::Down);
        if would_collide(&probes, &self.board, Direction::Down) {
            return self.lock();
        }

        let (row, col) = self.current.origin;
        let minos = shifted(&self.current.minos, Direction::Down);
        let board = self.repaint(&minos);
        let current = self
            .current
            .moved_to((row + 1, col), self.current.rotation, minos, &board);
        let mut state = self.with_active(board, current);

        let mut outcome = Outcome::default();
        if soft {
            state.score = state.score.saturating_add(soft_drop_bonus(self.level));
            outcome.cues.push(SoundCue::Move);
        }
        Transition { state, outcome }
    }

    fn rotate(&self) -> Transition {
        let def = self.current.def;
        if !def.rotates() {
            return Transition::unchanged(self);
        }

        let rotation = self.current.rotation.rotate_cw();
        let shape = def.shape_for(rotation);
        let base = self.lifted();
        let (row, col) = self.current.origin;

        for &(kr, kc) in clockwise_kicks(def.shape, self.current.rotation) {
            let origin = (row + kr, col + kc);
            let minos = offset_cells(&shape, origin);
            if minos.iter().all(|&pos| base.is_vacant(pos)) {
                let board = base.with_cells(&minos, Some(def.color));
                let current = self.current.moved_to(origin, rotation, minos, &board);
                return Transition {
                    state: self.with_active(board, current),
                    outcome: Outcome::cue(SoundCue::Rotate),
                };
            }
        }

        Transition::unchanged(self)
    }

    fn hard_drop(&self) -> Transition {
        let ghost = self.current.ghost;
        let rows = (ghost[0].0 - self.current.minos[0].0) as u32;
        if rows == 0 {
            return self.descend(false);
        }
        // Topping out ends the game before any drop points or paint.
        if stuck_in_spawn(&ghost, &self.lifted()) {
            return self.topped_out();
        }

        let (row, col) = self.current.origin;
        let board = self.repaint(&ghost);
        let current = self
            .current
            .moved_to((row + rows as i8, col), self.current.rotation, ghost, &board);
        let mut dropped = self.with_active(board, current);
        dropped.score = dropped
            .score
            .saturating_add(hard_drop_bonus(self.level, rows));

        // Resting now, so this step locks.
        dropped.descend(false)
    }

    /// Lock the active piece, clear lines, update totals and spawn the next piece.
    fn lock(&self) -> Transition {
        let settled = if self.current.painted {
            self.board.clone()
        } else {
            self.board
                .with_cells(&self.current.minos, Some(self.current.color()))
        };

        let clear = remove_cleared_lines(&settled);
        let progress = advance(
            self.score,
            self.lines,
            self.level,
            self.gravity_ms,
            &clear.cleared,
            &clear.remaining,
        );

        let sequence = self.sequence.next();
        let state = Self {
            score: progress.score,
            level: progress.level,
            lines: progress.lines,
            current: PlacedPiece::spawn(self.next, &clear.board),
            next: piece(sequence.value()),
            sequence,
            board: clear.board,
            gravity_ms: progress.gravity_ms,
            started: self.started,
            game_over: self.game_over,
            seed: self.seed,
        };

        let mut outcome = Outcome {
            locked: true,
            lines_cleared: clear.cleared.len() as u32,
            level_up: progress.level_up,
            perfect_clear: progress.perfect_clear,
            gravity_changed: progress.level_up.then_some(progress.gravity_ms),
            save_requested: true,
            ..Outcome::default()
        };
        outcome.cues.push(SoundCue::Land);
        if progress.level_up {
            outcome.cues.push(SoundCue::LevelUp);
        }
        match clear.cleared.len() {
            0 => {}
            4 => outcome.cues.push(SoundCue::FourLines),
            _ => outcome.cues.push(SoundCue::LineClear),
        }

        Transition { state, outcome }
    }

    /// Board with the active piece removed
    fn lifted(&self) -> Board {
        if self.current.painted {
            self.board.with_cells(&self.current.minos, None)
        } else {
            self.board.clone()
        }
    }

    /// Board with the active piece moved to `minos`
    fn repaint(&self, minos: &PieceShape) -> Board {
        if self.current.painted {
            self.board
                .with_piece_moved(&self.current.minos, minos, self.current.color())
        } else {
            self.board.with_cells(minos, Some(self.current.color()))
        }
    }

    fn with_active(&self, board: Board, current: PlacedPiece) -> Self {
        Self {
            board,
            current,
            ..self.clone()
        }
    }

    fn topped_out(&self) -> Transition {
        Transition {
            state: self.ended(),
            outcome: Outcome::cue(SoundCue::GameOver),
        }
    }

    fn ended(&self) -> Self {
        Self {
            started: false,
            game_over: true,
            ..self.clone()
        }
    }

    /// Replace the board, keeping totals and the piece sequence (tests and tooling).
    ///
    /// The active piece is respawned, unpainted, at the spawn origin. Cells it
    /// had painted stay behind on the old board.
    #[must_use]
    pub fn with_board(&self, board: Board) -> Self {
        let current = PlacedPiece::spawn(self.current.def, &board);
        Self {
            board,
            current,
            ..self.clone()
        }
    }

    /// Override running totals (tests and tooling).
    ///
    /// The level is recomputed from `lines`; the board and active piece are kept.
    #[must_use]
    pub fn with_totals(&self, score: u32, lines: u32, gravity_ms: u32) -> Self {
        Self {
            score,
            lines,
            level: crate::scoring::calculate_level(lines),
            gravity_ms,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}
