//! Integration tests for whole-game behavior through the public facade

use blockfall::core::board::{row_with_gaps, Row, EMPTY_ROW};
use blockfall::core::{Board, GameState, Phase, Transition};
use blockfall::engine::replay;
use blockfall::types::{Color, GameEvent, ShapeId, SoundCue, BOARD_COLS, BOARD_ROWS};

fn playing_with(shape: ShapeId, board: Board) -> GameState {
    let seed = (0u32..)
        .find(|&s| GameState::new(s).current().shape() == shape)
        .expect("some seed starts with every shape");
    GameState::new(seed).step(GameEvent::Start).state.with_board(board)
}

fn board_with(rows: &[(usize, Row)]) -> Board {
    let mut all = [EMPTY_ROW; BOARD_ROWS];
    for &(index, row) in rows {
        all[index] = row;
    }
    Board::from_rows(all)
}

/// Gravity-tick until the active piece locks
fn tick_until_locked(mut state: GameState) -> Transition {
    for _ in 0..BOARD_ROWS + 1 {
        let t = state.step(GameEvent::GravityTick);
        if t.outcome.locked || t.state.game_over() {
            return t;
        }
        state = t.state;
    }
    panic!("piece never locked");
}

// ============== Lifecycle Tests ==============

#[test]
fn test_game_lifecycle() {
    let state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::NotStarted);
    assert!(state.snapshot().active.is_none());

    let state = state.step(GameEvent::Start).state;
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.snapshot().active.is_some());
    assert_eq!(state.score(), 0);
    assert_eq!(state.gravity_interval_ms(), 1000);
}

#[test]
fn test_events_before_start_are_ignored() {
    let state = GameState::new(12345);
    for event in [
        GameEvent::MoveLeft,
        GameEvent::MoveRight,
        GameEvent::SoftDrop,
        GameEvent::GravityTick,
        GameEvent::Rotate,
        GameEvent::HardDrop,
    ] {
        let t = state.step(event);
        assert_eq!(t.state, state, "{} changed an unstarted game", event.as_str());
        assert!(t.outcome.cues.is_empty());
    }
}

#[test]
fn test_move_left_at_wall_is_silent_noop() {
    let mut state = playing_with(ShapeId::T, Board::new());
    for _ in 0..BOARD_COLS {
        state = state.step(GameEvent::MoveLeft).state;
    }
    assert!(state.current().minos().iter().any(|&(_, c)| c == 0));

    let t = state.step(GameEvent::MoveLeft);
    assert_eq!(t.state.board(), state.board());
    assert_eq!(t.state.score(), state.score());
    assert!(!t.outcome.cues.contains(&SoundCue::Move));
}

#[test]
fn test_soft_drop_scores_and_gravity_does_not() {
    let state = playing_with(ShapeId::T, Board::new());

    let soft = state.step(GameEvent::SoftDrop);
    assert_eq!(soft.state.score(), 1);
    assert_eq!(soft.outcome.cues.as_slice(), &[SoundCue::Move]);

    let tick = state.step(GameEvent::GravityTick);
    assert_eq!(tick.state.score(), 0);
    assert!(tick.outcome.cues.is_empty());
    assert_eq!(tick.state.current().minos(), soft.state.current().minos());
}

// ============== Scoring Tests ==============

#[test]
fn test_four_line_perfect_clear_scores_20000() {
    let gap = row_with_gaps(Color::Blue, &[0]);
    let board = board_with(&[(18, gap), (19, gap), (20, gap), (21, gap)]);
    let mut state = playing_with(ShapeId::I, board);

    // Stand the I up on its left side and push it into column 0.
    for _ in 0..3 {
        state = state.step(GameEvent::Rotate).state;
    }
    for _ in 0..4 {
        state = state.step(GameEvent::MoveLeft).state;
    }
    assert!(state.current().minos().iter().all(|&(_, c)| c == 0));

    let t = tick_until_locked(state);
    assert_eq!(t.outcome.lines_cleared, 4);
    assert!(t.outcome.perfect_clear);
    assert_eq!(t.state.score(), 20000);
    assert_eq!(t.state.lines(), 4);
    assert!(t.state.board().is_empty());
    assert_eq!(
        t.outcome.cues.as_slice(),
        &[SoundCue::Land, SoundCue::FourLines]
    );
}

#[test]
fn test_single_at_level_three_scores_200() {
    let board = board_with(&[
        (20, row_with_gaps(Color::Red, &[0, 1, 2, 3, 4, 5, 6, 7, 8])),
        (21, row_with_gaps(Color::Red, &[3, 4, 5, 6])),
    ]);
    let state = playing_with(ShapeId::I, board).with_totals(500, 30, 700);
    assert_eq!(state.level(), 3);

    let t = tick_until_locked(state);
    assert_eq!(t.outcome.lines_cleared, 1);
    assert!(!t.outcome.perfect_clear);
    assert_eq!(t.state.score(), 700);
    assert_eq!(t.state.lines(), 31);
    assert_eq!(t.state.level(), 3);
    assert_eq!(t.outcome.gravity_changed, None);
    // The leftover block fell into the bottom row.
    assert_eq!(t.state.board().cell(21, 9), Some(Color::Red));
    assert_eq!(t.state.board().filled_count(), 1);
}

#[test]
fn test_tenth_line_levels_up_and_speeds_gravity() {
    let board = board_with(&[
        (20, row_with_gaps(Color::Red, &[0, 1, 2, 3, 4, 5, 6, 7, 8])),
        (21, row_with_gaps(Color::Red, &[3, 4, 5, 6])),
    ]);
    let state = playing_with(ShapeId::I, board).with_totals(0, 9, 1000);
    assert_eq!(state.level(), 0);

    let t = tick_until_locked(state);
    assert_eq!(t.state.level(), 1);
    assert_eq!(t.state.lines(), 10);
    assert_eq!(t.state.gravity_interval_ms(), 900);
    assert!(t.outcome.level_up);
    assert_eq!(t.outcome.gravity_changed, Some(900));
    assert_eq!(
        t.outcome.cues.as_slice(),
        &[SoundCue::Land, SoundCue::LevelUp, SoundCue::LineClear]
    );
}

#[test]
fn test_level_up_below_100ms_uses_fine_step() {
    let board = board_with(&[(21, row_with_gaps(Color::Red, &[3, 4, 5, 6]))]);
    let state = playing_with(ShapeId::I, board).with_totals(0, 19, 100);

    let t = tick_until_locked(state);
    assert_eq!(t.state.level(), 2);
    assert_eq!(t.state.gravity_interval_ms(), 75);
}

// ============== Game Over Tests ==============

#[test]
fn test_spawn_collision_ends_game() {
    let board = board_with(&[(2, row_with_gaps(Color::Green, &[0]))]);
    let state = playing_with(ShapeId::T, board);

    let t = state.step(GameEvent::GravityTick);
    assert_eq!(t.state.phase(), Phase::GameOver);
    assert!(t.state.game_over());
    assert!(!t.state.started());
    assert_eq!(t.state.score(), state.score());
    assert_eq!(t.state.board(), state.board());
    assert_eq!(t.outcome.cues.as_slice(), &[SoundCue::GameOver]);
    assert!(!t.outcome.save_requested);

    // Frozen until restarted.
    let after = t.state.step(GameEvent::MoveLeft);
    assert_eq!(after.state, t.state);

    let restarted = t.state.step(GameEvent::Start).state;
    assert!(restarted.is_playing());
    assert!(restarted.board().is_empty());
}

#[test]
fn test_hard_drop_top_out_keeps_score_and_board() {
    let rows: Vec<Row> = (0..BOARD_ROWS)
        .map(|r| if r >= 3 { row_with_gaps(Color::Green, &[9]) } else { EMPTY_ROW })
        .collect();
    let state = playing_with(ShapeId::O, Board::from_rows(rows));
    let filled = state.board().filled_count();

    let t = state.step(GameEvent::HardDrop);
    assert_eq!(t.state.phase(), Phase::GameOver);
    assert_eq!(t.outcome.cues.as_slice(), &[SoundCue::GameOver]);
    assert_eq!(t.state.score(), 0);
    assert_eq!(t.state.board().filled_count(), filled);
}

#[test]
fn test_filling_the_well_eventually_ends_game() {
    let events = std::iter::once(GameEvent::Start)
        .chain(std::iter::repeat(GameEvent::HardDrop).take(200));
    let state = replay(77, events);

    assert!(state.game_over());
    assert!(!state.started());
}

// ============== Determinism Tests ==============

#[test]
fn test_same_seed_same_game() {
    let events = [
        GameEvent::Start,
        GameEvent::MoveLeft,
        GameEvent::Rotate,
        GameEvent::SoftDrop,
        GameEvent::HardDrop,
        GameEvent::MoveRight,
        GameEvent::MoveRight,
        GameEvent::GravityTick,
        GameEvent::HardDrop,
    ];
    let a = replay(2024, events);
    let b = replay(2024, events);

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a.snapshot()).unwrap(),
        serde_json::to_string(&b.snapshot()).unwrap()
    );
}

#[test]
fn test_locked_piece_is_previous_next() {
    let mut state = GameState::new(5).step(GameEvent::Start).state;
    for _ in 0..5 {
        let upcoming = state.next_piece();
        let t = state.step(GameEvent::HardDrop);
        assert!(t.outcome.locked);
        assert_eq!(t.state.current().definition(), upcoming);
        state = t.state;
    }
}
